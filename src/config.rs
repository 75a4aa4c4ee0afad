//! Runtime configuration.
//!
//! Constants plus settings read from the environment (after `.env` is loaded).

use crate::processing::MergeStrategy;
use std::error::Error;

/// Published AWS IP range document.
pub const AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";
/// Region used when `CIDR_MERGE_REGION` is not set.
pub const DEFAULT_REGION: &str = "cn-north-1";
/// log4rs configuration file, relative to the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const ENV_REGION: &str = "CIDR_MERGE_REGION";
pub const ENV_URL: &str = "CIDR_MERGE_URL";
pub const ENV_CACHE_FILE: &str = "CIDR_MERGE_CACHE_FILE";
pub const ENV_INPUT_FILE: &str = "CIDR_MERGE_INPUT_FILE";
pub const ENV_STRATEGY: &str = "CIDR_MERGE_STRATEGY";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Region whose prefixes are merged.
    pub region: String,
    /// Where to download the IP range document.
    pub url: String,
    /// Explicit cache file; must exist when set.
    pub cache_file: Option<String>,
    /// Local CIDR list used instead of the IP range document.
    pub input_file: Option<String>,
    pub strategy: MergeStrategy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            region: DEFAULT_REGION.to_string(),
            url: AWS_IP_RANGES_URL.to_string(),
            cache_file: None,
            input_file: None,
            strategy: MergeStrategy::default(),
        }
    }
}

impl Settings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Settings::default();

        let strategy = match get(ENV_STRATEGY) {
            Some(name) => name.parse::<MergeStrategy>()?,
            None => defaults.strategy,
        };

        let settings = Settings {
            region: get(ENV_REGION).unwrap_or(defaults.region),
            url: get(ENV_URL).unwrap_or(defaults.url),
            cache_file: get(ENV_CACHE_FILE),
            input_file: get(ENV_INPUT_FILE),
            strategy,
        };
        log::debug!("Settings: {settings:?}");
        Ok(settings)
    }
}
