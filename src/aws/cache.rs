//! Cache management for the IP range document.
//!
//! Provides caching functionality to avoid downloading the document on every run.

use super::client::{fetch_ip_ranges, parse_ip_ranges};
use crate::models::IpRanges;
use std::error::Error;
use std::path::Path;

/// Default cache file name for today, e.g. `ip_ranges_cache_2024-05-01.json`.
pub fn default_cache_file() -> String {
    let now = chrono::Utc::now();
    format!("ip_ranges_cache_{}.json", now.format("%Y-%m-%d"))
}

/// Read the IP range document from a cache file, or download it if the cache doesn't exist.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file. If None, uses default naming.
/// * `url` - Where to download the document from when the default cache is missing.
///
/// # Returns
/// * `Ok(IpRanges)` - The document from cache or from AWS
/// * `Err` - If cache file specified but doesn't exist, or the download fails
pub async fn read_ip_ranges_cache(
    cache_file: Option<&str>,
    url: &str,
) -> Result<IpRanges, Box<dyn Error>> {
    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => default_cache_file(),
    };

    let ranges = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            parse_ip_ranges(&json)?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let ranges = fetch_ip_ranges(url).await?;

            let json = serde_json::to_string(&ranges)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing data to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            ranges
        }
    };

    Ok(ranges)
}
