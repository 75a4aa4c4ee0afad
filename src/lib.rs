//! Consolidate AWS IPv4 prefixes into a minimal set of CIDR blocks.
//!
//! The merge core ([`merge_cidrs`], [`processing`]) is pure and synchronous.
//! The [`aws`] module supplies the raw prefix list and [`output`] renders the
//! result.

pub mod aws;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use config::Settings;
use itertools::Itertools;
use std::error::Error;

pub use models::{CidrParseError, Ipv4};
pub use processing::{check_for_duplicate_cidrs, merge_cidrs, merge_cidrs_with, MergeStrategy};

/// Load the raw CIDR list for this run.
///
/// Reads `settings.input_file` when set, otherwise the region's prefixes from
/// the cached or freshly downloaded IP range document. Repeated entries are
/// dropped, keeping the first occurrence.
pub async fn get_input_cidrs(settings: &Settings) -> Result<Vec<String>, Box<dyn Error>> {
    let cidrs = match &settings.input_file {
        Some(path) => aws::read_cidr_file(path)?.into_iter().unique().collect(),
        None => {
            let ranges =
                aws::read_ip_ranges_cache(settings.cache_file.as_deref(), &settings.url).await?;
            let cidrs = processing::region_cidrs(&ranges, &settings.region);
            if cidrs.is_empty() {
                log::warn!(
                    "No prefixes for region '{}'. Known regions: {}",
                    settings.region,
                    processing::regions(&ranges).join(", ")
                );
            }
            cidrs
        }
    };
    Ok(cidrs)
}
