//! Region filtering and de-duplication of raw prefixes.
//!
//! The AWS document lists a prefix once per service, so the same CIDR text
//! shows up several times within a region.

use crate::models::{IpRanges, Ipv4};
use itertools::Itertools;
use std::collections::HashSet;
use std::error::Error;

/// Collect the distinct IPv4 prefixes published for `region`.
///
/// Exact string repeats are removed. The result is sorted by
/// `(address, prefix length)`; entries that do not parse sort first and are
/// left for the merger to report.
pub fn region_cidrs(ranges: &IpRanges, region: &str) -> Vec<String> {
    let cidrs: Vec<String> = ranges
        .prefixes
        .iter()
        .filter(|p| p.region == region)
        .map(|p| p.ip_prefix.trim().to_string())
        .unique()
        .sorted_by_key(|cidr| Ipv4::new(cidr).ok())
        .collect();

    log::info!(
        "Region '{region}': {} distinct prefixes out of {} entries",
        cidrs.len(),
        ranges.count()
    );
    cidrs
}

/// All region identifiers in the document, sorted.
pub fn regions(ranges: &IpRanges) -> Vec<&str> {
    ranges
        .prefixes
        .iter()
        .map(|p| p.region.as_str())
        .unique()
        .sorted()
        .collect()
}

/// Return an error if any CIDR string appears more than once.
pub fn check_for_duplicate_cidrs(cidrs: &[String]) -> Result<(), Box<dyn Error>> {
    let mut seen = HashSet::new();

    for cidr in cidrs {
        if !seen.insert(cidr.as_str()) {
            return Err(format!("Duplicate found: {cidr}").into());
        }
    }
    Ok(())
}
