//! CIDR string parsing and canonical ordering.

use crate::models::{CidrParseError, Ipv4};

/// Parse every string into an [`Ipv4`] block.
///
/// Stops at the first malformed entry; no partial result is returned.
pub fn parse_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<Ipv4>, CidrParseError> {
    cidrs.iter().map(|s| Ipv4::new(s.as_ref())).collect()
}

/// Parse every string into an [`Ipv4`] block, skipping malformed entries.
pub fn parse_cidrs_lenient<S: AsRef<str>>(cidrs: &[S]) -> Vec<Ipv4> {
    cidrs
        .iter()
        .filter_map(|s| match Ipv4::new(s.as_ref()) {
            Ok(net) => Some(net),
            Err(e) => {
                log::warn!("Skipping entry: {e}");
                None
            }
        })
        .collect()
}

/// Sort blocks by `(address, prefix length)` ascending.
pub fn sort_cidrs(mut networks: Vec<Ipv4>) -> Vec<Ipv4> {
    networks.sort();
    networks
}
