//! Domain models for CIDR merging.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 CIDR block, always aligned to its own size
//! - [`IpRanges`] and [`IpPrefix`] - the AWS IP range document

mod ip_ranges;
mod ipv4;

// Re-export public types
pub use ip_ranges::{IpPrefix, IpRanges};
pub use ipv4::{
    block_size, broadcast_addr, cut_addr, get_cidr_mask, lo_mask, CidrParseError, Ipv4,
    MAX_LENGTH,
};
