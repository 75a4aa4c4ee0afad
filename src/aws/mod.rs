//! CIDR input sources.
//!
//! This module handles obtaining the raw prefix list:
//! - [`client`] - Download of the AWS IP range document
//! - [`cache`] - Caching of the downloaded document
//! - [`file`] - Local one-per-line CIDR files

mod cache;
mod client;
mod file;

// Re-export public types and functions
pub use cache::{default_cache_file, read_ip_ranges_cache};
pub use client::{fetch_ip_ranges, parse_ip_ranges};
pub use file::{parse_cidr_lines, read_cidr_file};
