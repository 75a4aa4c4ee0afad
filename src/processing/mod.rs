//! CIDR processing logic.
//!
//! This module contains the processing steps between the raw prefix list and
//! the merged output:
//! - [`dedup`] - Region filtering and de-duplication of raw prefixes
//! - [`parse`] - Parsing and canonical ordering
//! - [`merge`] - Consolidation of sorted blocks

mod dedup;
mod merge;
mod parse;

// Re-export public functions
pub use dedup::{check_for_duplicate_cidrs, region_cidrs, regions};
pub use merge::{
    covering_block, merge_cidrs, merge_cidrs_with, merge_networks, merge_sweep, MergeStrategy,
};
pub use parse::{parse_cidrs, parse_cidrs_lenient, sort_cidrs};
