//! Output formatting for merged CIDRs.
//!
//! This module handles formatting and outputting CIDR lists:
//! - [`terraform`] - Terraform `entry` blocks
//! - [`terminal`] - Terminal output with colors

mod terminal;
mod terraform;

pub use terminal::{format_cidr_row, format_field, print_cidr_list, print_summary};
pub use terraform::{format_terraform_entries, format_terraform_entry};
