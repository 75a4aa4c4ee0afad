//! Terminal output utilities.
//!
//! Provides formatting helpers and coloured listings for the console.

use colored::Colorize;

/// Width of the longest IPv4 CIDR, "255.255.255.255/32".
const CIDR_WIDTH: usize = 18;

/// Format a value as a right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A right-aligned string, unchanged if already wider than `width`
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// Format one numbered line of a CIDR listing.
pub fn format_cidr_row(index: usize, cidr: &str) -> String {
    format!("{}  {}", format_field(index, 5), format_field(cidr, CIDR_WIDTH))
}

/// Print a titled, numbered CIDR listing to stdout.
pub fn print_cidr_list<S: AsRef<str>>(title: &str, cidrs: &[S]) {
    println!("\n{} ({}):", title.bold(), cidrs.len());
    for (i, cidr) in cidrs.iter().enumerate() {
        println!("{}", format_cidr_row(i + 1, cidr.as_ref()));
    }
}

/// Print the before/after count of a merge.
pub fn print_summary(before: usize, after: usize) {
    let removed = before.saturating_sub(after);
    println!(
        "\nMerged {before} CIDRs into {after} CIDRs ({removed} {})",
        "folded".green()
    );
}
