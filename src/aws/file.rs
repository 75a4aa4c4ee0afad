//! Local CIDR list input.

use std::error::Error;

/// Split text into CIDR entries, one per line.
///
/// Blank lines and `#` comments are skipped; a trailing comment after an
/// entry is removed.
pub fn parse_cidr_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read CIDR entries from a file, one per line.
pub fn read_cidr_file(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading CIDR file {path}: {e}"))?;
    let cidrs = parse_cidr_lines(&text);
    log::info!("Read {} CIDRs from {path}", cidrs.len());
    Ok(cidrs)
}
