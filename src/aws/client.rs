//! AWS IP range document download.

use crate::models::IpRanges;
use std::error::Error;

/// Download and parse the IP range document.
///
/// # Arguments
/// * `url` - Location of `ip-ranges.json`
///
/// # Returns
/// * `Ok(IpRanges)` - The parsed document
/// * `Err` - On network failure, a non-2xx status, or malformed JSON
pub async fn fetch_ip_ranges(url: &str) -> Result<IpRanges, Box<dyn Error>> {
    log::info!("Fetching AWS IP ranges from {url}");

    let response = reqwest::get(url).await?.error_for_status()?;
    log::debug!("Response status: {}", response.status());

    let body = response.text().await?;
    log::debug!("Response body length: {}", body.len());

    parse_ip_ranges(&body)
}

/// Parse an IP range document, reporting the JSON path of any error.
pub fn parse_ip_ranges(json: &str) -> Result<IpRanges, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let ranges: IpRanges = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        format!(
            "Error parsing IP ranges JSON: path={} error={}",
            e.path(),
            e
        )
    })?;

    log::info!(
        "Parsed IP ranges syncToken={} createDate={} prefixes={}",
        ranges.sync_token,
        ranges.create_date,
        ranges.count()
    );
    Ok(ranges)
}
