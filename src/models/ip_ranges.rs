//! AWS IP range document model.
//!
//! Mirrors the published `ip-ranges.json` layout. Only the IPv4 `prefixes`
//! array is kept; `ipv6_prefixes` is ignored on read.

use serde::{Deserialize, Serialize};

/// The AWS IP range document.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct IpRanges {
    /// Publication time as a unix timestamp string.
    #[serde(rename = "syncToken", default)]
    pub sync_token: String,
    /// Publication date, "YYYY-MM-DD-hh-mm-ss".
    #[serde(rename = "createDate", default)]
    pub create_date: String,
    /// IPv4 prefixes, one entry per (prefix, service) pair.
    pub prefixes: Vec<IpPrefix>,
}

/// One IPv4 prefix entry.
///
/// The same `ip_prefix` appears once per AWS service using it, so the list
/// holds exact string repeats.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IpPrefix {
    /// CIDR text, e.g. "52.80.0.0/16".
    pub ip_prefix: String,
    /// Region identifier, e.g. "cn-north-1" or "GLOBAL".
    pub region: String,
    /// Service name, e.g. "AMAZON" or "EC2".
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub network_border_group: String,
}

impl IpRanges {
    /// Number of IPv4 prefix entries, repeats included.
    pub fn count(&self) -> usize {
        self.prefixes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_ipv6() {
        let json = r#"{
            "syncToken": "1700000000",
            "createDate": "2023-11-14-22-13-20",
            "prefixes": [
                {"ip_prefix": "52.80.0.0/16", "region": "cn-north-1",
                 "service": "AMAZON", "network_border_group": "cn-north-1"}
            ],
            "ipv6_prefixes": [
                {"ipv6_prefix": "2400:7fc0::/40", "region": "cn-north-1",
                 "service": "AMAZON", "network_border_group": "cn-north-1"}
            ]
        }"#;
        let ranges: IpRanges = serde_json::from_str(json).unwrap();
        assert_eq!(ranges.sync_token, "1700000000");
        assert_eq!(ranges.count(), 1);
        assert_eq!(ranges.prefixes[0].ip_prefix, "52.80.0.0/16");
        assert_eq!(ranges.prefixes[0].region, "cn-north-1");
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{"prefixes": [{"ip_prefix": "10.0.0.0/8", "region": "GLOBAL"}]}"#;
        let ranges: IpRanges = serde_json::from_str(json).unwrap();
        assert_eq!(ranges.sync_token, "");
        assert_eq!(ranges.prefixes[0].service, "");
    }
}
