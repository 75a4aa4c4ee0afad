//! Terraform output for merged CIDRs.

/// Render one CIDR as a Terraform `entry` block.
pub fn format_terraform_entry(cidr: &str) -> String {
    format!("  entry {{\n    cidr        = \"{cidr}\"\n  }}")
}

/// Render every CIDR as an `entry` block, joined by newlines.
///
/// # Examples
/// ```
/// use aws_cidr_merge::output::format_terraform_entries;
/// let text = format_terraform_entries(&["10.0.0.0/23"]);
/// assert_eq!(text, "  entry {\n    cidr        = \"10.0.0.0/23\"\n  }");
/// ```
pub fn format_terraform_entries<S: AsRef<str>>(cidrs: &[S]) -> String {
    cidrs
        .iter()
        .map(|cidr| format_terraform_entry(cidr.as_ref()))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_terraform_entries() {
        let cidrs = vec!["52.80.0.0/15".to_string(), "54.222.0.0/19".to_string()];
        let expected = "  entry {\n    cidr        = \"52.80.0.0/15\"\n  }\n  entry {\n    cidr        = \"54.222.0.0/19\"\n  }";
        assert_eq!(format_terraform_entries(&cidrs), expected);
    }

    #[test]
    fn test_format_terraform_entries_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(format_terraform_entries(&empty), "");
    }
}
