//! Identifier lookup.

use crate::models::Finding;

/// Linear scan by exact id. A miss returns `None`; it is a normal
/// outcome, and callers at the HTTP/CLI boundary decide how to report it.
pub fn find_by_id<'a>(findings: &'a [Finding], id: &str) -> Option<&'a Finding> {
    findings.iter().find(|finding| finding.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScanSource, Severity};

    fn make_finding(id: &str, source: ScanSource) -> Finding {
        Finding {
            id: id.to_string(),
            title: format!("{} title", id),
            description: String::new(),
            remediation: None,
            severity: Severity::Medium,
            score: None,
            source,
            affected_targets: vec![],
            references: vec![],
        }
    }

    #[test]
    fn test_find_by_id_hit() {
        let findings = vec![
            make_finding("CVE-1", ScanSource::ImageScan),
            make_finding("40018", ScanSource::DynamicScan),
        ];
        let found = find_by_id(&findings, "40018").unwrap();
        assert_eq!(found.source, ScanSource::DynamicScan);
    }

    #[test]
    fn test_find_by_id_miss_is_none() {
        let findings = vec![make_finding("CVE-1", ScanSource::ImageScan)];
        assert!(find_by_id(&findings, "CVE-9999").is_none());
        assert!(find_by_id(&[], "CVE-1").is_none());
    }

    #[test]
    fn test_find_by_id_is_exact_match() {
        let findings = vec![make_finding("CVE-2024-001", ScanSource::ImageScan)];
        assert!(find_by_id(&findings, "cve-2024-001").is_none());
        assert!(find_by_id(&findings, "CVE-2024-00").is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_match_across_sources() {
        let findings = vec![
            make_finding("shared", ScanSource::ImageScan),
            make_finding("shared", ScanSource::DynamicScan),
        ];
        let found = find_by_id(&findings, "shared").unwrap();
        assert_eq!(found.source, ScanSource::ImageScan);
    }
}
