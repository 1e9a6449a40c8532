//! Severity grouping.

use crate::models::{BySeverity, Finding};

/// Partitions findings into per-severity buckets in one pass, preserving
/// input order within each bucket. All six buckets are present in the
/// output even when empty, so consumers always see the same shape.
pub fn group(findings: &[Finding]) -> BySeverity<Vec<Finding>> {
    let mut groups = BySeverity::<Vec<Finding>>::default();
    for finding in findings {
        groups.get_mut(finding.severity).push(finding.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScanSource, Severity};

    fn make_finding(id: &str, severity: Severity) -> Finding {
        Finding {
            id: id.to_string(),
            title: format!("{} title", id),
            description: String::new(),
            remediation: None,
            severity,
            score: None,
            source: ScanSource::ImageScan,
            affected_targets: vec![],
            references: vec![],
        }
    }

    #[test]
    fn test_group_is_a_lossless_partition() {
        let findings = vec![
            make_finding("a", Severity::High),
            make_finding("b", Severity::Critical),
            make_finding("c", Severity::High),
            make_finding("d", Severity::Unknown),
        ];
        let groups = group(&findings);
        let bucketed: usize = groups.iter().map(|(_, bucket)| bucket.len()).sum();
        assert_eq!(bucketed, findings.len());
        assert_eq!(groups.critical.len(), 1);
        assert_eq!(groups.high.len(), 2);
        assert_eq!(groups.unknown.len(), 1);
        assert!(groups.medium.is_empty());
    }

    #[test]
    fn test_group_preserves_input_order_within_bucket() {
        let findings = vec![
            make_finding("first", Severity::Low),
            make_finding("second", Severity::Low),
            make_finding("third", Severity::Low),
        ];
        let groups = group(&findings);
        let ids: Vec<&str> = groups.low.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_group_of_empty_input_keeps_all_keys() {
        let groups = group(&[]);
        for (_, bucket) in groups.iter() {
            assert!(bucket.is_empty());
        }
        let value = serde_json::to_value(&groups).unwrap();
        for key in ["critical", "high", "medium", "low", "informational", "unknown"] {
            assert!(value[key].as_array().unwrap().is_empty());
        }
    }
}
