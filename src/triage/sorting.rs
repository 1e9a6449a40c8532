//! Deterministic risk ordering.

use std::cmp::Ordering;

use crate::models::Finding;

/// Returns a new sequence ordered by severity rank ascending (Critical
/// first), then numeric score descending within a severity. A finding
/// without a score compares as 0. Ties keep their original input order;
/// the underlying sort is stable, so the result is fully deterministic.
pub fn sort(findings: &[Finding]) -> Vec<Finding> {
    let mut sorted = findings.to_vec();
    sorted.sort_by(compare_risk);
    sorted
}

fn compare_risk(a: &Finding, b: &Finding) -> Ordering {
    a.severity
        .rank()
        .cmp(&b.severity.rank())
        .then_with(|| b.effective_score().total_cmp(&a.effective_score()))
}
