//! Statistics aggregation.

use crate::models::{BySeverity, Finding, Severity, Statistics};

/// Computes summary metrics over a finding collection. Total over an
/// empty input is 0 with every derived value 0; no division happens
/// unless there is something to divide by.
pub fn summarize(findings: &[Finding]) -> Statistics {
    let total = findings.len();
    let mut counts = BySeverity::<usize>::default();
    let mut score_sum = 0.0;
    let mut scored = 0usize;

    for finding in findings {
        *counts.get_mut(finding.severity) += 1;
        if let Some(score) = finding.score {
            score_sum += score;
            scored += 1;
        }
    }

    let mut percentages = BySeverity::<u8>::default();
    if total > 0 {
        for severity in Severity::ALL {
            *percentages.get_mut(severity) = percent_of(*counts.get(severity), total);
        }
    }

    let average_score = if scored > 0 {
        score_sum / scored as f64
    } else {
        0.0
    };

    Statistics {
        total,
        counts,
        percentages,
        average_score,
        unscored: total - scored,
    }
}

/// Whole-number share of `total`, rounded half-up: 1/8 is 13, not 12.
/// Integer arithmetic keeps the rounding rule exact.
fn percent_of(count: usize, total: usize) -> u8 {
    ((count * 200 + total) / (2 * total)) as u8
}
