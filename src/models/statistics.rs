use serde::{Deserialize, Serialize};

use super::finding::Severity;

/// One value per severity level, with every key always present so
/// consumers see a stable shape regardless of the data.
///
/// Field order matches severity rank order and is the serialization order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BySeverity<T> {
    pub critical: T,
    pub high: T,
    pub medium: T,
    pub low: T,
    pub informational: T,
    pub unknown: T,
}

impl<T> BySeverity<T> {
    pub fn get(&self, severity: Severity) -> &T {
        match severity {
            Severity::Critical => &self.critical,
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
            Severity::Informational => &self.informational,
            Severity::Unknown => &self.unknown,
        }
    }

    pub fn get_mut(&mut self, severity: Severity) -> &mut T {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Informational => &mut self.informational,
            Severity::Unknown => &mut self.unknown,
        }
    }

    /// Iterates entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &T)> {
        Severity::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

/// Aggregate metrics over a finding collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Total number of findings.
    pub total: usize,
    /// Findings per severity; keys always present, default 0.
    pub counts: BySeverity<usize>,
    /// Share of total per severity, rounded half-up to whole percent.
    /// All zero when total is 0.
    pub percentages: BySeverity<u8>,
    /// Mean of explicit scores only; 0.0 when nothing is scored.
    pub average_score: f64,
    /// Findings carrying no explicit score.
    pub unscored: usize,
}
