use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity level for a security finding, ordered from most to least severe.
/// `Unknown` sorts last: an unclassified finding is never allowed to crowd
/// out ranked ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Informational,
    Unknown,
}

impl Severity {
    /// All severities in rank order. Consumers that need a stable shape
    /// (grouping buckets, count maps) iterate this instead of hashing.
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Informational,
        Severity::Unknown,
    ];

    /// Returns a numeric rank where lower values indicate higher severity.
    /// Critical = 0, High = 1, Medium = 2, Low = 3, Informational = 4,
    /// Unknown = 5.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Informational => 4,
            Severity::Unknown => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Informational => "informational",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which scanner produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    /// Container/image vulnerability scanner output.
    ImageScan,
    /// Dynamic web-application scanner output.
    DynamicScan,
}

impl ScanSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanSource::ImageScan => "image_scan",
            ScanSource::DynamicScan => "dynamic_scan",
        }
    }
}

impl fmt::Display for ScanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanSource {
    type Err = String;

    /// Accepts the short filter tokens used on the CLI and in query strings
    /// as well as the serialized snake_case form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" | "image_scan" => Ok(ScanSource::ImageScan),
            "dynamic" | "dynamic_scan" => Ok(ScanSource::DynamicScan),
            other => Err(format!(
                "unknown scan source '{}', expected 'image' or 'dynamic'",
                other
            )),
        }
    }
}

/// A single canonical security finding, scanner-agnostic.
///
/// Serialized in camelCase because the primary consumer is a JavaScript
/// dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Stable identifier, unique within one ingestion batch per source.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Suggested fix, when the scanner provides (or we can synthesize) one.
    pub remediation: Option<String>,
    pub severity: Severity,
    /// Numeric risk score in [0, 10]. `None` when the scanner supplied no
    /// score; distinct from an explicit 0.0.
    pub score: Option<f64>,
    pub source: ScanSource,
    /// URLs, package coordinates, or other locators the issue applies to.
    pub affected_targets: Vec<String>,
    /// One string per citation.
    pub references: Vec<String>,
}

impl Finding {
    /// Score used for ordering and averaging-adjacent comparisons.
    /// Unscored findings compare as 0 without gaining an explicit score.
    pub fn effective_score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}
