//! Finding normalization.
//!
//! Converts scanner-specific raw records into the canonical [`Finding`]
//! shape. A missing or empty required field (`id`, `title`, native
//! severity) fails the whole batch for that source, because a partially
//! normalized record is unsafe to expose downstream. Everything else
//! degrades: unrecognized severity tokens, out-of-range scores, and
//! URL-less alert instances are counted as warnings, never errors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ScandeckError;
use crate::models::{
    Finding, RawAlertInstance, RawDynamicAlert, RawImageVulnerability, RawReferences, ScanSource,
    Severity,
};
use crate::triage::classifier;

/// Non-fatal anomaly counters accumulated while normalizing a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationWarnings {
    /// Severity tokens outside the known vocabulary, degraded to `Unknown`.
    pub unknown_severities: usize,
    /// Scores outside [0, 10], clamped into range.
    pub clamped_scores: usize,
    /// Dynamic-scan instances without a URL, dropped from affected targets.
    pub skipped_instances: usize,
}

impl NormalizationWarnings {
    pub fn total(&self) -> usize {
        self.unknown_severities + self.clamped_scores + self.skipped_instances
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn absorb(&mut self, other: NormalizationWarnings) {
        self.unknown_severities += other.unknown_severities;
        self.clamped_scores += other.clamped_scores;
        self.skipped_instances += other.skipped_instances;
    }
}

/// The output of normalizing one or more record batches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBatch {
    pub findings: Vec<Finding>,
    pub warnings: NormalizationWarnings,
}

impl NormalizedBatch {
    /// Appends another batch, preserving this batch's findings first.
    pub fn absorb(&mut self, other: NormalizedBatch) {
        self.findings.extend(other.findings);
        self.warnings.absorb(other.warnings);
    }
}

/// Scanner-specific record batches accepted by [`normalize`]. The variant
/// carries the source tag, so call sites never branch on record shape.
#[derive(Debug, Clone, Copy)]
pub enum RawBatch<'a> {
    Image(&'a [RawImageVulnerability]),
    Dynamic(&'a [RawDynamicAlert]),
}

/// Normalizes one source's records into canonical findings.
pub fn normalize(batch: RawBatch<'_>) -> Result<NormalizedBatch, ScandeckError> {
    match batch {
        RawBatch::Image(records) => normalize_image_records(records),
        RawBatch::Dynamic(alerts) => normalize_dynamic_alerts(alerts),
    }
}

/// Normalizes image-scanner vulnerability records.
pub fn normalize_image_records(
    records: &[RawImageVulnerability],
) -> Result<NormalizedBatch, ScandeckError> {
    let source = ScanSource::ImageScan;
    let mut batch = NormalizedBatch::default();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        let id = required_field(record.id.as_deref(), source, index, "id")?;
        let title = required_field(record.title.as_deref(), source, index, "title")?;
        let token = required_field(record.severity.as_deref(), source, index, "severity")?;
        reject_duplicate(&mut seen_ids, &id, source, index)?;

        let severity = classify_token(&token, &mut batch.warnings);
        let score = clamp_score(record.cvss_score, &mut batch.warnings);

        batch.findings.push(Finding {
            id,
            title,
            description: record.description.trim().to_string(),
            remediation: image_remediation(record),
            severity,
            score,
            source,
            affected_targets: image_targets(record),
            references: clean_references(&record.references),
        });
    }

    Ok(batch)
}

/// Normalizes dynamic-scanner alerts.
pub fn normalize_dynamic_alerts(
    alerts: &[RawDynamicAlert],
) -> Result<NormalizedBatch, ScandeckError> {
    let source = ScanSource::DynamicScan;
    let mut batch = NormalizedBatch::default();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (index, alert) in alerts.iter().enumerate() {
        let id = required_field(alert.id.as_deref(), source, index, "id")?;
        let title = required_field(alert.name.as_deref(), source, index, "name")?;
        let token = required_field(alert.risk.as_deref(), source, index, "risk")?;
        reject_duplicate(&mut seen_ids, &id, source, index)?;

        let severity = classify_token(&token, &mut batch.warnings);

        batch.findings.push(Finding {
            id,
            title,
            description: alert.description.trim().to_string(),
            remediation: alert
                .solution
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            severity,
            // The dynamic scanner rates risk categorically, not numerically.
            score: None,
            source,
            affected_targets: instance_urls(&alert.instances, &mut batch.warnings),
            references: alert_references(&alert.references),
        });
    }

    Ok(batch)
}

fn required_field(
    value: Option<&str>,
    source: ScanSource,
    index: usize,
    field: &str,
) -> Result<String, ScandeckError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => Ok(v.to_string()),
        None => Err(ScandeckError::Normalization(format!(
            "{} record {}: missing or empty required field '{}'",
            source, index, field
        ))),
    }
}

fn reject_duplicate(
    seen: &mut HashSet<String>,
    id: &str,
    source: ScanSource,
    index: usize,
) -> Result<(), ScandeckError> {
    if seen.insert(id.to_string()) {
        Ok(())
    } else {
        Err(ScandeckError::Normalization(format!(
            "{} record {}: duplicate id '{}' in batch",
            source, index, id
        )))
    }
}

fn classify_token(token: &str, warnings: &mut NormalizationWarnings) -> Severity {
    match classifier::lookup(token) {
        Some(severity) => severity,
        None => {
            warnings.unknown_severities += 1;
            Severity::Unknown
        }
    }
}

fn clamp_score(raw: Option<f64>, warnings: &mut NormalizationWarnings) -> Option<f64> {
    raw.map(|value| {
        if (0.0..=10.0).contains(&value) {
            value
        } else {
            warnings.clamped_scores += 1;
            value.clamp(0.0, 10.0)
        }
    })
}

/// Prefers the scanner's own fix text; otherwise synthesizes one from the
/// fixed version when the record names one.
fn image_remediation(record: &RawImageVulnerability) -> Option<String> {
    if let Some(text) = record
        .remediation
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return Some(text.to_string());
    }
    match (record.package_name.as_deref(), record.fixed_version.as_deref()) {
        (Some(pkg), Some(fixed)) => Some(format!("Upgrade {} to {}", pkg, fixed)),
        (None, Some(fixed)) => Some(format!("Upgrade to {}", fixed)),
        _ => None,
    }
}

/// Package coordinate the vulnerability applies to, e.g. "openssl@1.1.1k".
fn image_targets(record: &RawImageVulnerability) -> Vec<String> {
    match (record.package_name.as_deref(), record.installed_version.as_deref()) {
        (Some(pkg), Some(version)) => vec![format!("{}@{}", pkg, version)],
        (Some(pkg), None) => vec![pkg.to_string()],
        _ => Vec::new(),
    }
}

fn instance_urls(
    instances: &[RawAlertInstance],
    warnings: &mut NormalizationWarnings,
) -> Vec<String> {
    let mut urls = Vec::new();
    for instance in instances {
        match instance.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => urls.push(url.to_string()),
            None => warnings.skipped_instances += 1,
        }
    }
    urls
}

fn alert_references(references: &RawReferences) -> Vec<String> {
    match references {
        RawReferences::List(items) => clean_references(items),
        RawReferences::Block(block) => split_reference_block(block),
    }
}

fn clean_references(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a joined citation block into one string per citation. The
/// dynamic scanner separates citations with newlines or `<p>` markup.
fn split_reference_block(block: &str) -> Vec<String> {
    let separator = regex::Regex::new(r"(?i)</?p>|\r?\n").unwrap();
    separator
        .split(block)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
