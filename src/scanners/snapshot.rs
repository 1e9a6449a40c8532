use chrono::{DateTime, Utc};

use crate::errors::ScandeckError;
use crate::models::{DynamicScanExport, ImageScanExport, ScanSource};
use crate::triage::normalizer::{self, NormalizedBatch, RawBatch};

/// One immutable capture of the scanners' latest exports. Each request
/// works against a snapshot taken at a single point in time; nothing
/// downstream ever mutates it.
#[derive(Debug, Clone)]
pub struct ScannerSnapshot {
    pub image: Option<ImageScanExport>,
    pub dynamic: Option<DynamicScanExport>,
    pub loaded_at: DateTime<Utc>,
}

impl ScannerSnapshot {
    pub fn new(image: Option<ImageScanExport>, dynamic: Option<DynamicScanExport>) -> Self {
        Self {
            image,
            dynamic,
            loaded_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.dynamic.is_none()
    }

    /// Sources present in this snapshot, in merge order.
    pub fn sources(&self) -> Vec<ScanSource> {
        let mut sources = Vec::new();
        if self.image.is_some() {
            sources.push(ScanSource::ImageScan);
        }
        if self.dynamic.is_some() {
            sources.push(ScanSource::DynamicScan);
        }
        sources
    }

    /// Raw record count per source, for logging and the sources endpoint.
    pub fn record_count(&self, source: ScanSource) -> usize {
        match source {
            ScanSource::ImageScan => self
                .image
                .as_ref()
                .map_or(0, |export| export.vulnerabilities.len()),
            ScanSource::DynamicScan => {
                self.dynamic.as_ref().map_or(0, |export| export.alerts.len())
            }
        }
    }

    /// Normalizes the snapshot's raw records, optionally restricted to a
    /// single source. Image findings come first, dynamic findings second;
    /// a normalization failure in either source fails the whole call.
    pub fn normalize(&self, filter: Option<ScanSource>) -> Result<NormalizedBatch, ScandeckError> {
        let wanted = |source: ScanSource| filter.is_none() || filter == Some(source);
        let mut batch = NormalizedBatch::default();

        if wanted(ScanSource::ImageScan) {
            if let Some(export) = &self.image {
                batch.absorb(normalizer::normalize(RawBatch::Image(
                    &export.vulnerabilities,
                ))?);
            }
        }
        if wanted(ScanSource::DynamicScan) {
            if let Some(export) = &self.dynamic {
                batch.absorb(normalizer::normalize(RawBatch::Dynamic(&export.alerts))?);
            }
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawDynamicAlert, RawImageVulnerability, RawReferences};

    fn snapshot_with_both() -> ScannerSnapshot {
        let image = ImageScanExport {
            artifact: Some("registry.example/app:1.0".to_string()),
            generated_at: None,
            vulnerabilities: vec![RawImageVulnerability {
                id: Some("CVE-1".to_string()),
                title: Some("flaw".to_string()),
                description: String::new(),
                severity: Some("HIGH".to_string()),
                cvss_score: Some(7.0),
                package_name: None,
                installed_version: None,
                fixed_version: None,
                remediation: None,
                references: vec![],
            }],
        };
        let dynamic = DynamicScanExport {
            scan_id: Some("zap-1".to_string()),
            timestamp: None,
            alerts: vec![RawDynamicAlert {
                id: Some("40018".to_string()),
                name: Some("SQL Injection".to_string()),
                risk: Some("High".to_string()),
                description: String::new(),
                solution: None,
                instances: vec![],
                references: RawReferences::default(),
            }],
        };
        ScannerSnapshot::new(Some(image), Some(dynamic))
    }

    #[test]
    fn test_normalize_merges_image_before_dynamic() {
        let batch = snapshot_with_both().normalize(None).unwrap();
        let ids: Vec<&str> = batch.findings.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["CVE-1", "40018"]);
    }

    #[test]
    fn test_normalize_with_source_filter() {
        let snapshot = snapshot_with_both();
        let image_only = snapshot.normalize(Some(ScanSource::ImageScan)).unwrap();
        assert_eq!(image_only.findings.len(), 1);
        assert_eq!(image_only.findings[0].id, "CVE-1");

        let dynamic_only = snapshot.normalize(Some(ScanSource::DynamicScan)).unwrap();
        assert_eq!(dynamic_only.findings.len(), 1);
        assert_eq!(dynamic_only.findings[0].id, "40018");
    }

    #[test]
    fn test_empty_snapshot_normalizes_to_nothing() {
        let snapshot = ScannerSnapshot::new(None, None);
        assert!(snapshot.is_empty());
        assert!(snapshot.sources().is_empty());
        let batch = snapshot.normalize(None).unwrap();
        assert!(batch.findings.is_empty());
        assert!(batch.warnings.is_empty());
    }

    #[test]
    fn test_sources_and_record_counts() {
        let snapshot = snapshot_with_both();
        assert_eq!(
            snapshot.sources(),
            vec![ScanSource::ImageScan, ScanSource::DynamicScan]
        );
        assert_eq!(snapshot.record_count(ScanSource::ImageScan), 1);
        assert_eq!(snapshot.record_count(ScanSource::DynamicScan), 1);
    }
}
