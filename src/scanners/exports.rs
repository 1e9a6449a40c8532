use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use super::provider::SnapshotProvider;
use super::snapshot::ScannerSnapshot;
use crate::errors::ScandeckError;
use crate::models::{DynamicScanExport, ImageScanExport};

/// Reads scanner export files from configured paths. An unconfigured path
/// contributes nothing to the snapshot; a configured path that cannot be
/// read or parsed fails the fetch.
pub struct ExportFileProvider {
    image_path: Option<PathBuf>,
    dynamic_path: Option<PathBuf>,
}

impl ExportFileProvider {
    pub fn new(image_path: Option<PathBuf>, dynamic_path: Option<PathBuf>) -> Self {
        Self {
            image_path,
            dynamic_path,
        }
    }
}

#[async_trait]
impl SnapshotProvider for ExportFileProvider {
    async fn fetch(&self) -> Result<ScannerSnapshot, ScandeckError> {
        let image = match &self.image_path {
            Some(path) => {
                let export: ImageScanExport = read_export(path, "image").await?;
                info!(
                    path = %path.display(),
                    records = export.vulnerabilities.len(),
                    "Loaded image scanner export"
                );
                Some(export)
            }
            None => None,
        };

        let dynamic = match &self.dynamic_path {
            Some(path) => {
                let export: DynamicScanExport = read_export(path, "dynamic").await?;
                info!(
                    path = %path.display(),
                    records = export.alerts.len(),
                    "Loaded dynamic scanner export"
                );
                Some(export)
            }
            None => None,
        };

        Ok(ScannerSnapshot::new(image, dynamic))
    }

    fn provider_name(&self) -> &str {
        "export-files"
    }
}

async fn read_export<T: serde::de::DeserializeOwned>(
    path: &Path,
    label: &str,
) -> Result<T, ScandeckError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        ScandeckError::Snapshot(format!(
            "Cannot read {} export {}: {}",
            label,
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        ScandeckError::Snapshot(format!(
            "Invalid {} export {}: {}",
            label,
            path.display(),
            e
        ))
    })
}
