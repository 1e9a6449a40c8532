pub mod commands;
pub mod render;
pub mod report;
pub mod serve;

pub use commands::{Cli, Commands};

use std::sync::Arc;

use crate::config::{self, ScandeckConfig};
use crate::errors::ScandeckError;
use crate::scanners::{ExportFileProvider, SampleProvider, SnapshotProvider};

/// Loads the config file when one was given, otherwise uses defaults.
pub async fn load_config(path: Option<&str>) -> Result<ScandeckConfig, ScandeckError> {
    match path {
        Some(p) => config::parse_config(std::path::Path::new(p)).await,
        None => Ok(ScandeckConfig::default()),
    }
}

/// Export files when the config names any, built-in samples otherwise.
pub fn select_provider(config: &ScandeckConfig) -> Arc<dyn SnapshotProvider> {
    if config.has_export_paths() {
        Arc::new(ExportFileProvider::new(
            config.image_export_path(),
            config.dynamic_export_path(),
        ))
    } else {
        Arc::new(SampleProvider)
    }
}
