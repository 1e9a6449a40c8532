use std::path::Path;

use tracing::warn;

use super::types::ScandeckConfig;
use crate::errors::ScandeckError;

pub async fn parse_config(path: &Path) -> Result<ScandeckConfig, ScandeckError> {
    if !path.exists() {
        return Err(ScandeckError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ScandeckError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: ScandeckConfig = serde_yaml::from_str(&content)?;

    validate(&config);

    Ok(config)
}

/// Semantic sanity checks. None of these abort startup; the server can
/// always fall back to the built-in samples.
fn validate(config: &ScandeckConfig) {
    if config.sources.is_some() && !config.has_export_paths() {
        warn!("Sources section present but no export paths set; built-in samples will be served");
    }

    if let Some(server) = &config.server {
        if server.port == Some(0) {
            warn!("Server port 0 binds an ephemeral port");
        }
    }

    for (label, path) in [
        ("image", config.image_export_path()),
        ("dynamic", config.dynamic_export_path()),
    ] {
        if let Some(path) = path {
            if !path.exists() {
                warn!(source = label, path = %path.display(), "Configured export file does not exist yet");
            }
        }
    }
}
