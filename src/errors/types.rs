use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScandeckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Normalization error: {0}")]
    Normalization(String),

    #[error("Finding not found: {0}")]
    FindingNotFound(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
