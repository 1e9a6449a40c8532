use async_trait::async_trait;

use super::snapshot::ScannerSnapshot;
use crate::errors::ScandeckError;

/// A source of raw scanner exports.
///
/// Implementations materialize an immutable [`ScannerSnapshot`] per call
/// and never normalize; timeout and retry policy live behind this seam,
/// not in the pipeline.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Produces a fresh snapshot of the latest scanner output.
    async fn fetch(&self) -> Result<ScannerSnapshot, ScandeckError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
