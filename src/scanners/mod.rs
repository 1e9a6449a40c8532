pub mod exports;
pub mod provider;
pub mod samples;
pub mod snapshot;

pub use exports::ExportFileProvider;
pub use provider::SnapshotProvider;
pub use samples::SampleProvider;
pub use snapshot::ScannerSnapshot;
