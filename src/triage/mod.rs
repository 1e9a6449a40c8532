pub mod classifier;
pub mod grouping;
pub mod lookup;
pub mod normalizer;
pub mod sorting;
pub mod stats;

pub use grouping::group;
pub use lookup::find_by_id;
pub use normalizer::{normalize, NormalizationWarnings, NormalizedBatch, RawBatch};
pub use sorting::sort;
pub use stats::summarize;
