pub mod finding;
pub mod raw;
pub mod statistics;

pub use finding::*;
pub use raw::*;
pub use statistics::*;
