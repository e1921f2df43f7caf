//! Bulk reconstruction of bitemporal timelines from unordered records.

pub mod contiguity;
pub mod reconstructor;

pub use contiguity::check_system_contiguity;
pub use reconstructor::TimelineReconstructor;
