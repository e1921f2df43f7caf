//! Two-axis (business × system) timelines.

pub mod engine;
pub mod timeline;

pub use engine::BitemporalTimelineEngine;
pub use timeline::BitemporalTimeline;
