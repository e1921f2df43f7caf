//! Change events: diffing around mutations and publishing decorators.

pub mod diff;
pub mod publisher;
pub mod sink;

pub use publisher::{EventPublishingBitemporalEngine, EventPublishingTimelineEngine};
pub use sink::RecordingSink;
