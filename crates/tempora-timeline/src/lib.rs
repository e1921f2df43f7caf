//! # tempora-timeline
//!
//! Transition-point timelines for the tempora bitemporal index.
//! A single-axis [`Timeline`] derives validity segments from sparse
//! effective/expire writes; [`BitemporalTimeline`] nests one inside another
//! to index business time and system time together. Shared engines wrap both
//! behind a lock, the `events` module turns their mutations into
//! Inserted/Updated/Deleted notifications, and `reconstruct` rebuilds a
//! bitemporal timeline from an unordered record set.

pub mod bitemporal;
pub mod engine;
pub mod events;
pub mod reconstruct;
pub mod timeline;

pub use bitemporal::{BitemporalTimeline, BitemporalTimelineEngine};
pub use engine::TimelineEngine;
pub use events::{EventPublishingBitemporalEngine, EventPublishingTimelineEngine, RecordingSink};
pub use reconstruct::TimelineReconstructor;
pub use timeline::Timeline;
