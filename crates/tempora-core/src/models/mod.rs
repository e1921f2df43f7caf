//! Model types: ranges, time units, segments, records and events.

pub mod allen;
pub mod segment;
pub mod temporal_range;
pub mod temporal_record;
pub mod time_unit;
pub mod timeline_event;

pub use allen::AllenRelation;
pub use segment::Segment;
pub use temporal_range::{Instant, TemporalRange};
pub use temporal_record::{BiTemporalRecord, TemporalRecord};
pub use time_unit::TimeUnit;
pub use timeline_event::TimelineEvent;
