//! # tempora-core
//!
//! Foundation types for the tempora bitemporal index: the half-open
//! [`TemporalRange`] with its Allen relations, materialized timeline records,
//! change events, errors, configuration and the engine traits implemented by
//! `tempora-timeline`.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::TemporaConfig;
pub use errors::{TemporaError, TemporaResult, TemporalError};
pub use models::{
    AllenRelation, BiTemporalRecord, Instant, Segment, TemporalRange, TemporalRecord, TimeUnit,
    TimelineEvent,
};
pub use traits::{EventSink, IBitemporalEngine, ITimelineEngine};
