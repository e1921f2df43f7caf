mod bitemporal_engine;
mod event_sink;
mod timeline_engine;

pub use bitemporal_engine::IBitemporalEngine;
pub use event_sink::EventSink;
pub use timeline_engine::ITimelineEngine;
