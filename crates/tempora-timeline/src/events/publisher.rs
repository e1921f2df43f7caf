//! Event-publishing decorators for both engines.
//!
//! Each decorator implements the same engine trait as the engine it wraps.
//! Reads are delegated untouched. A mutation takes the wrapped engine's write
//! lock once, applies the write, re-queries the prior's key and the written
//! key, and classifies the difference; events are delivered to the sink after
//! the lock is released, still on the caller's thread.

use tracing::debug;

use tempora_core::errors::TemporaResult;
use tempora_core::models::{BiTemporalRecord, Instant, TemporalRange, TemporalRecord, TimelineEvent};
use tempora_core::traits::{EventSink, IBitemporalEngine, ITimelineEngine};

use super::diff::{classify_effective, classify_expire};
use crate::bitemporal::BitemporalTimelineEngine;
use crate::engine::TimelineEngine;

fn publish<R, S: EventSink<R>>(sink: &S, events: impl IntoIterator<Item = TimelineEvent<R>>) {
    for event in events {
        debug!(kind = event.kind(), "publishing timeline event");
        sink.on_event(event);
    }
}

// ─── Single axis ─────────────────────────────────────────────────────────

/// Publishes Inserted/Updated/Deleted events for a [`TimelineEngine`].
pub struct EventPublishingTimelineEngine<V, S> {
    engine: TimelineEngine<V>,
    sink: S,
}

impl<V, S> EventPublishingTimelineEngine<V, S> {
    pub fn new(engine: TimelineEngine<V>, sink: S) -> Self {
        Self { engine, sink }
    }

    pub fn engine(&self) -> &TimelineEngine<V> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<V, S> ITimelineEngine<V> for EventPublishingTimelineEngine<V, S>
where
    V: Clone + PartialEq + Send + Sync,
    S: EventSink<TemporalRecord<V>>,
{
    fn effective_as_of(&self, at: Instant, value: V) -> TemporaResult<Option<TemporalRecord<V>>> {
        let at = self.engine.normalize_effective(at)?;
        let (prior, events) = {
            let mut timeline = self.engine.write()?;
            let prior = timeline.effective_as_of(at, value);
            let prior_after = prior
                .as_ref()
                .and_then(|p| timeline.get_as_of(p.range.start()));
            let written = timeline.get_as_of(at);
            let events = classify_effective(prior.as_ref(), prior_after, written);
            (prior, events)
        };
        publish(&self.sink, events);
        Ok(prior)
    }

    fn expire_as_of(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>> {
        let at = self.engine.normalize(at)?;
        let (prior, event) = {
            let mut timeline = self.engine.write()?;
            let prior = timeline.expire_as_of(at);
            let prior_after = prior
                .as_ref()
                .and_then(|p| timeline.get_as_of(p.range.start()));
            let at_start = prior.as_ref().is_some_and(|p| p.range.start() == at);
            let event = classify_expire(prior.clone(), prior_after, at_start);
            (prior, event)
        };
        publish(&self.sink, event);
        Ok(prior)
    }

    fn get_as_of(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>> {
        self.engine.get_as_of(at)
    }

    fn get_prior_to(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>> {
        self.engine.get_prior_to(at)
    }

    fn get_in_range(&self, range: &TemporalRange) -> TemporaResult<Vec<TemporalRecord<V>>> {
        self.engine.get_in_range(range)
    }

    fn len(&self) -> TemporaResult<usize> {
        self.engine.len()
    }
}

// ─── Bitemporal ──────────────────────────────────────────────────────────

/// Publishes Inserted/Updated/Deleted events for a [`BitemporalTimelineEngine`].
pub struct EventPublishingBitemporalEngine<V, S> {
    engine: BitemporalTimelineEngine<V>,
    sink: S,
}

impl<V, S> EventPublishingBitemporalEngine<V, S> {
    pub fn new(engine: BitemporalTimelineEngine<V>, sink: S) -> Self {
        Self { engine, sink }
    }

    pub fn engine(&self) -> &BitemporalTimelineEngine<V> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

fn starts_at<V>(record: &BiTemporalRecord<V>, business: Instant, system: Instant) -> bool {
    record.business_range.start() == business && record.system_range.start() == system
}

impl<V, S> IBitemporalEngine<V> for EventPublishingBitemporalEngine<V, S>
where
    V: Clone + PartialEq + Send + Sync,
    S: EventSink<BiTemporalRecord<V>>,
{
    fn effective_as_of(
        &self,
        business: Instant,
        system: Instant,
        value: V,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let business = self.engine.normalize_effective(business)?;
        let system = self.engine.normalize_effective(system)?;
        let (prior, events) = {
            let mut timeline = self.engine.write()?;
            let prior = timeline.effective_as_of(business, system, value);
            let prior_after = prior.as_ref().and_then(|p| {
                timeline.get_as_of(p.business_range.start(), p.system_range.start())
            });
            let written = timeline.get_as_of(business, system);
            let events = classify_effective(prior.as_ref(), prior_after, written);
            (prior, events)
        };
        publish(&self.sink, events);
        Ok(prior)
    }

    fn expire_as_of(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let business = self.engine.normalize(business)?;
        let system = self.engine.normalize(system)?;
        let (prior, event) = {
            let mut timeline = self.engine.write()?;
            let prior = timeline.expire_as_of(business, system);
            let prior_after = prior.as_ref().and_then(|p| {
                timeline.get_as_of(p.business_range.start(), p.system_range.start())
            });
            let at_start = prior
                .as_ref()
                .is_some_and(|p| starts_at(p, business, system));
            let event = classify_expire(prior.clone(), prior_after, at_start);
            (prior, event)
        };
        publish(&self.sink, event);
        Ok(prior)
    }

    fn get_as_of(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        self.engine.get_as_of(business, system)
    }

    fn get_prior_to(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        self.engine.get_prior_to(business, system)
    }

    fn get_prior_to_prior_to(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        self.engine.get_prior_to_prior_to(business, system)
    }

    fn get_in_range(&self, business: &TemporalRange) -> TemporaResult<Vec<BiTemporalRecord<V>>> {
        self.engine.get_in_range(business)
    }

    fn get_in_range_with_system(
        &self,
        business: &TemporalRange,
        system: &TemporalRange,
    ) -> TemporaResult<Vec<BiTemporalRecord<V>>> {
        self.engine.get_in_range_with_system(business, system)
    }

    fn len(&self) -> TemporaResult<usize> {
        self.engine.len()
    }
}
