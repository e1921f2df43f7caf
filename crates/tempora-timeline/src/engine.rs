//! TimelineEngine: shared, lock-guarded handle implementing ITimelineEngine.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use tempora_core::config::TimelineConfig;
use tempora_core::errors::{TemporaError, TemporaResult};
use tempora_core::models::{Instant, TemporalRange, TemporalRecord};
use tempora_core::traits::ITimelineEngine;

use crate::timeline::Timeline;

/// Thread-safe single-axis timeline.
///
/// Clones share the same underlying timeline. Readers run concurrently; a
/// write holds the lock across computing the prior record and applying the
/// write, so the returned prior always matches what was overwritten.
#[derive(Debug)]
pub struct TimelineEngine<V> {
    inner: Arc<RwLock<Timeline<V>>>,
    config: TimelineConfig,
}

impl<V> TimelineEngine<V> {
    /// Create an empty engine with default config.
    pub fn new() -> Self {
        Self::with_config(TimelineConfig::default())
    }

    pub fn with_config(config: TimelineConfig) -> Self {
        Self::from_timeline(Timeline::new(), config)
    }

    /// Wrap an existing timeline.
    pub fn from_timeline(timeline: Timeline<V>, config: TimelineConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(timeline)),
            config,
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Truncate an instant to the configured precision.
    pub(crate) fn normalize(&self, at: Instant) -> TemporaResult<Instant> {
        self.config.precision.truncate(at)
    }

    /// Like `normalize`, for an instant a value becomes effective at.
    pub(crate) fn normalize_effective(&self, at: Instant) -> TemporaResult<Instant> {
        check_effective(self.normalize(at)?)
    }

    /// Read lock helper.
    pub(crate) fn read(&self) -> TemporaResult<RwLockReadGuard<'_, Timeline<V>>> {
        self.inner
            .read()
            .map_err(|e| TemporaError::ConcurrencyError(e.to_string()))
    }

    /// Write lock helper.
    pub(crate) fn write(&self) -> TemporaResult<RwLockWriteGuard<'_, Timeline<V>>> {
        self.inner
            .write()
            .map_err(|e| TemporaError::ConcurrencyError(e.to_string()))
    }
}

impl<V: Clone> TimelineEngine<V> {
    /// Build from materialized records.
    ///
    /// Records are sorted by range and replayed: each one becomes effective
    /// at its start and, unless open-ended, is expired at its end. Gaps are
    /// allowed; overlapping records fail with `InvalidArgument` and nothing
    /// is built.
    pub fn from_records<I>(records: I, config: TimelineConfig) -> TemporaResult<Self>
    where
        I: IntoIterator<Item = TemporalRecord<V>>,
    {
        let mut records = records
            .into_iter()
            .map(|r| -> TemporaResult<TemporalRecord<V>> {
                Ok(TemporalRecord::new(r.range.with_precision(config.precision)?, r.value))
            })
            .collect::<TemporaResult<Vec<_>>>()?;
        records.sort_by(|a, b| a.cmp_by_range(b));

        for pair in records.windows(2) {
            if pair[0].range.end() > pair[1].range.start() {
                return Err(TemporaError::invalid(format!(
                    "records overlap: {} and {}",
                    pair[0].range, pair[1].range
                )));
            }
        }

        let mut timeline = Timeline::new();
        for record in records {
            let range = record.range;
            timeline.effective_as_of(range.start(), record.value);
            if !range.is_open_ended() {
                timeline.expire_as_of(range.end());
            }
        }
        debug!(transitions = timeline.len(), "timeline built from records");
        Ok(Self::from_timeline(timeline, config))
    }

    /// Clone the current timeline out of the engine.
    pub fn snapshot(&self) -> TemporaResult<Timeline<V>> {
        Ok(self.read()?.clone())
    }
}

/// A segment starting at `MAX` would be empty and could never be read back.
pub(crate) fn check_effective(at: Instant) -> TemporaResult<Instant> {
    if at == TemporalRange::MAX {
        return Err(TemporaError::invalid(
            "a value cannot become effective at MAX",
        ));
    }
    Ok(at)
}

impl<V> Default for TimelineEngine<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for TimelineEngine<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            config: self.config,
        }
    }
}

impl<V: Clone + Send + Sync> ITimelineEngine<V> for TimelineEngine<V> {
    fn effective_as_of(&self, at: Instant, value: V) -> TemporaResult<Option<TemporalRecord<V>>> {
        let at = self.normalize_effective(at)?;
        let prior = self.write()?.effective_as_of(at, value);
        debug!(at = %at, had_prior = prior.is_some(), "effective_as_of");
        Ok(prior)
    }

    fn expire_as_of(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>> {
        let at = self.normalize(at)?;
        let prior = self.write()?.expire_as_of(at);
        debug!(at = %at, had_prior = prior.is_some(), "expire_as_of");
        Ok(prior)
    }

    fn get_as_of(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>> {
        let at = self.normalize(at)?;
        Ok(self.read()?.get_as_of(at))
    }

    fn get_prior_to(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>> {
        let at = self.normalize(at)?;
        Ok(self.read()?.get_prior_to(at))
    }

    fn get_in_range(&self, range: &TemporalRange) -> TemporaResult<Vec<TemporalRecord<V>>> {
        let records = self.read()?.get_in_range(range);
        trace!(range = %range, found = records.len(), "get_in_range");
        Ok(records)
    }

    fn len(&self) -> TemporaResult<usize> {
        Ok(self.read()?.len())
    }
}
