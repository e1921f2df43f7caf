//! BitemporalTimelineEngine: shared, lock-guarded handle implementing IBitemporalEngine.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, trace};

use tempora_core::config::{TemporaConfig, TimelineConfig};
use tempora_core::errors::{TemporaError, TemporaResult};
use tempora_core::models::{BiTemporalRecord, Instant, TemporalRange};
use tempora_core::traits::IBitemporalEngine;

use super::timeline::BitemporalTimeline;
use crate::engine::check_effective;
use crate::reconstruct::TimelineReconstructor;

/// Thread-safe bitemporal timeline.
///
/// Clones share the same underlying timeline. One write lock covers both
/// axes, so a mutation and its prior record are computed atomically.
pub struct BitemporalTimelineEngine<V> {
    inner: Arc<RwLock<BitemporalTimeline<V>>>,
    config: TimelineConfig,
}

impl<V> BitemporalTimelineEngine<V> {
    pub fn new() -> Self {
        Self::with_config(TimelineConfig::default())
    }

    pub fn with_config(config: TimelineConfig) -> Self {
        Self::from_timeline(BitemporalTimeline::new(), config)
    }

    pub fn from_timeline(timeline: BitemporalTimeline<V>, config: TimelineConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(timeline)),
            config,
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub(crate) fn normalize(&self, at: Instant) -> TemporaResult<Instant> {
        self.config.precision.truncate(at)
    }

    pub(crate) fn normalize_effective(&self, at: Instant) -> TemporaResult<Instant> {
        check_effective(self.normalize(at)?)
    }

    pub(crate) fn read(&self) -> TemporaResult<RwLockReadGuard<'_, BitemporalTimeline<V>>> {
        self.inner
            .read()
            .map_err(|e| TemporaError::ConcurrencyError(e.to_string()))
    }

    pub(crate) fn write(&self) -> TemporaResult<RwLockWriteGuard<'_, BitemporalTimeline<V>>> {
        self.inner
            .write()
            .map_err(|e| TemporaError::ConcurrencyError(e.to_string()))
    }
}

impl<V: Clone> BitemporalTimelineEngine<V> {
    /// Reconstruct from an unordered record set. Fails without building
    /// anything if system ranges under a shared business range are not
    /// contiguous.
    pub fn from_records<I>(records: I, config: &TemporaConfig) -> TemporaResult<Self>
    where
        I: IntoIterator<Item = BiTemporalRecord<V>>,
    {
        let timeline = TimelineReconstructor::from_config(config).reconstruct(records)?;
        Ok(Self::from_timeline(timeline, config.timeline))
    }

    /// Replace the whole timeline with one reconstructed from `records`.
    /// On failure the current timeline is left untouched.
    pub fn rebuild<I>(&self, records: I, config: &TemporaConfig) -> TemporaResult<()>
    where
        I: IntoIterator<Item = BiTemporalRecord<V>>,
    {
        let scratch = TimelineReconstructor::from_config(config).reconstruct(records)?;
        let buckets = scratch.len();
        *self.write()? = scratch;
        info!(buckets, "bitemporal timeline rebuilt");
        Ok(())
    }

    pub fn snapshot(&self) -> TemporaResult<BitemporalTimeline<V>> {
        Ok(self.read()?.clone())
    }

    /// Every non-tombstone record.
    pub fn records(&self) -> TemporaResult<Vec<BiTemporalRecord<V>>> {
        Ok(self.read()?.records())
    }
}

impl<V> Default for BitemporalTimelineEngine<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for BitemporalTimelineEngine<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            config: self.config,
        }
    }
}

impl<V: Clone + Send + Sync> IBitemporalEngine<V> for BitemporalTimelineEngine<V> {
    fn effective_as_of(
        &self,
        business: Instant,
        system: Instant,
        value: V,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let business = self.normalize_effective(business)?;
        let system = self.normalize_effective(system)?;
        let prior = self.write()?.effective_as_of(business, system, value);
        debug!(business = %business, system = %system, had_prior = prior.is_some(), "effective_as_of");
        Ok(prior)
    }

    fn expire_as_of(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let business = self.normalize(business)?;
        let system = self.normalize(system)?;
        let prior = self.write()?.expire_as_of(business, system);
        debug!(business = %business, system = %system, had_prior = prior.is_some(), "expire_as_of");
        Ok(prior)
    }

    fn get_as_of(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let business = self.normalize(business)?;
        let system = self.normalize(system)?;
        Ok(self.read()?.get_as_of(business, system))
    }

    fn get_prior_to(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let business = self.normalize(business)?;
        let system = self.normalize(system)?;
        Ok(self.read()?.get_prior_to(business, system))
    }

    fn get_prior_to_prior_to(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let business = self.normalize(business)?;
        let system = self.normalize(system)?;
        Ok(self.read()?.get_prior_to_prior_to(business, system))
    }

    fn get_in_range(&self, business: &TemporalRange) -> TemporaResult<Vec<BiTemporalRecord<V>>> {
        let records = self.read()?.get_in_range(business);
        trace!(business = %business, found = records.len(), "get_in_range");
        Ok(records)
    }

    fn get_in_range_with_system(
        &self,
        business: &TemporalRange,
        system: &TemporalRange,
    ) -> TemporaResult<Vec<BiTemporalRecord<V>>> {
        let records = self.read()?.get_in_range_with_system(business, system);
        trace!(business = %business, system = %system, found = records.len(), "get_in_range_with_system");
        Ok(records)
    }

    fn len(&self) -> TemporaResult<usize> {
        Ok(self.read()?.len())
    }
}
