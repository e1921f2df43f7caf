//! IBitemporalEngine: the two-axis (business × system) timeline interface.

use chrono::Utc;

use crate::errors::TemporaResult;
use crate::models::{BiTemporalRecord, Instant, TemporalRange};

/// A business-time axis whose every transition point carries its own
/// system-time axis.
pub trait IBitemporalEngine<V>: Send + Sync {
    fn effective_as_of(
        &self,
        business: Instant,
        system: Instant,
        value: V,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>>;

    /// Write a system-time tombstone; creates the business bucket if needed.
    fn expire_as_of(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>>;

    fn get_as_of(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>>;

    fn get_as_of_now(&self) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let now = Utc::now();
        self.get_as_of(now, now)
    }

    /// Steps back on the business axis only; the system axis is read as-of.
    fn get_prior_to(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>>;

    fn get_prior_to_now(&self) -> TemporaResult<Option<BiTemporalRecord<V>>> {
        let now = Utc::now();
        self.get_prior_to(now, now)
    }

    /// Steps back on both axes.
    fn get_prior_to_prior_to(
        &self,
        business: Instant,
        system: Instant,
    ) -> TemporaResult<Option<BiTemporalRecord<V>>>;

    /// One representative record per business transition point in `business`,
    /// read at that bucket's first system transition point.
    fn get_in_range(&self, business: &TemporalRange)
        -> TemporaResult<Vec<BiTemporalRecord<V>>>;

    /// Every (business, system) transition pair inside both ranges.
    fn get_in_range_with_system(
        &self,
        business: &TemporalRange,
        system: &TemporalRange,
    ) -> TemporaResult<Vec<BiTemporalRecord<V>>>;

    /// Number of business transition points.
    fn len(&self) -> TemporaResult<usize>;

    fn is_empty(&self) -> TemporaResult<bool> {
        Ok(self.len()? == 0)
    }
}
