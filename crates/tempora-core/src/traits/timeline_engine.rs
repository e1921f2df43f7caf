//! ITimelineEngine: the single-axis timeline interface.

use chrono::Utc;

use crate::errors::TemporaResult;
use crate::models::{Instant, TemporalRange, TemporalRecord};

/// A single time axis of transition points.
///
/// Mutators return the record that was effective at the written instant
/// *before* the write, or `None` if nothing was.
pub trait ITimelineEngine<V>: Send + Sync {
    /// Make `value` effective from `at` until the next transition point.
    fn effective_as_of(&self, at: Instant, value: V) -> TemporaResult<Option<TemporalRecord<V>>>;

    /// Write a tombstone at `at`. A no-op on an empty timeline.
    fn expire_as_of(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>>;

    fn get_as_of(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>>;

    fn get_as_of_now(&self) -> TemporaResult<Option<TemporalRecord<V>>> {
        self.get_as_of(Utc::now())
    }

    /// The segment immediately preceding the one that contains `at`.
    fn get_prior_to(&self, at: Instant) -> TemporaResult<Option<TemporalRecord<V>>>;

    fn get_prior_to_now(&self) -> TemporaResult<Option<TemporalRecord<V>>> {
        self.get_prior_to(Utc::now())
    }

    /// Every non-tombstone segment whose transition point lies in `range`.
    /// Returned bounds may extend past the query range.
    fn get_in_range(&self, range: &TemporalRange) -> TemporaResult<Vec<TemporalRecord<V>>>;

    /// Number of transition points, tombstones included.
    fn len(&self) -> TemporaResult<usize>;

    fn is_empty(&self) -> TemporaResult<bool> {
        Ok(self.len()? == 0)
    }
}
