//! Rebuild a bitemporal timeline from an unordered record set.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use tempora_core::config::{ReconstructionConfig, TemporaConfig, TimelineConfig};
use tempora_core::errors::TemporaResult;
use tempora_core::models::{BiTemporalRecord, Instant, TemporalRange};

use super::contiguity::check_system_contiguity;
use crate::bitemporal::BitemporalTimeline;

/// Builds a [`BitemporalTimeline`] from records in any order.
///
/// Algorithm:
/// 1. Truncate every range to the configured precision.
/// 2. Sort by `(business_range, system_range)`.
/// 3. Validate system-time contiguity per business range.
/// 4. Replay each record into a scratch timeline, grouped by business start
///    and in system order within a group: make it effective at
///    `(business.start, system.start)`, then close it.
/// 5. Return the scratch timeline. Nothing is built if any step fails.
///
/// Closing a record expires it at `(business.end, system.end)` so the next
/// business bucket cuts its business range. The close is skipped when the
/// business range is open-ended or another record already starts at
/// `business.end` (that record's own bucket does the cutting). A bounded
/// system range is additionally closed inside the record's own bucket at
/// `(business.start, system.end)`, which the next record in a contiguous
/// chain then overwrites. A close never replaces a value already written at
/// its key.
///
/// Business buckets cut each other: a record whose business range spans a
/// later record's business start is only visible up to that start.
pub struct TimelineReconstructor {
    timeline: TimelineConfig,
    config: ReconstructionConfig,
}

impl TimelineReconstructor {
    pub fn new(timeline: TimelineConfig, config: ReconstructionConfig) -> Self {
        Self { timeline, config }
    }

    pub fn from_config(config: &TemporaConfig) -> Self {
        Self::new(config.timeline, config.reconstruction)
    }

    pub fn reconstruct<V, I>(&self, records: I) -> TemporaResult<BitemporalTimeline<V>>
    where
        V: Clone,
        I: IntoIterator<Item = BiTemporalRecord<V>>,
    {
        let precision = self.timeline.precision;
        let mut records = records
            .into_iter()
            .map(|r| -> TemporaResult<BiTemporalRecord<V>> {
                Ok(BiTemporalRecord::new(
                    r.business_range.with_precision(precision)?,
                    r.system_range.with_precision(precision)?,
                    r.value,
                ))
            })
            .collect::<TemporaResult<Vec<_>>>()?;
        records.sort_by(|a, b| a.cmp_by_ranges(b));

        if let Err(e) = check_system_contiguity(&records) {
            warn!(records = records.len(), error = %e, "reconstruction rejected");
            return Err(e);
        }

        let business_starts: HashSet<Instant> =
            records.iter().map(|r| r.business_range.start()).collect();
        records.sort_by_key(replay_key);

        let total = records.len();
        let mut scratch = BitemporalTimeline::new();
        for (replayed, record) in records.into_iter().enumerate() {
            let business = record.business_range;
            let system = record.system_range;
            scratch.effective_as_of(business.start(), system.start(), record.value);

            if system.end() != TemporalRange::MAX {
                close(&mut scratch, business.start(), system.end());
            }
            if business.end() != TemporalRange::MAX && !business_starts.contains(&business.end()) {
                close(&mut scratch, business.end(), system.end());
            }

            let interval = self.config.progress_log_interval;
            if interval > 0 && (replayed + 1) % interval == 0 {
                debug!(replayed = replayed + 1, total, "reconstruction progress");
            }
        }

        info!(
            records = total,
            buckets = scratch.len(),
            "bitemporal timeline reconstructed"
        );
        Ok(scratch)
    }
}

/// Replay order: business start, then system range, then business end.
fn replay_key<V>(record: &BiTemporalRecord<V>) -> (Instant, TemporalRange, Instant) {
    (
        record.business_range.start(),
        record.system_range,
        record.business_range.end(),
    )
}

/// Expire at `(business, system)` unless a value already starts there.
fn close<V: Clone>(timeline: &mut BitemporalTimeline<V>, business: Instant, system: Instant) {
    let occupied = timeline
        .bucket(business)
        .and_then(|bucket| bucket.get_segment(system))
        .is_some_and(|segment| segment.is_active());
    if !occupied {
        timeline.expire_as_of(business, system);
    }
}

impl Default for TimelineReconstructor {
    fn default() -> Self {
        Self::from_config(&TemporaConfig::default())
    }
}
