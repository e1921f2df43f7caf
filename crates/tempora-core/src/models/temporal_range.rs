//! Half-open time ranges and the interval algebra over them.

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

use super::{AllenRelation, TimeUnit};
use crate::errors::{TemporaError, TemporaResult};

/// A point on either time axis. Nanosecond resolution, totally ordered.
pub type Instant = DateTime<Utc>;

/// A half-open interval `[start, end)` with `start < end`.
///
/// Ordering is lexicographic on `(start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemporalRange {
    start: Instant,
    end: Instant,
}

impl TemporalRange {
    /// Earliest representable instant.
    pub const MIN: Instant = DateTime::<Utc>::MIN_UTC;
    /// Latest representable instant. Open-ended segments end here.
    pub const MAX: Instant = DateTime::<Utc>::MAX_UTC;
    /// `[MIN, MAX)`.
    pub const FOREVER: TemporalRange = TemporalRange {
        start: Self::MIN,
        end: Self::MAX,
    };

    /// `[start, end)`. Fails unless `start < end`.
    pub fn from_to(start: Instant, end: Instant) -> TemporaResult<Self> {
        if start >= end {
            return Err(TemporaError::invalid(format!(
                "range start ({}) must precede end ({})",
                fmt_instant(start),
                fmt_instant(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// `[start, MAX)`.
    pub fn from_to_max(start: Instant) -> TemporaResult<Self> {
        Self::from_to(start, Self::MAX)
    }

    /// `[MIN, end)`.
    pub fn from_min_to(end: Instant) -> TemporaResult<Self> {
        Self::from_to(Self::MIN, end)
    }

    /// `[start, start + duration)`. The duration must be positive.
    pub fn for_duration(start: Instant, duration: TimeDelta) -> TemporaResult<Self> {
        let end = start.checked_add_signed(duration).ok_or_else(|| {
            TemporaError::invalid(format!(
                "{} + {} is out of range",
                fmt_instant(start),
                duration
            ))
        })?;
        Self::from_to(start, end)
    }

    /// `[now, now + duration)`.
    pub fn now_for(duration: TimeDelta) -> TemporaResult<Self> {
        Self::for_duration(Utc::now(), duration)
    }

    /// `[now, end)`.
    pub fn now_until(end: Instant) -> TemporaResult<Self> {
        Self::from_to(Utc::now(), end)
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// True when the range runs to `MAX`.
    pub fn is_open_ended(&self) -> bool {
        self.end == Self::MAX
    }

    /// `start <= instant < end`.
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }

    /// The ranges share at least one instant.
    pub fn intersects(&self, other: &TemporalRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    // ── Allen relations ──────────────────────────────────────────────────

    pub fn before(&self, other: &TemporalRange) -> bool {
        self.end < other.start
    }

    pub fn after(&self, other: &TemporalRange) -> bool {
        self.start > other.end
    }

    pub fn meets(&self, other: &TemporalRange) -> bool {
        self.end == other.start
    }

    pub fn is_met_by(&self, other: &TemporalRange) -> bool {
        self.start == other.end
    }

    /// Self starts first and ends inside other.
    pub fn overlaps_before(&self, other: &TemporalRange) -> bool {
        self.start < other.start && self.end > other.start && self.end < other.end
    }

    /// Other starts first and ends inside self.
    pub fn overlaps_after(&self, other: &TemporalRange) -> bool {
        other.overlaps_before(self)
    }

    /// Partial overlap in either direction. Containment and equality are
    /// not overlaps; use [`intersects`](Self::intersects) for "shares an instant".
    pub fn overlaps(&self, other: &TemporalRange) -> bool {
        self.overlaps_before(other) || self.overlaps_after(other)
    }

    pub fn starts(&self, other: &TemporalRange) -> bool {
        self.start == other.start && self.end < other.end
    }

    pub fn is_started_by(&self, other: &TemporalRange) -> bool {
        other.starts(self)
    }

    pub fn finishes(&self, other: &TemporalRange) -> bool {
        self.end == other.end && self.start > other.start
    }

    pub fn is_finished_by(&self, other: &TemporalRange) -> bool {
        other.finishes(self)
    }

    pub fn is_during(&self, other: &TemporalRange) -> bool {
        self.start > other.start && self.end < other.end
    }

    pub fn includes(&self, other: &TemporalRange) -> bool {
        other.is_during(self)
    }

    pub fn equals(&self, other: &TemporalRange) -> bool {
        self == other
    }

    /// The single Allen relation that holds between self and other.
    pub fn relation(&self, other: &TemporalRange) -> AllenRelation {
        if self.equals(other) {
            AllenRelation::Equals
        } else if self.before(other) {
            AllenRelation::Before
        } else if self.after(other) {
            AllenRelation::After
        } else if self.meets(other) {
            AllenRelation::Meets
        } else if self.is_met_by(other) {
            AllenRelation::MetBy
        } else if self.starts(other) {
            AllenRelation::Starts
        } else if self.is_started_by(other) {
            AllenRelation::StartedBy
        } else if self.finishes(other) {
            AllenRelation::Finishes
        } else if self.is_finished_by(other) {
            AllenRelation::FinishedBy
        } else if self.is_during(other) {
            AllenRelation::During
        } else if self.includes(other) {
            AllenRelation::Includes
        } else if self.overlaps_before(other) {
            AllenRelation::OverlapsBefore
        } else {
            AllenRelation::OverlapsAfter
        }
    }

    /// Every adjacent pair meets (in either direction). Empty and
    /// single-element sequences are contiguous.
    pub fn is_contiguous<'a, I>(ranges: I) -> bool
    where
        I: IntoIterator<Item = &'a TemporalRange>,
    {
        let mut iter = ranges.into_iter();
        let Some(mut previous) = iter.next() else {
            return true;
        };
        for current in iter {
            if !(previous.meets(current) || previous.is_met_by(current)) {
                return false;
            }
            previous = current;
        }
        true
    }

    // ── Shifting and precision ───────────────────────────────────────────

    /// Shift both endpoints later by a non-negative duration.
    pub fn plus(&self, duration: TimeDelta) -> TemporaResult<Self> {
        check_non_negative(duration)?;
        let start = self.start.checked_add_signed(duration);
        let end = self.end.checked_add_signed(duration);
        match (start, end) {
            (Some(start), Some(end)) => Self::from_to(start, end),
            _ => Err(TemporaError::invalid(format!(
                "{} shifted by +{} is out of range",
                self, duration
            ))),
        }
    }

    /// Shift both endpoints earlier by a non-negative duration.
    pub fn minus(&self, duration: TimeDelta) -> TemporaResult<Self> {
        check_non_negative(duration)?;
        let start = self.start.checked_sub_signed(duration);
        let end = self.end.checked_sub_signed(duration);
        match (start, end) {
            (Some(start), Some(end)) => Self::from_to(start, end),
            _ => Err(TemporaError::invalid(format!(
                "{} shifted by -{} is out of range",
                self, duration
            ))),
        }
    }

    /// Truncate both endpoints to `unit`.
    pub fn with_precision(&self, unit: TimeUnit) -> TemporaResult<Self> {
        Self::from_to(unit.truncate(self.start)?, unit.truncate(self.end)?)
    }
}

impl fmt::Display for TemporalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", fmt_instant(self.start), fmt_instant(self.end))
    }
}

fn check_non_negative(duration: TimeDelta) -> TemporaResult<()> {
    if duration < TimeDelta::zero() {
        return Err(TemporaError::invalid(format!(
            "shift duration must be non-negative, got {}",
            duration
        )));
    }
    Ok(())
}

fn fmt_instant(instant: Instant) -> String {
    if instant == TemporalRange::MIN {
        "MIN".to_string()
    } else if instant == TemporalRange::MAX {
        "MAX".to_string()
    } else {
        instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}
