//! Truncation units for instants and ranges.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{TemporaError, TemporaResult};

/// Precision an instant can be truncated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Length of one unit.
    pub fn as_duration(self) -> TimeDelta {
        match self {
            TimeUnit::Nanoseconds => TimeDelta::nanoseconds(1),
            TimeUnit::Microseconds => TimeDelta::microseconds(1),
            TimeUnit::Milliseconds => TimeDelta::milliseconds(1),
            TimeUnit::Seconds => TimeDelta::seconds(1),
            TimeUnit::Minutes => TimeDelta::minutes(1),
            TimeUnit::Hours => TimeDelta::hours(1),
            TimeUnit::Days => TimeDelta::days(1),
        }
    }

    /// Truncate `instant` down to this unit (relative to the Unix epoch).
    ///
    /// The `MIN` and `MAX` sentinels are returned unchanged. Instants that
    /// chrono cannot express as a nanosecond timestamp fail with
    /// `InvalidArgument`.
    pub fn truncate(self, instant: DateTime<Utc>) -> TemporaResult<DateTime<Utc>> {
        if self == TimeUnit::Nanoseconds
            || instant == DateTime::<Utc>::MIN_UTC
            || instant == DateTime::<Utc>::MAX_UTC
        {
            return Ok(instant);
        }
        instant.duration_trunc(self.as_duration()).map_err(|e| {
            TemporaError::invalid(format!(
                "cannot truncate {} to {:?}: {}",
                instant.to_rfc3339(),
                self,
                e
            ))
        })
    }
}
