//! Shared test fixtures: a fixed epoch, second-offset instants, range and
//! record builders, and a one-shot tracing subscriber.

use std::sync::Once;

use chrono::{TimeDelta, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use tempora_core::models::{BiTemporalRecord, Instant, TemporalRange, TemporalRecord};

/// 2024-01-01T00:00:00Z. Every fixture instant is an offset from here.
pub fn epoch() -> Instant {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// `epoch() + secs` seconds.
pub fn t(secs: i64) -> Instant {
    epoch() + TimeDelta::seconds(secs)
}

/// `[t(start), t(end))`.
pub fn range(start: i64, end: i64) -> TemporalRange {
    TemporalRange::from_to(t(start), t(end)).expect("fixture range must be non-empty")
}

/// `[t(start), MAX)`.
pub fn open_range(start: i64) -> TemporalRange {
    TemporalRange::from_to_max(t(start)).expect("fixture range must be non-empty")
}

pub fn record<V>(range: TemporalRange, value: V) -> TemporalRecord<V> {
    TemporalRecord::new(range, value)
}

pub fn bi_record<V>(business: TemporalRange, system: TemporalRange, value: V) -> BiTemporalRecord<V> {
    BiTemporalRecord::new(business, system, value)
}

/// `n` back-to-back records of `width` seconds starting at `t(0)`, valued
/// `0..n`. The last one is open-ended.
pub fn contiguous_records(n: usize, width: i64) -> Vec<TemporalRecord<usize>> {
    (0..n)
        .map(|i| {
            let start = i as i64 * width;
            let range = if i + 1 == n {
                open_range(start)
            } else {
                range(start, start + width)
            };
            TemporalRecord::new(range, i)
        })
        .collect()
}

static TRACING: Once = Once::new();

/// Install a fmt subscriber honouring `RUST_LOG` (default `warn`). Safe to
/// call from every test.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
