//! System-time contiguity validation.

use tempora_core::errors::{TemporaResult, TemporalError};
use tempora_core::models::BiTemporalRecord;

/// Check that records sharing a business range have system ranges that
/// form an unbroken `meets` chain.
///
/// `records` must already be sorted by `(business_range, system_range)`.
/// Gaps, overlaps and duplicates all fail with
/// `NonContiguousSystemEffectiveRange` naming the first offending pair.
pub fn check_system_contiguity<V>(records: &[BiTemporalRecord<V>]) -> TemporaResult<()> {
    for pair in records.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if previous.business_range != next.business_range {
            continue;
        }
        if !previous.system_range.meets(&next.system_range) {
            return Err(TemporalError::NonContiguousSystemEffectiveRange {
                business_range: previous.business_range,
                previous: previous.system_range,
                next: next.system_range,
            }
            .into());
        }
    }
    Ok(())
}
