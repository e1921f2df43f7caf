//! Materialized timeline segments.

use std::cmp::Ordering;

use super::TemporalRange;

/// A segment of a single-axis timeline: `value` is effective over `range`.
///
/// Ordered by range first, then by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemporalRecord<V> {
    pub range: TemporalRange,
    pub value: V,
}

impl<V> TemporalRecord<V> {
    pub fn new(range: TemporalRange, value: V) -> Self {
        Self { range, value }
    }

    /// Range-only ordering, for values that are not `Ord`.
    pub fn cmp_by_range(&self, other: &Self) -> Ordering {
        self.range.cmp(&other.range)
    }
}

/// A segment of a bitemporal timeline.
///
/// `business_range` is when the value held in the modeled domain,
/// `system_range` is when the system knew it.
///
/// Ordered by `(business_range, system_range)`, then by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BiTemporalRecord<V> {
    pub business_range: TemporalRange,
    pub system_range: TemporalRange,
    pub value: V,
}

impl<V> BiTemporalRecord<V> {
    pub fn new(business_range: TemporalRange, system_range: TemporalRange, value: V) -> Self {
        Self {
            business_range,
            system_range,
            value,
        }
    }

    /// Sort key: `(business_range, system_range)`.
    pub fn key(&self) -> (TemporalRange, TemporalRange) {
        (self.business_range, self.system_range)
    }

    /// Range-only ordering, for values that are not `Ord`.
    pub fn cmp_by_ranges(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn r(start: i64, end: i64) -> TemporalRange {
        TemporalRange::from_to(
            Utc.timestamp_opt(start, 0).unwrap(),
            Utc.timestamp_opt(end, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn records_sort_by_range_then_value() {
        let mut records = vec![
            TemporalRecord::new(r(5, 9), 'a'),
            TemporalRecord::new(r(0, 5), 'z'),
            TemporalRecord::new(r(0, 5), 'b'),
        ];
        records.sort();
        assert_eq!(
            records,
            vec![
                TemporalRecord::new(r(0, 5), 'b'),
                TemporalRecord::new(r(0, 5), 'z'),
                TemporalRecord::new(r(5, 9), 'a'),
            ]
        );
    }

    #[test]
    fn bitemporal_records_sort_by_business_then_system() {
        let mut records = vec![
            BiTemporalRecord::new(r(0, 10), r(5, 9), 1),
            BiTemporalRecord::new(r(0, 20), r(0, 5), 0),
            BiTemporalRecord::new(r(0, 10), r(0, 5), 2),
        ];
        records.sort();
        let keys: Vec<_> = records.iter().map(BiTemporalRecord::key).collect();
        assert_eq!(keys, vec![(r(0, 10), r(0, 5)), (r(0, 10), r(5, 9)), (r(0, 20), r(0, 5))]);
        assert!(records.windows(2).all(|w| w[0].cmp_by_ranges(&w[1]).is_le()));
    }
}
