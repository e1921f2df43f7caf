//! Property tests for timelines and reconstruction.

use proptest::prelude::*;

use tempora_core::config::TimelineConfig;
use tempora_core::models::{TemporalRange, TemporalRecord};
use tempora_core::traits::ITimelineEngine;
use tempora_timeline::{Timeline, TimelineEngine, TimelineReconstructor};
use test_fixtures::{bi_record, contiguous_records, open_range, range, t};

proptest! {
    #[test]
    fn prop_contiguous_round_trip(n in 1usize..64, width in 1i64..3600) {
        let records = contiguous_records(n, width);
        let engine = TimelineEngine::new();
        for record in &records {
            engine.effective_as_of(record.range.start(), record.value).unwrap();
        }
        let back = engine.get_in_range(&TemporalRange::FOREVER).unwrap();
        prop_assert_eq!(back, records);
    }
}

proptest! {
    #[test]
    fn prop_from_records_round_trip(n in 1usize..64, width in 1i64..3600) {
        let records = contiguous_records(n, width);
        let mut reversed = records.clone();
        reversed.reverse();
        let engine = TimelineEngine::from_records(reversed, TimelineConfig::default()).unwrap();
        prop_assert_eq!(engine.get_in_range(&TemporalRange::FOREVER).unwrap(), records);
    }
}

proptest! {
    #[test]
    fn prop_effective_as_of_is_idempotent(
        writes in prop::collection::vec((0i64..1000, 0u8..8), 1..40),
        pick in 0usize..40,
    ) {
        let mut timeline: Timeline<u8> = writes.iter().map(|(s, v)| (t(*s), *v)).collect();
        let (secs, value) = writes[pick % writes.len()];
        timeline.effective_as_of(t(secs), value);
        let len = timeline.len();
        let before = timeline.get_as_of(t(secs));

        timeline.effective_as_of(t(secs), value);

        prop_assert_eq!(timeline.len(), len);
        prop_assert_eq!(timeline.get_as_of(t(secs)), before);
    }
}

proptest! {
    #[test]
    fn prop_records_partition_the_active_timeline(
        writes in prop::collection::vec((0i64..1000, prop::option::of(0u8..8)), 1..40),
    ) {
        let mut timeline: Timeline<u8> = Timeline::new();
        for (secs, value) in &writes {
            match value {
                Some(v) => { timeline.effective_as_of(t(*secs), *v); }
                None => { timeline.expire_as_of(t(*secs)); }
            }
        }
        let records: Vec<TemporalRecord<u8>> = timeline.records();
        for pair in records.windows(2) {
            prop_assert!(pair[0].range.end() <= pair[1].range.start());
        }
        for record in &records {
            prop_assert_eq!(timeline.get_as_of(record.range.start()), Some(record.clone()));
        }
    }
}

proptest! {
    #[test]
    fn prop_reconstruct_system_chain(cuts in prop::collection::btree_set(1i64..1000, 0..20)) {
        let business = range(0, 10);
        let mut starts = vec![0i64];
        starts.extend(cuts);
        let mut records = Vec::new();
        for (i, start) in starts.iter().enumerate() {
            let system = match starts.get(i + 1) {
                Some(end) => range(*start, *end),
                None => open_range(*start),
            };
            records.push(bi_record(business, system, i));
        }
        let mut shuffled = records.clone();
        shuffled.reverse();

        let timeline = TimelineReconstructor::default().reconstruct(shuffled).unwrap();

        prop_assert_eq!(timeline.records(), records);
    }
}
