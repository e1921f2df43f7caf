//! Bulk reconstruction: ordering, contiguity validation, all-or-nothing rebuild.

use chrono::TimeDelta;

use tempora_core::config::{TemporaConfig, TimelineConfig};
use tempora_core::errors::{TemporaError, TemporalError};
use tempora_core::models::{BiTemporalRecord, TemporalRange, TimeUnit};
use tempora_core::traits::IBitemporalEngine;
use tempora_timeline::reconstruct::check_system_contiguity;
use tempora_timeline::{BitemporalTimelineEngine, TimelineReconstructor};
use test_fixtures::{bi_record, init_tracing, open_range, range, t};

/// Two business ranges; the first was corrected once in system time.
fn history() -> Vec<BiTemporalRecord<&'static str>> {
    vec![
        bi_record(range(0, 10), range(0, 5), "draft"),
        bi_record(range(0, 10), open_range(5), "final"),
        bi_record(open_range(10), open_range(0), "next"),
    ]
}

#[test]
fn system_gap_is_rejected() {
    init_tracing();
    let records = vec![
        bi_record(range(0, 10), range(0, 5), "a"),
        bi_record(range(0, 10), open_range(6), "b"),
    ];

    let err = TimelineReconstructor::default()
        .reconstruct(records)
        .unwrap_err();

    assert!(err.is_non_contiguous());
    match err {
        TemporaError::TemporalError(TemporalError::NonContiguousSystemEffectiveRange {
            business_range,
            previous,
            next,
        }) => {
            assert_eq!(business_range, range(0, 10));
            assert_eq!(previous, range(0, 5));
            assert_eq!(next, open_range(6));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn system_overlap_is_rejected() {
    init_tracing();
    let records = vec![
        bi_record(range(0, 10), range(0, 5), "a"),
        bi_record(range(0, 10), open_range(4), "b"),
    ];
    let err = TimelineReconstructor::default()
        .reconstruct(records)
        .unwrap_err();
    assert!(err.is_non_contiguous());
}

#[test]
fn different_business_ranges_are_checked_independently() {
    let mut records = vec![
        bi_record(range(0, 10), open_range(0), "a"),
        bi_record(range(0, 20), open_range(7), "b"),
    ];
    records.sort_by(|a, b| a.cmp_by_ranges(b));
    assert!(check_system_contiguity(&records).is_ok());
}

#[test]
fn reconstruction_answers_as_of_queries() {
    init_tracing();
    let timeline = TimelineReconstructor::default()
        .reconstruct(history())
        .unwrap();

    assert_eq!(
        timeline.get_as_of(t(3), t(2)),
        Some(bi_record(range(0, 10), range(0, 5), "draft"))
    );
    assert_eq!(
        timeline.get_as_of(t(3), t(7)),
        Some(bi_record(range(0, 10), open_range(5), "final"))
    );
    assert_eq!(
        timeline.get_as_of(t(12), t(2)),
        Some(bi_record(open_range(10), open_range(0), "next"))
    );
    assert_eq!(timeline.get_as_of(t(-1), t(2)), None);
}

#[test]
fn records_round_trip_in_any_order() {
    init_tracing();
    let mut shuffled = history();
    shuffled.reverse();
    shuffled.swap(0, 1);

    let timeline = TimelineReconstructor::default()
        .reconstruct(shuffled)
        .unwrap();

    assert_eq!(timeline.records(), history());
}

#[test]
fn business_correction_survives_the_close_of_the_older_record() {
    init_tracing();
    // v1 was believed for all of business time until sys 5; from sys 5 the
    // business range was narrowed to [0, 10) and v3 took over from 10.
    let records = vec![
        bi_record(open_range(0), range(0, 5), "v1"),
        bi_record(range(0, 10), open_range(5), "v2"),
        bi_record(open_range(10), open_range(5), "v3"),
    ];

    let timeline = TimelineReconstructor::default()
        .reconstruct(records)
        .unwrap();

    assert_eq!(
        timeline.get_as_of(t(3), t(7)),
        Some(bi_record(range(0, 10), open_range(5), "v2"))
    );
    assert_eq!(
        timeline.get_as_of(t(3), t(2)),
        Some(bi_record(range(0, 10), range(0, 5), "v1"))
    );
    assert_eq!(
        timeline.get_as_of(t(12), t(7)),
        Some(bi_record(open_range(10), open_range(5), "v3"))
    );
    let values: Vec<_> = timeline.records().into_iter().map(|r| r.value).collect();
    assert_eq!(values, vec!["v1", "v2", "v3"]);
}

#[test]
fn bounded_business_range_is_closed() {
    init_tracing();
    let timeline = TimelineReconstructor::default()
        .reconstruct(vec![bi_record(range(0, 10), open_range(0), "a")])
        .unwrap();

    assert_eq!(timeline.get_as_of(t(10), t(5)), None);
    assert_eq!(timeline.get_as_of(t(50), t(5)), None);
    assert_eq!(
        timeline.records(),
        vec![bi_record(range(0, 10), open_range(0), "a")]
    );
}

#[test]
fn precision_is_applied_before_sorting() {
    init_tracing();
    let config = TemporaConfig {
        timeline: TimelineConfig {
            precision: TimeUnit::Seconds,
        },
        ..TemporaConfig::default()
    };
    let jitter = TimeDelta::milliseconds(400);
    let first = BiTemporalRecord::new(
        range(0, 10),
        TemporalRange::from_to(t(0), t(5) + jitter).unwrap(),
        "a",
    );
    let second = BiTemporalRecord::new(
        range(0, 10),
        TemporalRange::from_to_max(t(5) + jitter).unwrap(),
        "b",
    );

    let timeline = TimelineReconstructor::from_config(&config)
        .reconstruct(vec![second, first])
        .unwrap();

    assert_eq!(
        timeline.records(),
        vec![
            bi_record(range(0, 10), range(0, 5), "a"),
            bi_record(range(0, 10), open_range(5), "b"),
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Engine integration
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn engine_from_records() {
    init_tracing();
    let engine =
        BitemporalTimelineEngine::from_records(history(), &TemporaConfig::default()).unwrap();
    assert_eq!(engine.len().unwrap(), 2);
    assert_eq!(engine.records().unwrap(), history());
}

#[test]
fn failed_rebuild_leaves_state_untouched() {
    init_tracing();
    let engine = BitemporalTimelineEngine::new();
    engine.effective_as_of(t(0), t(0), "kept").unwrap();
    let before = engine.snapshot().unwrap();

    let bad = vec![
        bi_record(range(0, 10), range(0, 5), "a"),
        bi_record(range(0, 10), open_range(9), "b"),
    ];
    let err = engine.rebuild(bad, &TemporaConfig::default()).unwrap_err();

    assert!(err.is_non_contiguous());
    assert_eq!(engine.snapshot().unwrap(), before);
}

#[test]
fn successful_rebuild_replaces_state() {
    init_tracing();
    let engine = BitemporalTimelineEngine::new();
    engine.effective_as_of(t(100), t(0), "gone").unwrap();

    engine.rebuild(history(), &TemporaConfig::default()).unwrap();

    assert_eq!(engine.records().unwrap(), history());
    assert_eq!(engine.get_as_of(t(100), t(1)).unwrap().map(|r| r.value), Some("next"));
}
