//! Property tests for the interval algebra.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use tempora_core::models::{Instant, TemporalRange};

fn t(secs: i64) -> Instant {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn arb_range() -> impl Strategy<Value = TemporalRange> {
    (-1_000_000i64..1_000_000, 1i64..100_000)
        .prop_map(|(start, len)| TemporalRange::from_to(t(start), t(start + len)).unwrap())
}

proptest! {
    #[test]
    fn prop_disjoint_ranges_never_overlap(a in arb_range(), gap in 0i64..1000, len in 1i64..1000) {
        let start = a.end().timestamp() + gap;
        let b = TemporalRange::from_to(t(start), t(start + len)).unwrap();
        prop_assert!(!a.overlaps(&b));
        prop_assert!(!b.overlaps(&a));
        if gap == 0 {
            prop_assert!(a.meets(&b));
            prop_assert!(TemporalRange::is_contiguous(&[a, b]));
        } else {
            prop_assert!(!TemporalRange::is_contiguous(&[a, b]));
        }
    }
}

proptest! {
    #[test]
    fn prop_relation_inverse_is_symmetric(a in arb_range(), b in arb_range()) {
        prop_assert_eq!(a.relation(&b).inverse(), b.relation(&a));
    }
}

proptest! {
    #[test]
    fn prop_intersects_iff_relation_not_disjoint(a in arb_range(), b in arb_range()) {
        prop_assert_eq!(a.intersects(&b), !a.relation(&b).is_disjoint());
    }
}

proptest! {
    #[test]
    fn prop_forever_contains_any_instant(secs in -10_000_000_000i64..10_000_000_000) {
        prop_assert!(TemporalRange::FOREVER.contains(t(secs)));
    }
}

proptest! {
    #[test]
    fn prop_plus_then_minus_is_identity(a in arb_range(), shift in 0i64..1_000_000) {
        let d = chrono::TimeDelta::seconds(shift);
        prop_assert_eq!(a.plus(d).unwrap().minus(d).unwrap(), a);
    }
}
