//! Bitemporal timeline: a business-time timeline of system-time timelines.

use tempora_core::models::{BiTemporalRecord, Instant, Segment, TemporalRange, TemporalRecord};

use crate::timeline::Timeline;

/// Outer axis is business (valid) time; the value at each business
/// transition point is an inner timeline over system (transaction) time.
///
/// Outer buckets are created lazily on the first write at a new business
/// instant and never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitemporalTimeline<V> {
    outer: Timeline<Timeline<V>>,
}

impl<V> Default for BitemporalTimeline<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> BitemporalTimeline<V> {
    pub fn new() -> Self {
        Self {
            outer: Timeline::new(),
        }
    }

    /// Number of business transition points.
    pub fn len(&self) -> usize {
        self.outer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Total system transition points across every business bucket.
    pub fn transition_count(&self) -> usize {
        self.outer
            .transition_points()
            .filter_map(|(_, segment)| segment.as_active())
            .map(Timeline::len)
            .sum()
    }

    /// The system timeline stored at exactly `business`, if any.
    pub fn bucket(&self, business: Instant) -> Option<&Timeline<V>> {
        self.outer.get_segment(business)?.as_active()
    }

    fn bucket_mut(&mut self, business: Instant) -> Option<&mut Timeline<V>> {
        let slot = self
            .outer
            .slot_or_insert_with(business, || Segment::Active(Timeline::new()));
        if slot.is_expired() {
            *slot = Segment::Active(Timeline::new());
        }
        slot.as_active_mut()
    }
}

impl<V: Clone> BitemporalTimeline<V> {
    /// Make `value` effective from `business` onward as known from `system`
    /// onward.
    ///
    /// Returns the record effective at `(business, system)` before the write:
    /// its business range comes from the outer axis, its system range from
    /// the inner one.
    pub fn effective_as_of(
        &mut self,
        business: Instant,
        system: Instant,
        value: V,
    ) -> Option<BiTemporalRecord<V>> {
        if self.outer.contains_transition(business) {
            let business_range = self.outer.segment_range(business);
            let inner_prior = self
                .bucket_mut(business)
                .and_then(|bucket| bucket.effective_as_of(system, value));
            combine(business_range, inner_prior)
        } else {
            let prior = self.prior_from_preceding_bucket(business, system);
            if let Some(bucket) = self.bucket_mut(business) {
                bucket.effective_as_of(system, value);
            }
            prior
        }
    }

    /// Write a system-time tombstone at `(business, system)`.
    ///
    /// A missing bucket is created holding only the tombstone: nothing is
    /// known at this business instant as of `system`.
    pub fn expire_as_of(&mut self, business: Instant, system: Instant) -> Option<BiTemporalRecord<V>> {
        if self.outer.contains_transition(business) {
            let business_range = self.outer.segment_range(business);
            let inner_prior = self.bucket_mut(business).and_then(|bucket| {
                if bucket.is_empty() {
                    bucket.put(system, Segment::Expired);
                    None
                } else {
                    bucket.expire_as_of(system)
                }
            });
            combine(business_range, inner_prior)
        } else {
            let prior = self.prior_from_preceding_bucket(business, system);
            if let Some(bucket) = self.bucket_mut(business) {
                bucket.put(system, Segment::Expired);
            }
            prior
        }
    }

    /// Floor on the business axis, then floor on the system axis.
    pub fn get_as_of(&self, business: Instant, system: Instant) -> Option<BiTemporalRecord<V>> {
        let (key, segment) = self.outer.floor(business)?;
        let inner = segment.as_active()?.get_as_of(system)?;
        let business_range = self.outer.segment_range(key)?;
        Some(BiTemporalRecord::new(business_range, inner.range, inner.value))
    }

    /// Steps back one bucket on the business axis and reads the system axis
    /// at `system` inside it.
    pub fn get_prior_to(&self, business: Instant, system: Instant) -> Option<BiTemporalRecord<V>> {
        let (floor, key, bucket) = self.preceding_bucket(business)?;
        let inner = bucket.get_as_of(system)?;
        let business_range = TemporalRange::from_to(key, floor).ok()?;
        Some(BiTemporalRecord::new(business_range, inner.range, inner.value))
    }

    /// Steps back one bucket on the business axis and one segment on the
    /// system axis.
    pub fn get_prior_to_prior_to(
        &self,
        business: Instant,
        system: Instant,
    ) -> Option<BiTemporalRecord<V>> {
        let (floor, key, bucket) = self.preceding_bucket(business)?;
        let inner = bucket.get_prior_to(system)?;
        let business_range = TemporalRange::from_to(key, floor).ok()?;
        Some(BiTemporalRecord::new(business_range, inner.range, inner.value))
    }

    /// One record per business transition point in `business`, read at the
    /// bucket's first system transition point.
    pub fn get_in_range(&self, business: &TemporalRange) -> Vec<BiTemporalRecord<V>> {
        self.outer
            .keys_in(business)
            .filter_map(|key| {
                let first = self.bucket(key)?.first_transition()?;
                self.get_as_of(key, first)
            })
            .collect()
    }

    /// Every record at a (business, system) transition pair inside both ranges.
    pub fn get_in_range_with_system(
        &self,
        business: &TemporalRange,
        system: &TemporalRange,
    ) -> Vec<BiTemporalRecord<V>> {
        let mut records = Vec::new();
        for key in self.outer.keys_in(business) {
            let Some(bucket) = self.bucket(key) else {
                continue;
            };
            records.extend(
                bucket
                    .keys_in(system)
                    .filter_map(|system_key| self.get_as_of(key, system_key)),
            );
        }
        records
    }

    /// Every non-tombstone record, ordered by `(business_range, system_range)`.
    pub fn records(&self) -> Vec<BiTemporalRecord<V>> {
        self.get_in_range_with_system(&TemporalRange::FOREVER, &TemporalRange::FOREVER)
    }

    fn prior_from_preceding_bucket(
        &self,
        business: Instant,
        system: Instant,
    ) -> Option<BiTemporalRecord<V>> {
        let (key, segment) = self.outer.lower(business)?;
        let inner = segment.as_active()?.get_as_of(system)?;
        let business_range = TemporalRange::from_to(key, self.outer.next_after(key)).ok()?;
        Some(BiTemporalRecord::new(business_range, inner.range, inner.value))
    }

    /// `(floor key of business, key before it, bucket at that key)`.
    fn preceding_bucket(&self, business: Instant) -> Option<(Instant, Instant, &Timeline<V>)> {
        let (floor, _) = self.outer.floor(business)?;
        let (key, segment) = self.outer.lower(floor)?;
        Some((floor, key, segment.as_active()?))
    }
}

fn combine<V>(
    business_range: Option<TemporalRange>,
    inner: Option<TemporalRecord<V>>,
) -> Option<BiTemporalRecord<V>> {
    let business_range = business_range?;
    let inner = inner?;
    Some(BiTemporalRecord::new(business_range, inner.range, inner.value))
}
