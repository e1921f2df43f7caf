//! Single-axis transition-point timeline.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use tempora_core::models::{Instant, Segment, TemporalRange, TemporalRecord};

/// An ordered map of transition points to segments.
///
/// Each key marks where a value (or a tombstone) becomes effective; it stays
/// effective until the next greater key, or `MAX` if there is none. Keys are
/// unique: writing at an existing key replaces its segment in place and
/// never moves a neighbouring boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<V> {
    points: BTreeMap<Instant, Segment<V>>,
}

impl<V> Default for Timeline<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Timeline<V> {
    pub fn new() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Number of transition points, tombstones included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Transition points in ascending order.
    pub fn transition_points(&self) -> btree_map::Iter<'_, Instant, Segment<V>> {
        self.points.iter()
    }

    pub fn first_transition(&self) -> Option<Instant> {
        self.points.keys().next().copied()
    }

    pub fn contains_transition(&self, at: Instant) -> bool {
        self.points.contains_key(&at)
    }

    /// Greatest transition point `<= at`.
    pub(crate) fn floor(&self, at: Instant) -> Option<(Instant, &Segment<V>)> {
        self.points.range(..=at).next_back().map(|(k, s)| (*k, s))
    }

    /// Greatest transition point `< at`.
    pub(crate) fn lower(&self, at: Instant) -> Option<(Instant, &Segment<V>)> {
        self.points.range(..at).next_back().map(|(k, s)| (*k, s))
    }

    /// Implied end of a segment starting at `at`: the next greater key, or `MAX`.
    pub(crate) fn next_after(&self, at: Instant) -> Instant {
        self.points
            .range((Excluded(at), Unbounded))
            .next()
            .map(|(k, _)| *k)
            .unwrap_or(TemporalRange::MAX)
    }

    /// `[key, next key)`. `None` only for a key sitting at `MAX`.
    pub(crate) fn segment_range(&self, key: Instant) -> Option<TemporalRange> {
        TemporalRange::from_to(key, self.next_after(key)).ok()
    }

    /// Transition points inside `[range.start, range.end)`.
    pub(crate) fn keys_in<'a>(
        &'a self,
        range: &TemporalRange,
    ) -> impl Iterator<Item = Instant> + 'a {
        self.points
            .range(range.start()..range.end())
            .map(|(k, _)| *k)
    }

    pub(crate) fn get_segment(&self, at: Instant) -> Option<&Segment<V>> {
        self.points.get(&at)
    }

    pub(crate) fn slot_or_insert_with(
        &mut self,
        at: Instant,
        make: impl FnOnce() -> Segment<V>,
    ) -> &mut Segment<V> {
        self.points.entry(at).or_insert_with(make)
    }

    /// Raw write, bypassing prior computation.
    pub(crate) fn put(&mut self, at: Instant, segment: Segment<V>) -> Option<Segment<V>> {
        self.points.insert(at, segment)
    }
}

impl<V: Clone> Timeline<V> {
    /// Make `value` effective from `at` onward, splitting the segment that
    /// contained `at` if `at` is a new transition point.
    ///
    /// Returns the record effective at `at` before the write. A value
    /// written at `MAX` is never returned by a read; the engines reject it.
    pub fn effective_as_of(&mut self, at: Instant, value: V) -> Option<TemporalRecord<V>> {
        let prior = self.prior_for_write(at);
        self.points.insert(at, Segment::Active(value));
        prior
    }

    /// Write a tombstone at `at`. On an empty timeline nothing is written.
    ///
    /// Returns the record effective at `at` before the write.
    pub fn expire_as_of(&mut self, at: Instant) -> Option<TemporalRecord<V>> {
        if self.points.is_empty() {
            return None;
        }
        let prior = self.prior_for_write(at);
        self.points.insert(at, Segment::Expired);
        prior
    }

    /// Floor lookup; a tombstone at the floor means nothing is effective.
    pub fn get_as_of(&self, at: Instant) -> Option<TemporalRecord<V>> {
        let (key, segment) = self.floor(at)?;
        self.materialize(key, segment)
    }

    /// The segment immediately before the one containing `at`.
    pub fn get_prior_to(&self, at: Instant) -> Option<TemporalRecord<V>> {
        let (floor, _) = self.floor(at)?;
        let (key, segment) = self.lower(floor)?;
        let value = segment.as_active()?;
        let range = TemporalRange::from_to(key, floor).ok()?;
        Some(TemporalRecord::new(range, value.clone()))
    }

    /// Every non-tombstone segment whose transition point lies in `range`.
    pub fn get_in_range(&self, range: &TemporalRange) -> Vec<TemporalRecord<V>> {
        self.keys_in(range)
            .filter_map(|key| self.get_as_of(key))
            .collect()
    }

    /// Every non-tombstone segment, ascending.
    pub fn records(&self) -> Vec<TemporalRecord<V>> {
        self.points
            .iter()
            .filter_map(|(key, segment)| self.materialize(*key, segment))
            .collect()
    }

    // The two paths are kept separate: an overwrite reads the segment that
    // starts at `at`, a fresh key reads the segment it is about to truncate.
    fn prior_for_write(&self, at: Instant) -> Option<TemporalRecord<V>> {
        if self.points.contains_key(&at) {
            self.get_as_of(at)
        } else {
            let (key, segment) = self.lower(at)?;
            let value = segment.as_active()?;
            let range = TemporalRange::from_to(key, self.next_after(key)).ok()?;
            Some(TemporalRecord::new(range, value.clone()))
        }
    }

    fn materialize(&self, key: Instant, segment: &Segment<V>) -> Option<TemporalRecord<V>> {
        let value = segment.as_active()?;
        let range = self.segment_range(key)?;
        Some(TemporalRecord::new(range, value.clone()))
    }
}

impl<V: Clone> FromIterator<(Instant, V)> for Timeline<V> {
    /// Replays `(instant, value)` pairs through `effective_as_of`.
    fn from_iter<I: IntoIterator<Item = (Instant, V)>>(iter: I) -> Self {
        let mut timeline = Timeline::new();
        for (at, value) in iter {
            timeline.effective_as_of(at, value);
        }
        timeline
    }
}
