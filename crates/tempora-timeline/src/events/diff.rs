//! Classify a mutation into Inserted / Updated / Deleted events.
//!
//! Both functions work on before/after snapshots of materialized records, so
//! they serve the single-axis and the bitemporal decorators alike.

use tempora_core::models::TimelineEvent;

/// Events for an `effective_as_of` write.
///
/// - `prior`: the record returned by the write (state before it).
/// - `prior_after`: the prior's own key re-queried after the write.
/// - `written`: the written key queried after the write.
///
/// Yields at most one `Updated` followed by at most one `Inserted`. A write
/// that lands on the prior's own start changes both views, so it yields
/// both events carrying the same record.
pub fn classify_effective<R: PartialEq>(
    prior: Option<&R>,
    prior_after: Option<R>,
    written: Option<R>,
) -> Vec<TimelineEvent<R>> {
    let mut events = Vec::with_capacity(2);
    match prior {
        None => {
            if let Some(written) = written {
                events.push(TimelineEvent::Inserted(written));
            }
        }
        Some(prior) => {
            if let Some(after) = prior_after.filter(|a| a != prior) {
                events.push(TimelineEvent::Updated(after));
            }
            if let Some(written) = written.filter(|w| w != prior) {
                events.push(TimelineEvent::Inserted(written));
            }
        }
    }
    events
}

/// Event for an `expire_as_of` write.
///
/// Expiring exactly at the prior's start deletes it; expiring inside it
/// truncates it.
pub fn classify_expire<R: PartialEq>(
    prior: Option<R>,
    prior_after: Option<R>,
    expired_at_prior_start: bool,
) -> Option<TimelineEvent<R>> {
    let prior = prior?;
    if expired_at_prior_start {
        return Some(TimelineEvent::Deleted(prior));
    }
    match prior_after {
        Some(after) if after != prior => Some(TimelineEvent::Updated(after)),
        Some(_) => None,
        None => Some(TimelineEvent::Deleted(prior)),
    }
}
