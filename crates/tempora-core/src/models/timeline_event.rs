//! Change notifications emitted around timeline mutations.

/// What a mutation did to a materialized record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimelineEvent<R> {
    /// A record that did not exist before the mutation.
    Inserted(R),
    /// An existing record whose bounds or value changed; carries the new state.
    Updated(R),
    /// A record that no longer exists; carries its last state.
    Deleted(R),
}

impl<R> TimelineEvent<R> {
    pub fn record(&self) -> &R {
        match self {
            TimelineEvent::Inserted(r) | TimelineEvent::Updated(r) | TimelineEvent::Deleted(r) => r,
        }
    }

    pub fn into_record(self) -> R {
        match self {
            TimelineEvent::Inserted(r) | TimelineEvent::Updated(r) | TimelineEvent::Deleted(r) => r,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TimelineEvent::Inserted(_) => "inserted",
            TimelineEvent::Updated(_) => "updated",
            TimelineEvent::Deleted(_) => "deleted",
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, TimelineEvent::Inserted(_))
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, TimelineEvent::Updated(_))
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, TimelineEvent::Deleted(_))
    }
}
