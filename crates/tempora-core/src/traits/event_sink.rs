use crate::models::TimelineEvent;

/// Receives change events, synchronously, on the mutating thread.
pub trait EventSink<R>: Send + Sync {
    fn on_event(&self, event: TimelineEvent<R>);
}

impl<R, F> EventSink<R> for F
where
    F: Fn(TimelineEvent<R>) + Send + Sync,
{
    fn on_event(&self, event: TimelineEvent<R>) {
        self(event)
    }
}
