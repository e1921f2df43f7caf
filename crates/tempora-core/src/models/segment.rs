/// The value held by a timeline between one transition point and the next.
///
/// `Expired` is a tombstone: nothing is effective from its transition point
/// until the following one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment<V> {
    Active(V),
    Expired,
}

impl<V> Segment<V> {
    pub fn is_active(&self) -> bool {
        matches!(self, Segment::Active(_))
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Segment::Expired)
    }

    pub fn as_active(&self) -> Option<&V> {
        match self {
            Segment::Active(v) => Some(v),
            Segment::Expired => None,
        }
    }

    pub fn as_active_mut(&mut self) -> Option<&mut V> {
        match self {
            Segment::Active(v) => Some(v),
            Segment::Expired => None,
        }
    }

    pub fn into_active(self) -> Option<V> {
        match self {
            Segment::Active(v) => Some(v),
            Segment::Expired => None,
        }
    }
}

impl<V> From<Option<V>> for Segment<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => Segment::Active(v),
            None => Segment::Expired,
        }
    }
}
