//! Allen's thirteen interval relations.

/// How one [`TemporalRange`](super::TemporalRange) relates to another.
///
/// Read as "self *relation* other": `Before` means self ends strictly
/// before other starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllenRelation {
    Before,
    Meets,
    OverlapsBefore,
    FinishedBy,
    Includes,
    Starts,
    Equals,
    StartedBy,
    During,
    Finishes,
    OverlapsAfter,
    MetBy,
    After,
}

impl AllenRelation {
    /// The relation seen from the other range.
    pub fn inverse(self) -> Self {
        match self {
            AllenRelation::Before => AllenRelation::After,
            AllenRelation::Meets => AllenRelation::MetBy,
            AllenRelation::OverlapsBefore => AllenRelation::OverlapsAfter,
            AllenRelation::FinishedBy => AllenRelation::Finishes,
            AllenRelation::Includes => AllenRelation::During,
            AllenRelation::Starts => AllenRelation::StartedBy,
            AllenRelation::Equals => AllenRelation::Equals,
            AllenRelation::StartedBy => AllenRelation::Starts,
            AllenRelation::During => AllenRelation::Includes,
            AllenRelation::Finishes => AllenRelation::FinishedBy,
            AllenRelation::OverlapsAfter => AllenRelation::OverlapsBefore,
            AllenRelation::MetBy => AllenRelation::Meets,
            AllenRelation::After => AllenRelation::Before,
        }
    }

    /// True for the relations where the two ranges share no instant.
    pub fn is_disjoint(self) -> bool {
        matches!(
            self,
            AllenRelation::Before | AllenRelation::Meets | AllenRelation::MetBy | AllenRelation::After
        )
    }
}
