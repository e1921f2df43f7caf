use crate::models::TemporalRange;

/// Interval-algebra and timeline construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemporalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "non-contiguous system-effective range for business range {business_range}: \
         {previous} does not meet {next}"
    )]
    NonContiguousSystemEffectiveRange {
        business_range: TemporalRange,
        previous: TemporalRange,
        next: TemporalRange,
    },
}

impl TemporalError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
