use super::TemporalError;

/// Top-level error type for tempora.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum TemporaError {
    #[error("temporal error: {0}")]
    TemporalError(#[from] TemporalError),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl TemporaError {
    /// Shorthand for `TemporaError::TemporalError(TemporalError::InvalidArgument(..))`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::TemporalError(TemporalError::invalid(message))
    }

    /// True when this wraps an `InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::TemporalError(TemporalError::InvalidArgument(_)))
    }

    /// True when this wraps a `NonContiguousSystemEffectiveRange`.
    pub fn is_non_contiguous(&self) -> bool {
        matches!(
            self,
            Self::TemporalError(TemporalError::NonContiguousSystemEffectiveRange { .. })
        )
    }
}

impl From<toml::de::Error> for TemporaError {
    fn from(e: toml::de::Error) -> Self {
        TemporaError::ConfigError(e.to_string())
    }
}

/// Convenience type alias.
pub type TemporaResult<T> = Result<T, TemporaError>;
