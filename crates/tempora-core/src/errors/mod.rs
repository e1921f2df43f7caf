mod tempora_error;
mod temporal_error;

pub use tempora_error::{TemporaError, TemporaResult};
pub use temporal_error::TemporalError;
