use thiserror::Error;

use crate::data::model::{Attribute, Species};

// ---------------------------------------------------------------------------
// Error taxonomy of the statistics engine
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    /// The bundled dataset could not be read or decoded.
    #[error("bundled dataset unavailable: {0}")]
    DataUnavailable(String),

    /// A statistic was requested for a label with no matching samples.
    #[error("no samples for group '{0}'")]
    EmptyGroup(Species),

    /// A correlation involves an attribute with zero variance.
    #[error("correlation between '{0}' and '{1}' is undefined (zero variance)")]
    InsufficientData(Attribute, Attribute),

    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
