//! Error types for reckon-engine operations.

use thiserror::Error;

use crate::units::Unit;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReckonError {
    /// The two units belong to different dimensions.
    #[error("Impossible to convert {from} to {to}")]
    Conversion { from: Unit, to: Unit },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Invalid calendar point: {0}")]
    InvalidPoint(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

pub type Result<T> = std::result::Result<T, ReckonError>;
