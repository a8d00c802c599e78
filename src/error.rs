//! Error types for parsing persisted and user-supplied ruler values.

/// Errors raised while turning strings into ruler values.
///
/// None of these reach the user: preference loading logs them and falls
/// back to defaults, and the CLI reports them through clap.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RulerError {
    #[error("invalid calibration factor: {0:?}")]
    InvalidFactor(String),
    #[error("unknown unit: {0:?} (expected \"cm\" or \"inch\")")]
    UnknownUnit(String),
    #[error("undefined device density")]
    UndefinedDensity,
}

pub type RulerResult<T> = Result<T, RulerError>;
