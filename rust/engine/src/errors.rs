use thiserror::Error;

/// Input-validation failures raised by the engine.
///
/// Both kinds are local and deterministic: a call either has enough valid
/// input for a well-defined answer or it fails outright. Monte Carlo
/// variance is not an error condition; callers control trial counts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card count: {count}, expected 5 to 7")]
    InvalidCardCount { count: usize },
    #[error("Invalid hand notation: {input:?}")]
    InvalidNotation { input: String },
}
