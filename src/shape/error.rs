use thiserror::Error;

/// Shape errors raised before any element of the input is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("No sequences provided")]
    NoSequences,

    #[error("Argument {position} is not a sequence (found {found})")]
    NotASequence { position: usize, found: &'static str },

    #[error("Sequence {position} has length {found}, expected {expected}")]
    LengthMismatch {
        position: usize,
        expected: usize,
        found: usize,
    },
}

impl ShapeError {
    /// True when the inputs were sequences but disagreed on length
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, ShapeError::LengthMismatch { .. })
    }
}
