use thiserror::Error;

use crate::shape::ShapeError;

/// Error from an effect-only operation: either the inputs were malformed or
/// the user function reported a failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyError<E> {
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("User function failed: {0}")]
    User(E),
}

impl<E> ApplyError<E> {
    /// The user function's error, if that is what this is
    pub fn into_user(self) -> Option<E> {
        match self {
            ApplyError::User(e) => Some(e),
            ApplyError::Shape(_) => None,
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, ApplyError::Shape(_))
    }
}
