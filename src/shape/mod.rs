pub mod error;
pub mod sequence;
pub mod validate;

// Re-export commonly used types
pub use error::ShapeError;
pub use sequence::{Extent, Sequence, SequenceSet};
pub use validate::validate;
