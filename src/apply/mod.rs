pub mod error;
pub mod outcome;
pub mod sequential;

// Re-export commonly used types
pub use error::ApplyError;
pub use outcome::Mapped;
pub use sequential::{SequenceExt, count, filter, fold, for_each, map, try_fold};
