pub mod config;
pub mod fan_out;
mod signal;

// Re-export commonly used types
pub use config::{ErrorRetention, FanOut};
pub use fan_out::{for_each_conc, map_conc};
