pub mod cli;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use cli::CliApp;
pub use error::AppError;
pub use logging::init_logging;
