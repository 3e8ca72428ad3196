//! Main application modules.
//!
//! This module provides target validation, progress logging, shutdown
//! handling, and statistics printing used by the load runner.

pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod target;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_check_statistics, print_failure_statistics};
pub use target::validate_target;
