//! CLI layer
//!
//! Provides:
//! - Argument parsing for the fixed `lcnt [options] <filename> [logfile]`
//!   surface
//! - Extension-based dispatch to solution or project parsing
//! - Result formatting and the optional log append

pub mod args;
pub mod dispatch;
pub mod report;

// Re-exports
pub use args::{parse_args, Invocation, Options};
pub use dispatch::{run_count, ExitCode};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Counter(#[from] crate::counter::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
