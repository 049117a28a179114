//! Error types for the warp client.
//!
//! Uses thiserror for derive macros. Agent-run failures are not errors at
//! all: the caller inspects the exit code on the returned
//! [`ExecutionResult`](crate::invoker::ExecutionResult). Errors here cover
//! the two cases where no usable result exists.

use thiserror::Error;

/// Main error type for warp client operations.
#[derive(Error, Debug)]
pub enum WarpError {
    /// The warp binary could not be started in stream mode.
    ///
    /// Wait-mode invocations report spawn failures through an absent exit
    /// code instead; stream mode has no handle to return, so it must fail.
    #[error("failed to start {binary}: {details}")]
    Spawn {
        /// Name of the binary that could not be started.
        binary: String,
        /// Operating-system error text.
        details: String,
    },

    /// The profile-list invocation exited non-zero (or did not exit
    /// normally), so no profile data is available.
    #[error("warp profile listing failed (exit code {exit_code:?}): {stderr}")]
    ProfileList {
        /// Exit code of the listing process, if it exited normally.
        exit_code: Option<i32>,
        /// Captured stderr from the listing process.
        stderr: String,
    },
}

/// Result type alias for warp client operations.
pub type Result<T> = std::result::Result<T, WarpError>;
