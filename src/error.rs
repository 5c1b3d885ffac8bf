//! Error types for Watchman
//!
//! Uses `thiserror` for library errors. Command launch failures and non-zero
//! exits are not errors: they are reported as outcomes by the dispatcher.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Watchman operations
pub type WatchmanResult<T> = Result<T, WatchmanError>;

/// Main error type for Watchman operations
#[derive(Error, Debug)]
pub enum WatchmanError {
    /// `--file` was absent or empty
    #[error("please give a file to watch (--file)")]
    MissingFile,

    /// `--command` was absent or empty
    #[error("please give a command to call on file change events (--command)")]
    MissingCommand,

    /// Both `--split-and` and `--split-then` were requested
    #[error("cannot split on both 'and' (&&) and 'then' (;)")]
    ConflictingChainModes,

    /// A quote appears inside a fragment without bracketing it
    #[error("arguments contain stray quote in '{fragment}' (command: '{command}')")]
    StrayQuote { fragment: String, command: String },

    /// A quote was opened and never closed
    #[error("arguments contain non-terminated quote '{fragment}' (command: '{command}')")]
    UnterminatedQuote { fragment: String, command: String },

    /// A chain link produced no program name
    #[error("chain link {index} has no program to run (command: '{command}')")]
    EmptyProgram { index: usize, command: String },

    /// The watch source could not be created or could not register the path
    #[error("could not watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// The notification channel closed while the watch loop was running
    #[error("watch notification channel closed unexpectedly")]
    WatchChannelClosed,
}
