//! Error types for hookwright operations.

use thiserror::Error;

/// A specialized `Result` type for hookwright operations.
pub type HookResult<T> = Result<T, HookError>;

/// Errors that can occur when validating and installing git hooks.
#[derive(Debug, Error)]
pub enum HookError {
    /// The hook directory does not exist, so this is not a git repository.
    #[error("not a git repository: {hooks_dir} does not exist")]
    NotARepository {
        /// The hook directory that was expected to exist.
        hooks_dir: String,
    },

    /// A configured hook name is not in git's recognized hook set.
    #[error("'{name}' is not a valid git hook name")]
    InvalidHookName {
        /// The rejected hook name.
        name: String,
    },

    /// A resource hook's source path resolves outside the project root.
    #[error("hook '{name}' source {path} is outside the project root")]
    SourceOutsideProject {
        /// The hook the source was configured for.
        name: String,
        /// The offending source path as configured.
        path: String,
    },

    /// Writing a hook file into the hook directory failed.
    #[error("hook write failed for '{name}': {reason}")]
    HookWriteFailed {
        /// The hook that could not be written.
        name: String,
        /// The reason for the failure.
        reason: String,
    },

    /// A resource hook's source file exists but could not be read.
    #[error("hook '{name}' source read failed for {path}: {reason}")]
    SourceReadFailed {
        /// The hook the source was configured for.
        name: String,
        /// The source path that couldn't be read.
        path: String,
        /// The reason for the failure.
        reason: String,
    },

    /// Failed to read a configuration file.
    #[error("config read failed for {path}: {reason}")]
    ConfigReadFailed {
        /// The path to the file that couldn't be read.
        path: String,
        /// The reason for the failure.
        reason: String,
    },

    /// Failed to parse a configuration file.
    #[error("config parse failed for {path}: {reason}")]
    ConfigParseFailed {
        /// The path to the file that couldn't be parsed.
        path: String,
        /// The reason for the failure.
        reason: String,
    },

    /// The process working directory could not be determined.
    #[error("current directory unavailable: {reason}")]
    CurrentDirUnavailable {
        /// The reason for the failure.
        reason: String,
    },
}
