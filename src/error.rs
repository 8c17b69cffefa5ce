//! Error types for document assembly and document loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling a document or one of its members.
///
/// Assembly never returns a partially built value: either the whole
/// entity is produced or one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A mandatory constructor input was not supplied.
    #[error("argument required: {argument}")]
    ArgumentRequired { argument: &'static str },

    /// A structurally required leaf value was null or empty.
    #[error("invalid argument {argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl BuildError {
    pub(crate) fn required(argument: &'static str) -> Self {
        BuildError::ArgumentRequired { argument }
    }

    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        BuildError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Errors while loading a JSON document from disk or a string.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}
