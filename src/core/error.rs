use thiserror::Error;

use crate::EntryType;

/// Errors returned by namespace operations.
///
/// `path` always names the prefix of the requested path where the walk stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("{path} does not exist")]
    PathNotFound { path: String },

    #[error("{path} is not a directory")]
    NotADirectory { path: String },

    #[error("{path} is not a file")]
    NotAFile { path: String },

    #[error("{path} already exists and is not a {expected}")]
    ConflictingType { path: String, expected: EntryType },
}

/// Fieldless discriminant of [`FsError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidPath,
    PathNotFound,
    NotADirectory,
    NotAFile,
    ConflictingType,
}

impl FsError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        FsError::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FsError::InvalidPath { .. } => ErrorKind::InvalidPath,
            FsError::PathNotFound { .. } => ErrorKind::PathNotFound,
            FsError::NotADirectory { .. } => ErrorKind::NotADirectory,
            FsError::NotAFile { .. } => ErrorKind::NotAFile,
            FsError::ConflictingType { .. } => ErrorKind::ConflictingType,
        }
    }

    /// The path prefix the error refers to.
    pub fn path(&self) -> &str {
        match self {
            FsError::InvalidPath { path, .. }
            | FsError::PathNotFound { path }
            | FsError::NotADirectory { path }
            | FsError::NotAFile { path }
            | FsError::ConflictingType { path, .. } => path,
        }
    }
}
