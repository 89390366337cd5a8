use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`Repository`](crate::Repository) operations.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("underlying git call failed")]
    Git(#[from] git2::Error),

    #[error("no git repository found at or above '{path}'")]
    NotARepository { path: PathBuf },

    #[error("cannot resolve '{refspec}' to a commit")]
    RefNotFound { refspec: String },

    #[error("diff entry carries no file path")]
    MissingDeltaPath,
}
