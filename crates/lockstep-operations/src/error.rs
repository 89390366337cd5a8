use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] lockstep_git::GitError),

    #[error(transparent)]
    Project(#[from] lockstep_project::ProjectError),

    #[error(transparent)]
    Manifest(#[from] lockstep_manifest::ManifestError),

    #[error("no packages found in project at '{0}'")]
    EmptyProject(PathBuf),
}

pub type Result<T> = std::result::Result<T, OperationError>;
