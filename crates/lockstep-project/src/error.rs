use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Manifest(#[from] lockstep_manifest::ManifestError),

    #[error("no package.json found traversing from '{start_dir}'")]
    NotFound { start_dir: PathBuf },

    #[error("failed to resolve start directory '{path}'")]
    StartDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("package name '{name}' is declared by both '{first}' and '{second}'")]
    DuplicatePackage {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("package '{name}' is not part of the workspace graph")]
    UnknownPackage { name: String },
}
