use std::path::Path;

use serde::Deserialize;

use crate::ProjectError;

/// Just enough of a root package.json to locate workspace members and the
/// tool configuration. Member manifests go through `lockstep-manifest`
/// instead, which keeps every field.
#[derive(Debug, Deserialize)]
pub(crate) struct RootManifest {
    pub(crate) workspaces: Option<WorkspacesField>,
    pub(crate) lockstep: Option<LockstepMetadata>,
}

/// npm accepts a plain pattern array as well as the object form yarn
/// introduced.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WorkspacesField {
    Patterns(Vec<String>),
    Detailed { packages: Vec<String> },
}

impl WorkspacesField {
    pub(crate) fn patterns(&self) -> &[String] {
        match self {
            Self::Patterns(patterns) => patterns,
            Self::Detailed { packages } => packages,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct LockstepMetadata {
    #[serde(default)]
    pub(crate) circular: Vec<String>,
}

pub(crate) fn read_root_manifest(path: &Path) -> Result<RootManifest, ProjectError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| lockstep_manifest::ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let manifest = serde_json::from_str(&contents).map_err(|source| {
        lockstep_manifest::ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(manifest)
}
