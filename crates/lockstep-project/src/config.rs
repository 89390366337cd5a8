use lockstep_manifest::MANIFEST_FILE;

use crate::ProjectError;
use crate::manifest::read_root_manifest;
use crate::project::Project;

/// Tool configuration, read from the `"lockstep"` key of the root manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    circular: Vec<String>,
}

impl RootConfig {
    #[must_use]
    pub fn new(circular: Vec<String>) -> Self {
        Self { circular }
    }

    #[must_use]
    pub fn circular(&self) -> &[String] {
        &self.circular
    }

    /// Whether `name` was declared circular. Circular packages are never
    /// treated as change sources.
    #[must_use]
    pub fn is_circular(&self, name: &str) -> bool {
        self.circular.iter().any(|circular| circular == name)
    }
}

/// # Errors
///
/// Returns an error if the root manifest cannot be read or parsed.
pub fn load_root_config(project: &Project) -> Result<RootConfig, ProjectError> {
    let manifest = read_root_manifest(&project.root.join(MANIFEST_FILE))?;
    let circular = manifest
        .lockstep
        .map(|metadata| metadata.circular)
        .unwrap_or_default();

    Ok(RootConfig::new(circular))
}
