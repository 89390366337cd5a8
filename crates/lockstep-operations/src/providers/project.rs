use std::path::Path;

use lockstep_project::{Project, RootConfig};

use crate::Result;
use crate::traits::ProjectProvider;

/// [`ProjectProvider`] that discovers projects on the local filesystem.
pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn discover_project(&self, start_path: &Path) -> Result<Project> {
        Ok(lockstep_project::discover_project(start_path)?)
    }

    fn load_config(&self, project: &Project) -> Result<RootConfig> {
        Ok(lockstep_project::load_root_config(project)?)
    }
}
