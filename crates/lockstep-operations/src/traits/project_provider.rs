use std::path::Path;

use lockstep_project::{Project, RootConfig};

use crate::Result;

/// Provider trait for project discovery and configuration.
pub trait ProjectProvider: Send + Sync {
    /// Locates the project containing `start_path` and collects its packages.
    ///
    /// # Errors
    ///
    /// Returns an error if no project can be found or a package manifest is
    /// malformed.
    fn discover_project(&self, start_path: &Path) -> Result<Project>;

    /// Loads the tool configuration from the project root manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the root manifest cannot be read.
    fn load_config(&self, project: &Project) -> Result<RootConfig>;
}
