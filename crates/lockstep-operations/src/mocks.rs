//! Mock providers for exercising operations without touching a filesystem
//! or a git repository.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lockstep_core::{Package, PackageConfig};
use lockstep_project::{Project, ProjectError, ProjectKind, RootConfig};
use serde_json::Value;

use crate::Result;
use crate::traits::{DependencyGraph, GitProvider, ManifestStore, ProjectProvider};

/// Builds a [`Package`] from a raw manifest value, rooted under a fake
/// workspace path.
///
/// # Panics
///
/// Panics if `value` is not a valid package manifest.
#[must_use]
pub fn package_from_value(value: Value) -> Package {
    let config: PackageConfig =
        serde_json::from_value(value).expect("manifest value should parse");
    Package {
        name: config.name.clone(),
        path: PathBuf::from("/mock/workspace/packages").join(&config.name),
        config,
    }
}

/// Shorthand for a package with only a name and a version.
#[must_use]
pub fn package(name: &str, version: &str) -> Package {
    package_from_value(serde_json::json!({ "name": name, "version": version }))
}

pub struct MockProjectProvider {
    project: Project,
    config: RootConfig,
}

impl MockProjectProvider {
    /// A workspace project at a fixed fake root.
    #[must_use]
    pub fn workspace(packages: Vec<Package>) -> Self {
        Self {
            project: Project {
                root: PathBuf::from("/mock/workspace"),
                kind: ProjectKind::Workspace,
                packages,
            },
            config: RootConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RootConfig) -> Self {
        self.config = config;
        self
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<Project> {
        Ok(self.project.clone())
    }

    fn load_config(&self, _project: &Project) -> Result<RootConfig> {
        Ok(self.config.clone())
    }
}

#[derive(Default)]
pub struct MockGitProvider {
    changes: HashMap<PathBuf, Vec<PathBuf>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `files` as changed inside the package directory `scope`.
    #[must_use]
    pub fn with_changes_in(mut self, scope: PathBuf, files: &[&str]) -> Self {
        let files = files.iter().map(PathBuf::from).collect();
        self.changes.insert(scope, files);
        self
    }
}

impl GitProvider for MockGitProvider {
    fn changed_files_since(
        &self,
        _project_root: &Path,
        _since: &str,
        scope: &Path,
    ) -> Result<Vec<PathBuf>> {
        Ok(self.changes.get(scope).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MockManifestStore {
    written: Mutex<Vec<Package>>,
}

impl MockManifestStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every package persisted so far, in write order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn written(&self) -> Vec<Package> {
        self.written.lock().expect("lock poisoned").clone()
    }
}

impl ManifestStore for MockManifestStore {
    fn write_package(&self, package: &Package) -> Result<()> {
        self.written
            .lock()
            .expect("lock poisoned")
            .push(package.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDependencyGraph {
    known: Vec<String>,
    dependents: HashMap<String, Vec<String>>,
}

impl MockDependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package with no dependents.
    #[must_use]
    pub fn with_package(mut self, name: &str) -> Self {
        self.known.push(name.to_owned());
        self
    }

    /// Registers a package together with its full transitive dependent set.
    #[must_use]
    pub fn with_dependents(mut self, name: &str, dependents: &[&str]) -> Self {
        self.known.push(name.to_owned());
        self.dependents
            .insert(name.to_owned(), dependents.iter().map(|s| (*s).to_owned()).collect());
        self
    }
}

impl DependencyGraph for MockDependencyGraph {
    fn transitive_dependents_of(&self, name: &str) -> Result<Vec<String>> {
        if !self.known.iter().any(|known| known == name) {
            return Err(ProjectError::UnknownPackage {
                name: name.to_owned(),
            }
            .into());
        }

        Ok(self.dependents.get(name).cloned().unwrap_or_default())
    }
}
