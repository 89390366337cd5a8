use std::path::Path;

use lockstep_project::PackageGraph;
use semver::Version;
use tracing::debug;

use super::scan_changed_packages;
use crate::error::OperationError;
use crate::planner::{build_impact_set, bump_packages, impact_all_packages};
use crate::traits::{GitProvider, ManifestStore, ProjectProvider};
use crate::Result;

pub struct BumpInput {
    /// Ref of the last release, usually a tag. `None` marks a first release,
    /// which bumps every package without consulting git.
    pub since: Option<String>,
    pub version: Version,
    pub dry_run: bool,
}

/// One package scheduled to receive the new version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedBump {
    pub name: String,
    pub previous_version: String,
}

#[derive(Debug, Clone)]
pub struct BumpOutput {
    pub version: Version,
    /// Packages rewritten to the new version, in discovery order.
    pub bumped: Vec<PlannedBump>,
    /// Packages left at their current version.
    pub unchanged: Vec<String>,
    /// Packages whose directories actually changed since the release ref.
    pub changed: Vec<String>,
    /// Circular packages that were not diffed.
    pub skipped_circular: Vec<String>,
}

#[derive(Debug)]
pub enum BumpOutcome {
    /// Nothing changed since the last release.
    UpToDate,
    DryRun(BumpOutput),
    Executed(BumpOutput),
}

pub struct BumpOperation<P, G, M> {
    project_provider: P,
    git_provider: G,
    manifest_store: M,
}

impl<P, G, M> BumpOperation<P, G, M>
where
    P: ProjectProvider,
    G: GitProvider,
    M: ManifestStore,
{
    #[must_use]
    pub fn new(project_provider: P, git_provider: G, manifest_store: M) -> Self {
        Self {
            project_provider,
            git_provider,
            manifest_store,
        }
    }

    /// Plans and applies a version bump: diff each package against the
    /// release ref, close the changed set over dependents, rewrite manifests
    /// in memory and persist the impacted ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered, contains no
    /// packages, a diff fails, or a manifest cannot be written back.
    pub fn execute(&self, start_path: &Path, input: &BumpInput) -> Result<BumpOutcome> {
        let project = self.project_provider.discover_project(start_path)?;
        if project.packages.is_empty() {
            return Err(OperationError::EmptyProject(project.root));
        }

        let config = self.project_provider.load_config(&project)?;

        let (impact, changed, skipped_circular) = match &input.since {
            None => {
                debug!("no previous release, bumping every package");
                (impact_all_packages(&project.packages), Vec::new(), Vec::new())
            }
            Some(since) => {
                let scan = scan_changed_packages(&self.git_provider, &project, &config, since)?;
                let graph = PackageGraph::from_packages(&project.packages);
                let impact = build_impact_set(&scan.changed, &graph)?;
                let changed = scan
                    .changed
                    .into_iter()
                    .map(|package| package.name)
                    .collect();
                (impact, changed, scan.skipped_circular)
            }
        };

        if impact.is_empty() {
            return Ok(BumpOutcome::UpToDate);
        }

        let rewritten = bump_packages(&project.packages, &impact, &input.version);

        let mut bumped = Vec::new();
        let mut unchanged = Vec::new();
        for (package, original) in rewritten.iter().zip(&project.packages) {
            if impact.contains(&package.name) {
                bumped.push(PlannedBump {
                    name: package.name.clone(),
                    previous_version: original.config.version.clone(),
                });
            } else {
                unchanged.push(package.name.clone());
            }
        }

        let output = BumpOutput {
            version: input.version.clone(),
            bumped,
            unchanged,
            changed,
            skipped_circular,
        };

        if input.dry_run {
            return Ok(BumpOutcome::DryRun(output));
        }

        for package in &rewritten {
            if impact.contains(&package.name) {
                self.manifest_store.write_package(package)?;
                debug!(package = %package.name, version = %input.version, "wrote manifest");
            }
        }

        Ok(BumpOutcome::Executed(output))
    }
}
