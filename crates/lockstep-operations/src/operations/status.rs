use std::path::Path;

use lockstep_project::PackageGraph;
use tracing::debug;

use super::scan_changed_packages;
use crate::error::OperationError;
use crate::planner::{build_impact_set, impact_all_packages};
use crate::traits::{GitProvider, ProjectProvider};
use crate::Result;

pub struct StatusInput {
    /// Ref of the last release, usually a tag. `None` marks a first release.
    pub since: Option<String>,
}

/// Read-only picture of what a bump would release right now.
#[derive(Debug, Clone)]
pub struct StatusOutput {
    /// Every package in the project, in discovery order.
    pub packages: Vec<String>,
    /// Packages whose directories changed since the release ref.
    pub changed: Vec<String>,
    /// Packages a bump would rewrite.
    pub impacted: Vec<String>,
    /// Circular packages that were not diffed.
    pub skipped_circular: Vec<String>,
    /// Whether no release ref exists yet.
    pub first_release: bool,
}

pub struct StatusOperation<P, G> {
    project_provider: P,
    git_provider: G,
}

impl<P, G> StatusOperation<P, G>
where
    P: ProjectProvider,
    G: GitProvider,
{
    #[must_use]
    pub fn new(project_provider: P, git_provider: G) -> Self {
        Self {
            project_provider,
            git_provider,
        }
    }

    /// Computes the same plan a bump would, without writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered, contains no
    /// packages, or a diff fails.
    pub fn execute(&self, start_path: &Path, input: &StatusInput) -> Result<StatusOutput> {
        let project = self.project_provider.discover_project(start_path)?;
        if project.packages.is_empty() {
            return Err(OperationError::EmptyProject(project.root));
        }

        let config = self.project_provider.load_config(&project)?;
        let packages: Vec<String> = project
            .packages
            .iter()
            .map(|package| package.name.clone())
            .collect();

        let Some(since) = &input.since else {
            debug!("no previous release, every package is pending");
            let impacted = impact_all_packages(&project.packages);
            return Ok(StatusOutput {
                packages,
                changed: Vec::new(),
                impacted: impacted.names().map(str::to_owned).collect(),
                skipped_circular: Vec::new(),
                first_release: true,
            });
        };

        let scan = scan_changed_packages(&self.git_provider, &project, &config, since)?;
        let graph = PackageGraph::from_packages(&project.packages);
        let impact = build_impact_set(&scan.changed, &graph)?;

        Ok(StatusOutput {
            packages,
            changed: scan
                .changed
                .into_iter()
                .map(|package| package.name)
                .collect(),
            impacted: impact.names().map(str::to_owned).collect(),
            skipped_circular: scan.skipped_circular,
            first_release: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockGitProvider, MockProjectProvider, package, package_from_value};
    use serde_json::json;

    fn workspace() -> Vec<lockstep_core::Package> {
        vec![
            package("pkg-a", "1.0.0"),
            package_from_value(json!({
                "name": "pkg-b",
                "version": "1.0.0",
                "dependencies": { "pkg-a": "^1.0.0" }
            })),
            package("pkg-c", "1.0.0"),
        ]
    }

    #[test]
    fn status_reports_changed_and_impacted_packages() {
        let packages = workspace();
        let changed_path = packages[0].path.clone();
        let operation = StatusOperation::new(
            MockProjectProvider::workspace(packages),
            MockGitProvider::new().with_changes_in(changed_path, &["index.js"]),
        );

        let output = operation
            .execute(
                Path::new("/mock/workspace"),
                &StatusInput {
                    since: Some("v1.0.0".to_owned()),
                },
            )
            .expect("status should succeed");

        assert_eq!(output.packages, vec!["pkg-a", "pkg-b", "pkg-c"]);
        assert_eq!(output.changed, vec!["pkg-a"]);
        assert_eq!(output.impacted, vec!["pkg-a", "pkg-b"]);
        assert!(!output.first_release);
    }

    #[test]
    fn status_without_a_release_ref_marks_everything_pending() {
        let operation = StatusOperation::new(
            MockProjectProvider::workspace(workspace()),
            MockGitProvider::new(),
        );

        let output = operation
            .execute(Path::new("/mock/workspace"), &StatusInput { since: None })
            .expect("status should succeed");

        assert!(output.first_release);
        assert!(output.changed.is_empty());
        assert_eq!(output.impacted, vec!["pkg-a", "pkg-b", "pkg-c"]);
    }

    #[test]
    fn clean_project_reports_empty_impact() {
        let operation = StatusOperation::new(
            MockProjectProvider::workspace(workspace()),
            MockGitProvider::new(),
        );

        let output = operation
            .execute(
                Path::new("/mock/workspace"),
                &StatusInput {
                    since: Some("v1.0.0".to_owned()),
                },
            )
            .expect("status should succeed");

        assert!(output.changed.is_empty());
        assert!(output.impacted.is_empty());
    }

    #[test]
    fn empty_project_is_an_error() {
        let operation = StatusOperation::new(
            MockProjectProvider::workspace(Vec::new()),
            MockGitProvider::new(),
        );

        let error = operation
            .execute(Path::new("/mock/workspace"), &StatusInput { since: None })
            .expect_err("empty projects have no status");

        assert!(matches!(error, OperationError::EmptyProject(_)));
    }
}
