mod bump;
mod status;

pub use bump::{BumpInput, BumpOperation, BumpOutcome, BumpOutput, PlannedBump};
pub use status::{StatusInput, StatusOperation, StatusOutput};

use lockstep_core::Package;
use lockstep_project::{Project, RootConfig};
use tracing::debug;

use crate::Result;
use crate::traits::GitProvider;

pub(crate) struct ChangeScan {
    pub(crate) changed: Vec<Package>,
    pub(crate) skipped_circular: Vec<String>,
}

/// Diffs every package directory against `since` and partitions the project
/// into changed packages and circular packages that were skipped as change
/// sources.
pub(crate) fn scan_changed_packages<G>(
    git: &G,
    project: &Project,
    config: &RootConfig,
    since: &str,
) -> Result<ChangeScan>
where
    G: GitProvider,
{
    let mut changed = Vec::new();
    let mut skipped_circular = Vec::new();

    for package in &project.packages {
        if config.is_circular(&package.name) {
            debug!(package = %package.name, "not diffing circular package");
            skipped_circular.push(package.name.clone());
            continue;
        }

        let files = git.changed_files_since(&project.root, since, &package.path)?;
        debug!(
            package = %package.name,
            files = files.len(),
            since,
            "diffed package directory"
        );

        if !files.is_empty() {
            changed.push(package.clone());
        }
    }

    Ok(ChangeScan {
        changed,
        skipped_circular,
    })
}
