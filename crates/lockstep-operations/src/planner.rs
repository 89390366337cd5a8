//! Pure release planning: which packages a change set drags into a release,
//! and what their manifests look like afterwards.
//!
//! Nothing in here touches the filesystem or git. Operations feed in packages
//! and a dependency graph, and persist whatever comes back out.

use lockstep_core::{Dependencies, ImpactSet, Package, PackageConfig};
use semver::Version;
use tracing::debug;

use crate::Result;
use crate::traits::DependencyGraph;

/// Collects the names that must be released when `changed` packages were
/// modified: the changed packages themselves plus every package that depends
/// on them, directly or transitively.
///
/// # Errors
///
/// Returns an error if a changed package is not part of `graph`.
pub fn build_impact_set<G>(changed: &[Package], graph: &G) -> Result<ImpactSet>
where
    G: DependencyGraph,
{
    let mut impact = ImpactSet::new();

    for package in changed {
        impact.insert(package.name.clone());

        for dependent in graph.transitive_dependents_of(&package.name)? {
            impact.insert(dependent);
        }
    }

    debug!(
        changed = changed.len(),
        impacted = impact.len(),
        "built impact set"
    );
    Ok(impact)
}

/// Marks every package for release. Used for the first release, when there is
/// no previous tag to diff against.
#[must_use]
pub fn impact_all_packages(packages: &[Package]) -> ImpactSet {
    packages.iter().map(|package| package.name.clone()).collect()
}

/// Rewrites `packages` for a release of `version`.
///
/// Impacted packages get `version` and a caret range on every dependency
/// entry that names another impacted package; all other packages are passed
/// through untouched. The result has the same length and order as the input,
/// and applying it twice with the same arguments changes nothing further.
#[must_use]
pub fn bump_packages(packages: &[Package], impact: &ImpactSet, version: &Version) -> Vec<Package> {
    packages
        .iter()
        .map(|package| bump_package(package, impact, version))
        .collect()
}

fn bump_package(package: &Package, impact: &ImpactSet, version: &Version) -> Package {
    if !impact.contains(&package.name) {
        return package.clone();
    }

    let config = &package.config;
    let config = PackageConfig {
        name: config.name.clone(),
        version: version.to_string(),
        dependencies: bump_dependencies(config.dependencies.as_ref(), impact, version),
        dev_dependencies: bump_dependencies(config.dev_dependencies.as_ref(), impact, version),
        peer_dependencies: bump_dependencies(config.peer_dependencies.as_ref(), impact, version),
        optional_dependencies: bump_dependencies(
            config.optional_dependencies.as_ref(),
            impact,
            version,
        ),
        extra: config.extra.clone(),
    };

    Package {
        name: package.name.clone(),
        path: package.path.clone(),
        config,
    }
}

/// Caret-pins entries that reference impacted packages; ranges on anything
/// else, including registry dependencies, are kept byte for byte.
fn bump_dependencies(
    dependencies: Option<&Dependencies>,
    impact: &ImpactSet,
    version: &Version,
) -> Option<Dependencies> {
    dependencies.map(|dependencies| {
        dependencies
            .iter()
            .map(|(name, range)| {
                let range = if impact.contains(name) {
                    format!("^{version}")
                } else {
                    range.clone()
                };
                (name.clone(), range)
            })
            .collect()
    })
}
