use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use lockstep_core::Package;

use crate::ProjectError;

/// Dependency relationships between workspace packages, keyed by name.
///
/// Edges point from a dependency to its dependents, so walking forward
/// answers "who must be re-released when this package changes".
#[derive(Debug, Clone, Default)]
pub struct PackageGraph {
    dependents: IndexMap<String, IndexSet<String>>,
}

impl PackageGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph for `packages`: one node per package, one edge per
    /// dependency entry (any kind) that names another workspace package.
    /// Entries naming foreign packages contribute no edge.
    #[must_use]
    pub fn from_packages(packages: &[Package]) -> Self {
        let mut graph = Self::new();

        for package in packages {
            graph.add_package(&package.name);
        }

        for package in packages {
            for dependencies in package.config.dependency_kinds().into_iter().flatten() {
                for dependency in dependencies.keys() {
                    if graph.contains(dependency) {
                        graph.insert_edge(&package.name, dependency);
                    }
                }
            }
        }

        graph
    }

    pub fn add_package(&mut self, name: &str) {
        self.dependents.entry(name.to_owned()).or_default();
    }

    /// Records that `dependent` depends on `dependency`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::UnknownPackage`] if either name has not been
    /// added to the graph.
    pub fn add_dependency(&mut self, dependent: &str, dependency: &str) -> Result<(), ProjectError> {
        for name in [dependent, dependency] {
            if !self.contains(name) {
                return Err(ProjectError::UnknownPackage {
                    name: name.to_owned(),
                });
            }
        }

        self.insert_edge(dependent, dependency);
        Ok(())
    }

    fn insert_edge(&mut self, dependent: &str, dependency: &str) {
        if let Some(dependents) = self.dependents.get_mut(dependency) {
            dependents.insert(dependent.to_owned());
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.dependents.contains_key(name)
    }

    #[must_use]
    pub fn package_names(&self) -> Vec<&str> {
        self.dependents.keys().map(String::as_str).collect()
    }

    /// Packages that directly depend on `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::UnknownPackage`] if `name` is not a node.
    pub fn dependents_of(&self, name: &str) -> Result<Vec<&str>, ProjectError> {
        let direct = self
            .dependents
            .get(name)
            .ok_or_else(|| ProjectError::UnknownPackage {
                name: name.to_owned(),
            })?;

        Ok(direct.iter().map(String::as_str).collect())
    }

    /// Every package that directly or transitively depends on `name`, in
    /// breadth-first discovery order. `name` itself appears only when a
    /// dependency cycle reaches back to it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::UnknownPackage`] if `name` is not a node.
    pub fn transitive_dependents_of(&self, name: &str) -> Result<Vec<String>, ProjectError> {
        let direct = self
            .dependents
            .get(name)
            .ok_or_else(|| ProjectError::UnknownPackage {
                name: name.to_owned(),
            })?;

        let mut seen: IndexSet<String> = IndexSet::new();
        let mut queue: VecDeque<&str> = direct.iter().map(String::as_str).collect();

        while let Some(current) = queue.pop_front() {
            if !seen.insert(current.to_owned()) {
                continue;
            }

            if let Some(next) = self.dependents.get(current) {
                queue.extend(next.iter().map(String::as_str));
            }
        }

        Ok(seen.into_iter().collect())
    }
}
