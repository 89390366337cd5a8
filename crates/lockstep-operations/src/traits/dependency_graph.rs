use lockstep_project::PackageGraph;

use crate::Result;

/// Read-only view of which workspace packages depend on which.
pub trait DependencyGraph: Send + Sync {
    /// Every package that directly or transitively depends on `name`.
    ///
    /// The result excludes `name` itself unless a dependency cycle reaches
    /// back to it.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not part of the graph.
    fn transitive_dependents_of(&self, name: &str) -> Result<Vec<String>>;
}

impl DependencyGraph for PackageGraph {
    fn transitive_dependents_of(&self, name: &str) -> Result<Vec<String>> {
        Ok(PackageGraph::transitive_dependents_of(self, name)?)
    }
}
