mod dependency_graph;
mod git_provider;
mod manifest_store;
mod project_provider;

pub use dependency_graph::DependencyGraph;
pub use git_provider::GitProvider;
pub use manifest_store::ManifestStore;
pub use project_provider::ProjectProvider;
