mod config;
mod error;
mod graph;
mod manifest;
mod project;

pub use config::{RootConfig, load_root_config};
pub use error::ProjectError;
pub use graph::PackageGraph;
pub use project::{Project, ProjectKind, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
