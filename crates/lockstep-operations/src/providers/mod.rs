mod git;
mod manifest;
mod project;

pub use git::Git2Provider;
pub use manifest::FileSystemManifestStore;
pub use project::FileSystemProjectProvider;
