use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dependency name to version-range string, in manifest order.
pub type Dependencies = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpLevel {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        };
        write!(f, "{s}")
    }
}

/// Contents of a package.json manifest.
///
/// Only the fields lockstep rewrites are modeled; everything else lands in
/// `extra` verbatim and in its original relative order, so serializing a
/// config that was never bumped round-trips the manifest content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageConfig {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Dependencies>,
    #[serde(
        rename = "devDependencies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_dependencies: Option<Dependencies>,
    #[serde(
        rename = "peerDependencies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub peer_dependencies: Option<Dependencies>,
    #[serde(
        rename = "optionalDependencies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub optional_dependencies: Option<Dependencies>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PackageConfig {
    /// The four dependency maps that may reference workspace packages, in
    /// the order npm documents them.
    #[must_use]
    pub fn dependency_kinds(&self) -> [Option<&Dependencies>; 4] {
        [
            self.dependencies.as_ref(),
            self.dev_dependencies.as_ref(),
            self.peer_dependencies.as_ref(),
            self.optional_dependencies.as_ref(),
        ]
    }
}

/// A workspace member: its manifest contents plus where they live on disk.
///
/// Identity is `name`; `path` is the package directory, not the manifest
/// file itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub path: PathBuf,
    pub config: PackageConfig,
}
