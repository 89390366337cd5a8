use std::path::Path;

use lockstep_core::{Package, PackageConfig};

use crate::{MANIFEST_FILE, ManifestError};

/// Serializes `config` to `path` as two-space-indented JSON with a trailing
/// newline, the format npm itself writes.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_config(path: &Path, config: &PackageConfig) -> Result<(), ManifestError> {
    let mut contents =
        serde_json::to_string_pretty(config).map_err(|source| ManifestError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    contents.push('\n');

    std::fs::write(path, contents).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `package.config` back to the manifest inside `package.path`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_package(package: &Package) -> Result<(), ManifestError> {
    write_config(&package.path.join(MANIFEST_FILE), &package.config)
}
