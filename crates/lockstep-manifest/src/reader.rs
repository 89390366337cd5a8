use std::path::Path;

use lockstep_core::{Package, PackageConfig};

use crate::{MANIFEST_FILE, ManifestError};

/// # Errors
///
/// Returns [`ManifestError::Read`] if the file is unreadable and
/// [`ManifestError::Parse`] if its contents are not a JSON manifest.
pub fn read_config(path: &Path) -> Result<PackageConfig, ManifestError> {
    let bytes = std::fs::read(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the manifest inside `dir` into a [`Package`] rooted at `dir`.
///
/// # Errors
///
/// Returns an error if `dir/package.json` cannot be read or parsed.
pub fn read_package(dir: &Path) -> Result<Package, ManifestError> {
    let config = read_config(&dir.join(MANIFEST_FILE))?;

    Ok(Package {
        name: config.name.clone(),
        path: dir.to_path_buf(),
        config,
    })
}
