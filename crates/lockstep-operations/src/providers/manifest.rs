use lockstep_core::Package;

use crate::Result;
use crate::traits::ManifestStore;

/// [`ManifestStore`] that writes manifests straight to disk.
pub struct FileSystemManifestStore;

impl FileSystemManifestStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemManifestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestStore for FileSystemManifestStore {
    fn write_package(&self, package: &Package) -> Result<()> {
        Ok(lockstep_manifest::write_package(package)?)
    }
}
