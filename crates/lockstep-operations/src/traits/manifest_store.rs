use lockstep_core::Package;

use crate::Result;

/// Provider trait for persisting package manifests.
pub trait ManifestStore: Send + Sync {
    /// Writes the manifest of `package` back to its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be serialized or written.
    fn write_package(&self, package: &Package) -> Result<()>;
}
