use std::path::{Path, PathBuf};

use crate::Result;

/// Provider trait for the git questions operations need answered.
pub trait GitProvider: Send + Sync {
    /// Paths that differ between the tree at `since` and the current working
    /// directory, restricted to `scope`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or `since` does
    /// not resolve to a commit.
    fn changed_files_since(
        &self,
        project_root: &Path,
        since: &str,
        scope: &Path,
    ) -> Result<Vec<PathBuf>>;
}
