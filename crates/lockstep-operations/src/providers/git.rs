use std::path::{Path, PathBuf};

use lockstep_git::Repository;

use crate::Result;
use crate::traits::GitProvider;

/// [`GitProvider`] backed by libgit2.
pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn changed_files_since(
        &self,
        project_root: &Path,
        since: &str,
        scope: &Path,
    ) -> Result<Vec<PathBuf>> {
        let repository = Repository::open(project_root)?;
        Ok(repository.changed_files_since(since, Some(scope))?)
    }
}
