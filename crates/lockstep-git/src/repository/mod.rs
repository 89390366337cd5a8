mod diff;
mod tag;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// Discovers the repository enclosing `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if `path` lies outside any git
    /// repository, or inside a bare one.
    pub fn open(path: &Path) -> Result<Self> {
        let not_a_repository = || GitError::NotARepository {
            path: path.to_path_buf(),
        };

        let inner = git2::Repository::discover(path).map_err(|_| not_a_repository())?;
        // Bare repositories have no working directory to diff against.
        let workdir = inner.workdir().ok_or_else(not_a_repository)?;
        // dunce strips the \\?\ verbatim prefix Windows paths pick up.
        let root = dunce::simplified(workdir).to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Commit id of the current HEAD.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be resolved, e.g. before the first commit.
    pub fn head_sha(&self) -> Result<String> {
        let head = self.inner.head()?.peel_to_commit()?;
        Ok(head.id().to_string())
    }

    /// Rebases `path` onto the repository root so it can serve as a
    /// pathspec. Relative paths and paths outside the root pass through
    /// unchanged.
    pub(crate) fn workdir_relative(&self, path: &Path) -> PathBuf {
        if !path.is_absolute() {
            return path.to_path_buf();
        }

        dunce::simplified(path)
            .strip_prefix(&self.root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}
