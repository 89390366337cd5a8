use std::path::{Path, PathBuf};

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Paths that differ between the tree at `refspec` and the working
    /// directory (index included), relative to the repository root. Tracked
    /// files only, matching `git diff --name-only <refspec>`. A `scope`
    /// directory restricts the diff to paths beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if `refspec` cannot be resolved.
    pub fn changed_files_since(&self, refspec: &str, scope: Option<&Path>) -> Result<Vec<PathBuf>> {
        let base_tree = self.resolve_tree(refspec)?;

        let mut opts = git2::DiffOptions::new();
        if let Some(scope) = scope {
            let relative = self.workdir_relative(scope);
            if !relative.as_os_str().is_empty() {
                opts.pathspec(relative.to_string_lossy().replace('\\', "/"));
            }
        }

        let diff = self
            .inner
            .diff_tree_to_workdir_with_index(Some(&base_tree), Some(&mut opts))?;

        // A deleted file only has an old side, so fall back to it.
        diff.deltas()
            .map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(Path::to_path_buf)
                    .ok_or(GitError::MissingDeltaPath)
            })
            .collect()
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        let unresolved = || GitError::RefNotFound {
            refspec: refspec.to_owned(),
        };

        let object = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| unresolved())?;
        object.peel_to_tree().map_err(|_| unresolved())
    }
}
