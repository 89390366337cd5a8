use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// # Errors
    ///
    /// Returns an error if the tag list cannot be read.
    pub fn has_tags(&self) -> Result<bool> {
        Ok(!self.inner.tag_names(None)?.is_empty())
    }

    /// Commit id of the newest commit reachable from any tag, the same
    /// commit `git rev-list --tags --max-count=1` prints. `None` when the
    /// repository has no tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag references cannot be walked.
    pub fn last_tagged_commit(&self) -> Result<Option<String>> {
        if !self.has_tags()? {
            return Ok(None);
        }

        let mut walk = self.inner.revwalk()?;
        walk.push_glob("refs/tags/*")?;

        match walk.next() {
            Some(oid) => Ok(Some(oid?.to_string())),
            None => Ok(None),
        }
    }

    /// Nearest tag name for `refspec`, like `git describe --tags`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if `refspec` cannot be resolved,
    /// or an error when no tag describes the commit.
    pub fn describe_commit(&self, refspec: &str) -> Result<String> {
        let object = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        let mut opts = git2::DescribeOptions::new();
        opts.describe_tags();

        let describe = object.describe(&opts)?;
        Ok(describe.format(None)?)
    }

    /// Name of the tag on the most recently tagged commit, `None` on a
    /// repository that has never been tagged.
    ///
    /// # Errors
    ///
    /// Returns an error if tag walking or description fails.
    pub fn last_release_tag(&self) -> Result<Option<String>> {
        match self.last_tagged_commit()? {
            Some(sha) => Ok(Some(self.describe_commit(&sha)?)),
            None => Ok(None),
        }
    }
}
