use git2::Repository;

use crate::domain::branch::DETACHED_HEAD;
use crate::error::{Result, VersionGateError};

/// Wrapper around git2 Repository for branch state inspection.
///
/// The version computation itself takes the branch name as a plain
/// argument; this wrapper exists so the binary can source that name from
/// the repository the build runs in.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Creates a new GitRepo instance for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent directories.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn new() -> Result<Self> {
        let repo = match Repository::discover(".") {
            Ok(repo) => repo,
            Err(e) => {
                return Err(VersionGateError::config(format!(
                    "Not in a git repository: {}",
                    e
                )))
            }
        };
        Ok(GitRepo { repo })
    }

    /// Gets the current branch name, or the `HEAD` sentinel when the
    /// checkout is detached.
    pub fn current_branch(&self) -> Result<String> {
        if self.repo.head_detached()? {
            return Ok(DETACHED_HEAD.to_string());
        }

        let head = self.repo.head()?;
        match head.shorthand() {
            Some(name) => Ok(name.to_string()),
            None => Err(VersionGateError::config(
                "HEAD does not point to a named branch".to_string(),
            )),
        }
    }
}
