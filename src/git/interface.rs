//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module is the **single doorway** to on-disk repositories. No other
//! module imports `git2`; everything above this layer sees strong types
//! ([`Oid`], [`RefName`]) and the typed [`GitError`] categories.
//!
//! # Error Handling
//!
//! git2 errors are normalized into:
//! - [`GitError::NotARepo`]: no repository at or above the given path
//! - [`GitError::RefNotFound`]: the requested ref does not exist
//! - [`GitError::CommitNotFound`]: a commit the history points at is missing
//!
//! # Example
//!
//! ```ignore
//! use git_summarize_branch::git::{Git, RepoStore};
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let head = git.head_ref()?;
//! let oid = git.resolve_ref(&head)?;
//! println!("{} is at {}", head, oid.short(7));
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use super::store::{Commit, RepoStore};
use crate::core::types::{Oid, RefName, TypeError};

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// No repository could be opened.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Requested ref does not exist.
    #[error("ref not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// A commit referenced by history could not be read.
    #[error("commit not found: {oid}")]
    CommitNotFound {
        /// The OID that was not found
        oid: String,
    },

    /// Invalid object id format.
    #[error("invalid object id: {oid}")]
    InvalidOid {
        /// The invalid OID string
        oid: String,
    },

    /// Invalid ref name format.
    #[error("invalid ref name: {message}")]
    InvalidRefName {
        /// Description of the problem
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Categorize a failed ref lookup.
    fn from_ref_lookup(err: git2::Error, refname: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound
            | git2::ErrorCode::InvalidSpec
            | git2::ErrorCode::UnbornBranch => GitError::RefNotFound {
                refname: refname.to_string(),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", refname, err.message()),
            },
        }
    }

    /// Categorize a failed commit lookup.
    fn from_commit_lookup(err: git2::Error, oid: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound => GitError::CommitNotFound {
                oid: oid.to_string(),
            },
            git2::ErrorCode::InvalidSpec => GitError::InvalidOid {
                oid: oid.to_string(),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", oid, err.message()),
            },
        }
    }
}

impl From<TypeError> for GitError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidOid(msg) => GitError::InvalidOid { oid: msg },
            TypeError::InvalidRefName(msg) => GitError::InvalidRefName { message: msg },
        }
    }
}

/// The on-disk repository store.
///
/// Opened once per invocation and only ever read.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Discover and open the repository containing `path`.
    ///
    /// Searches `path` and its parents, so any directory inside a work tree
    /// works. Bare repositories are accepted since nothing here needs a
    /// working directory.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|e| {
            debug!(path = %path.display(), error = %e.message(), "repository discovery failed");
            GitError::NotARepo {
                path: path.to_path_buf(),
            }
        })?;
        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Open the repository exactly at `path`, without searching parents.
    ///
    /// `path` may be a work tree root or a git directory.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if `path` is not a repository
    pub fn open_at(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::open(path).map_err(|e| {
            debug!(path = %path.display(), error = %e.message(), "repository open failed");
            GitError::NotARepo {
                path: path.to_path_buf(),
            }
        })?;
        debug!(git_dir = %repo.path().display(), "opened repository");
        Ok(Self { repo })
    }

    fn parse_oid(oid: &Oid) -> Result<git2::Oid, GitError> {
        git2::Oid::from_str(oid.as_str()).map_err(|_| GitError::InvalidOid {
            oid: oid.to_string(),
        })
    }
}

impl RepoStore for Git {
    /// Resolve a ref, following symbolic refs and peeling tags to the commit.
    fn resolve_ref(&self, name: &RefName) -> Result<Oid, GitError> {
        let reference = self
            .repo
            .find_reference(name.as_str())
            .and_then(|r| r.resolve())
            .map_err(|e| GitError::from_ref_lookup(e, name.as_str()))?;

        let target = reference
            .target()
            .map(|oid| oid.to_string())
            .unwrap_or_else(|| name.to_string());

        let commit = reference
            .peel_to_commit()
            .map_err(|e| GitError::from_commit_lookup(e, &target))?;

        let oid = Oid::new(commit.id().to_string())?;
        trace!(refname = %name, %oid, "resolved ref");
        Ok(oid)
    }

    fn find_commit(&self, oid: &Oid) -> Result<Commit, GitError> {
        let git_oid = Self::parse_oid(oid)?;
        let commit = self
            .repo
            .find_commit(git_oid)
            .map_err(|e| GitError::from_commit_lookup(e, oid.as_str()))?;

        let commit_time = chrono::DateTime::from_timestamp(commit.time().seconds(), 0)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH);

        let parents = commit
            .parent_ids()
            .map(|id| Oid::new(id.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Commit {
            oid: oid.clone(),
            message: commit.message_bytes().to_vec(),
            parents,
            commit_time,
        })
    }

    fn head_ref(&self) -> Result<RefName, GitError> {
        let head = self
            .repo
            .find_reference("HEAD")
            .map_err(|e| GitError::from_ref_lookup(e, "HEAD"))?;

        match head.symbolic_target() {
            Some(target) => Ok(RefName::new(target)?),
            None => Ok(RefName::head()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod git_error {
        use super::*;

        #[test]
        fn display_formatting() {
            let err = GitError::RefNotFound {
                refname: "refs/heads/develop".to_string(),
            };
            assert_eq!(err.to_string(), "ref not found: refs/heads/develop");

            let err = GitError::CommitNotFound {
                oid: "abc".to_string(),
            };
            assert_eq!(err.to_string(), "commit not found: abc");
        }

        #[test]
        fn ref_lookup_not_found() {
            let err = git2::Error::new(
                git2::ErrorCode::NotFound,
                git2::ErrorClass::Reference,
                "reference 'refs/heads/nope' not found",
            );
            assert!(matches!(
                GitError::from_ref_lookup(err, "refs/heads/nope"),
                GitError::RefNotFound { refname } if refname == "refs/heads/nope"
            ));
        }

        #[test]
        fn ref_lookup_invalid_spec_is_not_found() {
            let err = git2::Error::new(
                git2::ErrorCode::InvalidSpec,
                git2::ErrorClass::Reference,
                "invalid reference name",
            );
            assert!(matches!(
                GitError::from_ref_lookup(err, "refs/heads/a..b"),
                GitError::RefNotFound { .. }
            ));
        }

        #[test]
        fn commit_lookup_not_found() {
            let err = git2::Error::new(
                git2::ErrorCode::NotFound,
                git2::ErrorClass::Odb,
                "object not found",
            );
            assert!(matches!(
                GitError::from_commit_lookup(err, "abc"),
                GitError::CommitNotFound { oid } if oid == "abc"
            ));
        }

        #[test]
        fn other_codes_are_internal() {
            let err = git2::Error::new(
                git2::ErrorCode::Locked,
                git2::ErrorClass::Reference,
                "locked",
            );
            assert!(matches!(
                GitError::from_ref_lookup(err, "HEAD"),
                GitError::Internal { .. }
            ));
        }

        #[test]
        fn from_type_error() {
            let err: GitError = TypeError::InvalidOid("bad".into()).into();
            assert!(matches!(err, GitError::InvalidOid { .. }));
        }
    }
}
