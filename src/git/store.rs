//! git::store
//!
//! The repository capability used by the summary core.
//!
//! # Design
//!
//! Resolution and traversal only need three things from a repository:
//! resolve a ref, fetch a commit, and name the checked-out ref. Keeping
//! those behind [`RepoStore`] lets the core run against the on-disk
//! [`super::Git`] in production and against [`super::MemoryRepo`] in tests.
//! Every operation is a read; no implementation may mutate the repository.

use chrono::{DateTime, Utc};

use super::GitError;
use crate::core::types::{Oid, RefName};

/// An immutable snapshot of a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The commit OID
    pub oid: Oid,
    /// Full commit message as stored, not necessarily UTF-8
    pub message: Vec<u8>,
    /// Parent OIDs in order; empty for a root commit, several for a merge
    pub parents: Vec<Oid>,
    /// Committer timestamp
    pub commit_time: DateTime<Utc>,
}

impl Commit {
    /// Create a commit record.
    pub fn new(
        oid: Oid,
        message: impl Into<Vec<u8>>,
        parents: Vec<Oid>,
        commit_time: DateTime<Utc>,
    ) -> Self {
        Self {
            oid,
            message: message.into(),
            parents,
            commit_time,
        }
    }
}

/// Read-only access to a repository's refs and commits.
pub trait RepoStore {
    /// Resolve a ref name to the commit it points at.
    ///
    /// Symbolic refs are followed.
    ///
    /// # Errors
    ///
    /// - [`GitError::RefNotFound`] if the ref does not exist
    fn resolve_ref(&self, name: &RefName) -> Result<Oid, GitError>;

    /// Fetch a commit by OID.
    ///
    /// # Errors
    ///
    /// - [`GitError::CommitNotFound`] if no such commit is stored
    fn find_commit(&self, oid: &Oid) -> Result<Commit, GitError>;

    /// The currently checked-out ref.
    ///
    /// Returns the branch HEAD points at, or `HEAD` itself when detached.
    fn head_ref(&self) -> Result<RefName, GitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(n: u32) -> Oid {
        Oid::new(format!("{n:040x}")).unwrap()
    }

    #[test]
    fn message_kept_byte_for_byte() {
        let raw = b"Caf\xe9 menu\r\n".to_vec();
        let commit = Commit::new(oid(1), raw.clone(), vec![], Utc::now());
        assert_eq!(commit.message, raw);
    }

    #[test]
    fn text_message() {
        let commit = Commit::new(oid(2), "Add parser\n", vec![oid(1)], Utc::now());
        assert_eq!(commit.message, b"Add parser\n");
        assert_eq!(commit.parents, vec![oid(1)]);
    }
}
