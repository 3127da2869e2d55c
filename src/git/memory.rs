//! git::memory
//!
//! In-memory repository store for deterministic testing.
//!
//! # Design
//!
//! `MemoryRepo` holds a commit graph and a ref table in plain maps and
//! implements [`RepoStore`]. It records every commit lookup so tests can
//! check that history is read lazily, and it can be built with parent links
//! to commits that were never inserted to simulate a damaged history.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use git_summarize_branch::core::types::{Oid, RefName};
//! use git_summarize_branch::git::{Commit, MemoryRepo, RepoStore};
//!
//! let root = Oid::new("1111111111111111111111111111111111111111").unwrap();
//! let tip = Oid::new("2222222222222222222222222222222222222222").unwrap();
//!
//! let mut repo = MemoryRepo::new();
//! repo.insert_commit(Commit::new(root.clone(), "root", vec![], Utc.timestamp_opt(1, 0).unwrap()));
//! repo.insert_commit(Commit::new(tip.clone(), "tip", vec![root], Utc.timestamp_opt(2, 0).unwrap()));
//! repo.set_branch("main", tip.clone());
//! repo.checkout("main");
//!
//! assert_eq!(repo.head_ref().unwrap().as_str(), "refs/heads/main");
//! assert_eq!(repo.resolve_ref(&RefName::head()).unwrap(), tip);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use super::store::{Commit, RepoStore};
use super::GitError;
use crate::core::naming::branch_ref;
use crate::core::types::{Oid, RefName};

/// In-memory repository store.
#[derive(Debug, Default)]
pub struct MemoryRepo {
    /// Stored commits by OID.
    commits: HashMap<Oid, Commit>,
    /// Direct refs.
    refs: HashMap<RefName, Oid>,
    /// What HEAD points at.
    head: Option<Head>,
    /// Every OID passed to `find_commit`, in call order.
    lookups: RefCell<Vec<Oid>>,
}

#[derive(Debug, Clone)]
enum Head {
    Symbolic(RefName),
    Detached(Oid),
}

impl MemoryRepo {
    /// Create an empty repository with an unborn HEAD.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a commit, replacing any commit with the same OID.
    pub fn insert_commit(&mut self, commit: Commit) {
        self.commits.insert(commit.oid.clone(), commit);
    }

    /// Point a ref at a commit.
    pub fn set_ref(&mut self, name: RefName, oid: Oid) {
        self.refs.insert(name, oid);
    }

    /// Point a branch (short or qualified token) at a commit.
    pub fn set_branch(&mut self, token: &str, oid: Oid) {
        self.set_ref(branch_ref(token), oid);
    }

    /// Make HEAD a symbolic ref to the given branch.
    ///
    /// The branch does not need to exist, which models an unborn branch.
    pub fn checkout(&mut self, token: &str) {
        self.head = Some(Head::Symbolic(branch_ref(token)));
    }

    /// Detach HEAD at a commit.
    pub fn detach(&mut self, oid: Oid) {
        self.head = Some(Head::Detached(oid));
    }

    /// OIDs passed to `find_commit` so far, in call order.
    pub fn commit_lookups(&self) -> Vec<Oid> {
        self.lookups.borrow().clone()
    }

    fn not_found(name: &RefName) -> GitError {
        GitError::RefNotFound {
            refname: name.to_string(),
        }
    }
}

impl RepoStore for MemoryRepo {
    fn resolve_ref(&self, name: &RefName) -> Result<Oid, GitError> {
        if *name == RefName::head() {
            return match &self.head {
                Some(Head::Symbolic(target)) => self
                    .refs
                    .get(target)
                    .cloned()
                    .ok_or_else(|| Self::not_found(name)),
                Some(Head::Detached(oid)) => Ok(oid.clone()),
                None => Err(Self::not_found(name)),
            };
        }

        self.refs.get(name).cloned().ok_or_else(|| Self::not_found(name))
    }

    fn find_commit(&self, oid: &Oid) -> Result<Commit, GitError> {
        self.lookups.borrow_mut().push(oid.clone());
        self.commits
            .get(oid)
            .cloned()
            .ok_or_else(|| GitError::CommitNotFound {
                oid: oid.to_string(),
            })
    }

    fn head_ref(&self) -> Result<RefName, GitError> {
        match &self.head {
            Some(Head::Symbolic(target)) => Ok(target.clone()),
            Some(Head::Detached(_)) => Ok(RefName::head()),
            None => Err(Self::not_found(&RefName::head())),
        }
    }
}
