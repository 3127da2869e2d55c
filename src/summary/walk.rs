//! summary::walk
//!
//! Lazy commit history traversal.
//!
//! # Ordering
//!
//! The walk keeps a frontier of discovered commits and always visits the one
//! with the newest committer time next, breaking ties by discovery order (so
//! a merge's first parent comes before its second). A commit is only
//! discovered through a visited child, so no commit is yielded before the
//! descendants that led to it. On a merge diamond both sides are visited
//! before the shared ancestor.
//!
//! # Stop commit
//!
//! When the stop commit is visited it is marked uninteresting, and the mark
//! is handed down to every parent discovered through an uninteresting
//! commit. Uninteresting commits are never yielded. The walk ends once the
//! frontier holds nothing but uninteresting commits, so commits that reach
//! the base's history by another path (a base branch merged into head) are
//! still yielded.
//!
//! The walk ends with [`WalkOutcome::Exhausted`] when the frontier runs dry
//! without the stop commit ever being visited: the stop commit is not in
//! head's ancestry and the whole reachable history was yielded.
//!
//! As with `git rev-list`, committer times are trusted. A commit in the
//! base's history that is newer than the base tip itself may be yielded
//! before its mark arrives.
//!
//! # Example
//!
//! ```ignore
//! let walk = HistoryWalk::new(&git, head_oid, base_oid);
//! for commit in walk {
//!     let commit = commit?;
//!     println!("{}", commit.oid.short(7));
//! }
//! ```

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::core::types::Oid;
use crate::git::{Commit, GitError, RepoStore};

/// How a walk ended, or that it has not yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// More commits may follow.
    InProgress,
    /// The stop commit was reached and everything left is in its history.
    ReachedStop,
    /// Ancestry ran out before the stop commit was seen.
    Exhausted,
    /// A commit lookup failed.
    Failed,
}

/// A discovered commit waiting to be visited.
#[derive(Debug)]
struct Pending {
    commit: Commit,
    seq: u64,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: newest first, then earliest discovered.
        self.commit
            .commit_time
            .cmp(&other.commit.commit_time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Pending {}

/// Iterator over the commits reachable from a head but not from a stop
/// commit.
///
/// Each `next` call reads the parents of the previously yielded commit,
/// plus whatever part of the stop commit's history it has to pass through
/// to reach the next interesting commit. The iterator cannot be restarted;
/// build a new one instead.
pub struct HistoryWalk<'r, S: RepoStore + ?Sized> {
    store: &'r S,
    stop: Oid,
    /// OIDs to look up before the next visit.
    undiscovered: Vec<Oid>,
    queue: BinaryHeap<Pending>,
    seen: HashSet<Oid>,
    /// The stop commit and everything discovered through it.
    uninteresting: HashSet<Oid>,
    reached_stop: bool,
    next_seq: u64,
    outcome: WalkOutcome,
}

impl<'r, S: RepoStore + ?Sized> HistoryWalk<'r, S> {
    /// Start a walk at `head` that excludes `stop` and its history.
    ///
    /// Nothing is read from the store until the first `next` call.
    pub fn new(store: &'r S, head: Oid, stop: Oid) -> Self {
        Self {
            store,
            stop,
            undiscovered: vec![head],
            queue: BinaryHeap::new(),
            seen: HashSet::new(),
            uninteresting: HashSet::new(),
            reached_stop: false,
            next_seq: 0,
            outcome: WalkOutcome::InProgress,
        }
    }

    /// How the walk ended so far.
    pub fn outcome(&self) -> WalkOutcome {
        self.outcome
    }

    fn discover(&mut self, oid: Oid) -> Result<(), GitError> {
        if !self.seen.insert(oid.clone()) {
            return Ok(());
        }
        let commit = match self.store.find_commit(&oid) {
            Ok(commit) => commit,
            // History behind the base cannot be listed anyway (shallow clones).
            Err(err) if self.uninteresting.contains(&oid) => {
                debug!(%oid, error = %err, "skipping unreadable commit behind base");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        self.queue.push(Pending {
            commit,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        Ok(())
    }

    fn is_uninteresting(&self, oid: &Oid) -> bool {
        *oid == self.stop || self.uninteresting.contains(oid)
    }

    /// Nothing left that could still be yielded.
    fn everybody_uninteresting(&self) -> bool {
        self.queue
            .iter()
            .all(|pending| self.is_uninteresting(&pending.commit.oid))
    }

    fn fail(&mut self, err: GitError) -> Option<Result<Commit, GitError>> {
        self.finish(WalkOutcome::Failed);
        Some(Err(err))
    }

    fn finish(&mut self, outcome: WalkOutcome) {
        self.outcome = outcome;
        self.undiscovered.clear();
        self.queue.clear();
    }
}

impl<S: RepoStore + ?Sized> Iterator for HistoryWalk<'_, S> {
    type Item = Result<Commit, GitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.outcome != WalkOutcome::InProgress {
            return None;
        }

        for oid in std::mem::take(&mut self.undiscovered) {
            if let Err(err) = self.discover(oid) {
                return self.fail(err);
            }
        }

        loop {
            if self.reached_stop && self.everybody_uninteresting() {
                trace!(stop = %self.stop, "only base history left");
                self.finish(WalkOutcome::ReachedStop);
                return None;
            }

            let Some(Pending { commit, .. }) = self.queue.pop() else {
                trace!(stop = %self.stop, "history exhausted before reaching stop commit");
                self.finish(WalkOutcome::Exhausted);
                return None;
            };

            if self.is_uninteresting(&commit.oid) {
                if commit.oid == self.stop {
                    trace!(stop = %self.stop, "reached stop commit");
                    self.reached_stop = true;
                }
                for parent in commit.parents {
                    self.uninteresting.insert(parent.clone());
                    if let Err(err) = self.discover(parent) {
                        return self.fail(err);
                    }
                }
                continue;
            }

            trace!(oid = %commit.oid, parents = commit.parents.len(), "visit");
            self.undiscovered = commit.parents.clone();
            return Some(Ok(commit));
        }
    }
}

impl<S: RepoStore + ?Sized> FusedIterator for HistoryWalk<'_, S> {}
