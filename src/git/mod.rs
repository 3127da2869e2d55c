//! git
//!
//! Single interface for all repository access.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module imports
//! `git2`. The summary core depends on the [`RepoStore`] capability rather
//! than on [`Git`] directly, so it can run against [`MemoryRepo`] in tests.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Ref resolution (symbolic refs followed, tags peeled)
//! - Commit lookup (message, parents, committer time)
//!
//! # Invariants
//!
//! - Read-only: nothing here writes refs or objects
//! - All operations return strong types (Oid, RefName)

mod interface;
mod memory;
mod store;

pub use interface::{Git, GitError};
pub use memory::MemoryRepo;
pub use store::{Commit, RepoStore};
