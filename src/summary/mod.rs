//! summary
//!
//! Branch summary generation: resolve head and base, walk the history in
//! between, and stream it through the emitter.
//!
//! # Modules
//!
//! - [`base`] - Base ref resolution (explicit or priority search)
//! - [`walk`] - Lazy history traversal bounded by the base commit
//!
//! # Flow
//!
//! 1. Head: the given token, normalized, or the store's checked-out ref
//! 2. Base: see [`base::resolve_base`]
//! 3. Walk from head, stopping before the base commit
//! 4. Each visited commit is written as soon as it is read
//!
//! Output is not buffered. If the walk fails midway, the header and the
//! bullets written so far stay written and the error is returned.

pub mod base;
pub mod walk;

use std::io::Write;

use thiserror::Error;
use tracing::debug;

use crate::core::naming::branch_ref;
use crate::git::{GitError, RepoStore};
use crate::ui::summary::SummaryEmitter;

use base::{resolve_base, BaseCandidates, ResolvedRef};
use walk::{HistoryWalk, WalkOutcome};

/// Errors from summary generation.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Repository access failed (missing ref, missing commit, ...).
    #[error(transparent)]
    Git(#[from] GitError),

    /// No base was given and no candidate branch exists.
    #[error("could not determine base branch (tried {tried}), try using --base-branch")]
    NoBaseFound {
        /// Short names of the candidates that were tried
        tried: String,
    },

    /// Writing the summary failed.
    #[error("failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

/// What to summarize.
#[derive(Debug, Clone, Default)]
pub struct SummaryRequest<'a> {
    /// Head branch token; the checked-out ref when `None`
    pub head: Option<&'a str>,
    /// Explicit base branch token; inferred when `None`
    pub base: Option<&'a str>,
    /// Candidates for base inference
    pub candidates: BaseCandidates,
}

/// What a completed summary covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// The resolved head
    pub head: ResolvedRef,
    /// The resolved base
    pub base: ResolvedRef,
    /// Number of commits written
    pub commits: usize,
    /// `Exhausted` when base is not an ancestor of head
    pub outcome: WalkOutcome,
}

impl SummaryReport {
    /// True when the base was never reached and the full history of head
    /// was written.
    pub fn base_unrelated(&self) -> bool {
        self.outcome == WalkOutcome::Exhausted
    }
}

/// Resolve the request against `store` and write the summary to `out`.
///
/// # Errors
///
/// - [`GitError::RefNotFound`] if the head or an explicit base is missing
/// - [`SummaryError::NoBaseFound`] if no base could be inferred
/// - [`GitError::CommitNotFound`] if history is damaged
/// - [`SummaryError::Output`] if `out` cannot be written
pub fn summarize<S, W>(
    store: &S,
    request: &SummaryRequest<'_>,
    out: W,
) -> Result<SummaryReport, SummaryError>
where
    S: RepoStore + ?Sized,
    W: Write,
{
    let head_name = match request.head {
        Some(token) => branch_ref(token),
        None => store.head_ref()?,
    };
    let head = ResolvedRef {
        oid: store.resolve_ref(&head_name)?,
        name: head_name,
    };

    let base = resolve_base(store, request.base, &request.candidates)?;
    // The base must name a readable commit even though the walk may never reach it.
    store.find_commit(&base.oid)?;
    debug!(head = %head.name, base = %base.name, "summarizing");

    let mut emitter = SummaryEmitter::start(out)?;
    let mut walk = HistoryWalk::new(store, head.oid.clone(), base.oid.clone());
    for commit in walk.by_ref() {
        emitter.commit(&commit?)?;
    }

    let commits = emitter.written();
    emitter.finish()?;

    Ok(SummaryReport {
        head,
        base,
        commits,
        outcome: walk.outcome(),
    })
}
