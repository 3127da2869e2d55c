//! summary::base
//!
//! Base reference resolution.
//!
//! An explicit `--base-branch` is authoritative: if it does not resolve, the
//! lookup error is returned and no fallback is tried. Without one, the
//! candidate list is searched in priority order and the first ref that
//! resolves wins. Failures of individual candidates are expected (most
//! repositories have only one trunk) and are not surfaced; only an exhausted
//! list is an error.

use tracing::debug;

use super::SummaryError;
use crate::core::naming::branch_ref;
use crate::core::types::{Oid, RefName};
use crate::git::RepoStore;

/// Branches tried, in order, when no base is given.
pub const DEFAULT_BASE_CANDIDATES: [&str; 3] = ["develop", "main", "master"];

/// A ref together with the commit it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    /// The fully-qualified ref name
    pub name: RefName,
    /// The commit the ref points at
    pub oid: Oid,
}

/// Ordered list of base branch candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCandidates(Vec<RefName>);

impl BaseCandidates {
    /// Build a candidate list from branch tokens, normalizing each one.
    ///
    /// # Example
    ///
    /// ```
    /// use git_summarize_branch::summary::base::BaseCandidates;
    ///
    /// let candidates = BaseCandidates::from_tokens(["trunk", "refs/heads/main"]);
    /// let names: Vec<_> = candidates.iter().map(|r| r.as_str()).collect();
    /// assert_eq!(names, ["refs/heads/trunk", "refs/heads/main"]);
    /// ```
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .map(|token| branch_ref(token.as_ref()))
                .collect(),
        )
    }

    /// Iterate candidates in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &RefName> {
        self.0.iter()
    }

    /// Comma-separated short names, for messages.
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map(|r| r.short_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for BaseCandidates {
    fn default() -> Self {
        Self::from_tokens(DEFAULT_BASE_CANDIDATES)
    }
}

/// Resolve the base ref of the comparison.
///
/// # Errors
///
/// - The store's lookup error (usually `GitError::RefNotFound`) if `explicit`
///   is given and does not resolve
/// - [`SummaryError::NoBaseFound`] if no candidate resolves
pub fn resolve_base<S>(
    store: &S,
    explicit: Option<&str>,
    candidates: &BaseCandidates,
) -> Result<ResolvedRef, SummaryError>
where
    S: RepoStore + ?Sized,
{
    if let Some(token) = explicit {
        let name = branch_ref(token);
        let oid = store.resolve_ref(&name)?;
        debug!(base = %name, %oid, "using explicit base");
        return Ok(ResolvedRef { name, oid });
    }

    for name in candidates.iter() {
        match store.resolve_ref(name) {
            Ok(oid) => {
                debug!(base = %name, %oid, "inferred base");
                return Ok(ResolvedRef {
                    name: name.clone(),
                    oid,
                });
            }
            Err(err) => debug!(candidate = %name, error = %err, "base candidate skipped"),
        }
    }

    Err(SummaryError::NoBaseFound {
        tried: candidates.describe(),
    })
}
