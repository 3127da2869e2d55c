//! git-summarize-branch - Generate PR descriptions from Git commits
//!
//! Lists every commit on a branch that is not on its base branch as a
//! Markdown bullet list, ready to paste into a pull request description.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates)
//! - [`summary`] - Base resolution, history walk and summary assembly
//! - [`core`] - Domain types and ref naming
//! - [`git`] - Read-only repository access behind the [`git::RepoStore`] trait
//! - [`ui`] - Summary rendering and stderr messages
//! - [`logging`] - Diagnostic logging setup
//!
//! # Guarantees
//!
//! 1. The repository is never modified
//! 2. Each commit is listed at most once
//! 3. The base commit and its ancestors are never listed when the base is an
//!    ancestor of head

pub mod cli;
pub mod core;
pub mod git;
pub mod logging;
pub mod summary;
pub mod ui;
