//! cli::commands
//!
//! Command handlers.
//!
//! # Architecture
//!
//! Each handler:
//! 1. Opens the repository
//! 2. Calls into [`crate::summary`]
//! 3. Reports warnings on stderr
//!
//! Handlers never write to the repository.

mod completion;
mod summarize;

pub use completion::completion;
pub use summarize::summarize;

use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Settings shared by all handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Repository given with `-C`; discovered from the current directory
    /// when `None`
    pub repo: Option<PathBuf>,
    /// Output verbosity
    pub verbosity: Verbosity,
}
