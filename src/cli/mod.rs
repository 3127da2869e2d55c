//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Set up logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and hands a
//! [`commands::Context`] to the handler, which opens the repository and calls
//! into [`crate::summary`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::logging;
use crate::ui::output::Verbosity;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    if let Some(shell) = cli.completions {
        return commands::completion(shell);
    }

    let ctx = commands::Context {
        repo: cli.repo,
        verbosity: Verbosity::from_quiet(cli.quiet),
    };

    commands::summarize(&ctx, cli.head.as_deref(), cli.base_branch.as_deref())
}
