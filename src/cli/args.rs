//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `-C <path>`: Open the repository at this path instead of discovering it
//! - `--base-branch <branch>`: Compare against this branch
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Suppress warnings
//! - `--completions <shell>`: Print a completion script and exit

use clap::Parser;
use std::path::PathBuf;

/// Generate PR descriptions from Git commits
#[derive(Parser, Debug)]
#[command(name = "git-summarize-branch")]
#[command(author, about, long_about = None)]
#[command(
    after_help = "\
EXAMPLES:
    # Summarize the checked-out branch against develop, main or master
    git-summarize-branch

    # Summarize a specific branch against release
    git-summarize-branch --base-branch release feature/login

    # Summarize a repository elsewhere and copy the result
    git-summarize-branch -C ../service | pbcopy

BASE BRANCH:
    Without --base-branch the first existing branch among develop, main and
    master is used."
)]
pub struct Cli {
    /// Path to a git repository (work tree or git dir) to use instead of
    /// discovering one from the current directory
    #[arg(short = 'C', value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// The base branch of your changes (default: first of develop, main, master)
    #[arg(long, value_name = "BRANCH")]
    pub base_branch: Option<String>,

    /// Branch to summarize (default: the checked-out branch)
    #[arg(value_name = "HEAD")]
    pub head: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Suppress warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
