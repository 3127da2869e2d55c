//! ui::output
//!
//! User-facing messages on stderr.
//!
//! # Design
//!
//! stdout carries only the summary so it can be piped into a PR body.
//! Warnings and errors go to stderr. Warnings respect `--quiet`; errors are
//! always shown. Diagnostic detail goes through `tracing` instead (see
//! [`crate::logging`]).

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - errors and warnings
    Normal,
}

impl Verbosity {
    /// Create verbosity from the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// Format a warning line.
pub fn format_warning(message: impl Display) -> String {
    format!("warning: {}", message)
}

/// Format an error line.
pub fn format_error(message: impl Display) -> String {
    format!("error: {}", message)
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("{}", format_error(message));
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("{}", format_warning(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_quiet() {
        assert_eq!(Verbosity::from_quiet(false), Verbosity::Normal);
        assert_eq!(Verbosity::from_quiet(true), Verbosity::Quiet);
    }

    #[test]
    fn message_prefixes() {
        assert_eq!(format_warning("careful"), "warning: careful");
        assert_eq!(format_error("broken"), "error: broken");
    }
}
