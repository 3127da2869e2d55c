//! summarize command - Write the commit summary of a branch to stdout

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::debug;

use super::Context;
use crate::git::Git;
use crate::summary::{self, SummaryRequest};
use crate::ui::output;

/// Summarize `head` (or the checked-out branch) against `base` (or the
/// first existing branch among develop, main and master).
///
/// A base that is not an ancestor of head still produces a summary of the
/// full history; a warning says so unless `--quiet` is set.
pub fn summarize(ctx: &Context, head: Option<&str>, base: Option<&str>) -> Result<()> {
    let git = match &ctx.repo {
        Some(path) => Git::open_at(path),
        None => Git::open(Path::new(".")),
    }
    .context("failed to open repository")?;

    let request = SummaryRequest {
        head,
        base,
        ..SummaryRequest::default()
    };

    let mut out = std::io::stdout().lock();
    let report = summary::summarize(&git, &request, &mut out)?;
    out.flush().context("failed to write summary")?;

    debug!(commits = report.commits, outcome = ?report.outcome, "summary written");

    if report.base_unrelated() {
        output::warn(
            format!(
                "base {} ({}) is not an ancestor of {}; summary lists the full history",
                report.base.name.short_name(),
                report.base.oid.short(7),
                report.head.name.short_name(),
            ),
            ctx.verbosity,
        );
    }

    Ok(())
}
