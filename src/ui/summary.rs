//! ui::summary
//!
//! Rendering of the commit summary for PR descriptions.
//!
//! # Example Output
//!
//! ```markdown
//! ## Commit Summary
//!
//! - *3f2a9c0d6e1b4a7c8d9e0f1a2b3c4d5e6f7a8b9c* Add retry to fetch
//!
//! - *9b8a7c6d5e4f3a2b1c0d9e8f7a6b5c4d3e2f1a0b* Extract HTTP client
//!
//! ```
//!
//! Messages are written byte for byte, with no escaping or truncation. Git
//! stores messages with a trailing newline, so bullets end up separated by a
//! blank line and a multi-line message continues on the following lines.

use std::io::{self, Write};

use crate::git::Commit;

/// Header written above the bullets.
pub const HEADER: &str = "## Commit Summary";

/// Write one commit as `- *<oid>* <message>` followed by a newline.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use git_summarize_branch::core::types::Oid;
/// use git_summarize_branch::git::Commit;
/// use git_summarize_branch::ui::summary::write_bullet;
///
/// let oid = Oid::new("abc123def4567890abc123def4567890abc12345").unwrap();
/// let commit = Commit::new(oid, "Fix typo\n", vec![], Utc::now());
/// let mut out = Vec::new();
/// write_bullet(&mut out, &commit).unwrap();
/// assert_eq!(out, b"- *abc123def4567890abc123def4567890abc12345* Fix typo\n\n");
/// ```
pub fn write_bullet<W: Write + ?Sized>(out: &mut W, commit: &Commit) -> io::Result<()> {
    write!(out, "- *{}* ", commit.oid)?;
    out.write_all(&commit.message)?;
    out.write_all(b"\n")
}

/// Streams a summary to a writer.
///
/// The header goes out on construction so that output appears as soon as
/// the walk yields its first commit.
pub struct SummaryEmitter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> SummaryEmitter<W> {
    /// Write the header and a blank line.
    pub fn start(mut out: W) -> io::Result<Self> {
        writeln!(out, "{HEADER}")?;
        writeln!(out)?;
        Ok(Self { out, written: 0 })
    }

    /// Write one commit bullet.
    pub fn commit(&mut self, commit: &Commit) -> io::Result<()> {
        write_bullet(&mut self.out, commit)?;
        self.written += 1;
        Ok(())
    }

    /// Number of bullets written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
