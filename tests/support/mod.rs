//! Shared fixture for tests against real git repositories.

#![allow(dead_code)]

use std::cell::Cell;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// A throwaway repository driven through the git CLI.
///
/// Commits get strictly increasing committer dates so history order is
/// deterministic even when the test runs within one second.
pub struct TestRepo {
    dir: TempDir,
    clock: Cell<i64>,
}

impl TestRepo {
    /// Create an empty repository whose unborn branch is `main`.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let repo = Self {
            dir,
            clock: Cell::new(1_700_000_000),
        };

        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Path to the work tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path to the `.git` directory.
    pub fn git_dir(&self) -> std::path::PathBuf {
        self.dir.path().join(".git")
    }

    /// Commit a change to `file` on the current branch and return its OID.
    pub fn commit(&self, file: &str, message: &str) -> String {
        let path = self.path().join(file);
        let mut contents = std::fs::read_to_string(&path).unwrap_or_default();
        contents.push_str(message);
        contents.push('\n');
        std::fs::write(&path, contents).unwrap();
        self.git(&["add", file]);
        self.git_dated(&["commit", "-q", "-m", message]);
        self.rev_parse("HEAD")
    }

    /// Commit a new file with a message given as raw bytes, which need not
    /// be UTF-8.
    pub fn commit_raw_message(&self, file: &str, message: &[u8]) -> String {
        std::fs::write(self.path().join(file), file).unwrap();
        self.git(&["add", file]);
        let message_file = self.git_dir().join("RAW_COMMIT_MSG");
        std::fs::write(&message_file, message).unwrap();
        let message_path = message_file.to_string_lossy().into_owned();
        // Declaring a non-UTF-8 encoding stops git from re-encoding the
        // message as Latin-1 -> UTF-8, so the bytes are stored as given.
        self.git_dated(&[
            "-c",
            "i18n.commitEncoding=ISO-8859-1",
            "commit",
            "-q",
            "--cleanup=verbatim",
            "-F",
            &message_path,
        ]);
        self.rev_parse("HEAD")
    }

    /// Create `name` at HEAD without switching to it.
    pub fn branch(&self, name: &str) {
        self.git(&["branch", name]);
    }

    /// Switch to an existing branch.
    pub fn checkout(&self, name: &str) {
        self.git(&["checkout", "-q", name]);
    }

    /// Create and switch to a branch with no history.
    pub fn orphan(&self, name: &str) {
        self.git(&["checkout", "-q", "--orphan", name]);
        self.git(&["rm", "-rfq", "."]);
    }

    /// Merge `branch` into the current branch with a merge commit.
    pub fn merge(&self, branch: &str, message: &str) -> String {
        self.git_dated(&["merge", "-q", "--no-ff", "-m", message, branch]);
        self.rev_parse("HEAD")
    }

    /// Resolve a revision with the git CLI.
    pub fn rev_parse(&self, rev: &str) -> String {
        let output = Command::new("git")
            .args(["rev-parse", rev])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// Run a git command in the repository, panicking on failure.
    pub fn git(&self, args: &[&str]) {
        run_git(self.path(), args, &[]);
    }

    fn git_dated(&self, args: &[&str]) {
        let now = self.clock.get() + 60;
        self.clock.set(now);
        let date = format!("@{now} +0000");
        run_git(
            self.path(),
            args,
            &[("GIT_AUTHOR_DATE", &date), ("GIT_COMMITTER_DATE", &date)],
        );
    }
}

fn run_git(dir: &Path, args: &[&str], env: &[(&str, &str)]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .envs(env.iter().copied())
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
