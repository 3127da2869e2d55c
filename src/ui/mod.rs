//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Warnings and errors on stderr
//! - [`summary`] - Commit summary rendering for PR descriptions

pub mod output;
pub mod summary;
