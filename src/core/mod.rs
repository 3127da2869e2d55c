//! core
//!
//! Core domain types.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Oid, RefName
//! - [`naming`] - Branch token normalization

pub mod naming;
pub mod types;
