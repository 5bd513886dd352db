//! Storage Module
//!
//! Persistence adapter for the roster.
//!
//! ## Responsibilities
//! - Round-trip the four input fields of every record through a flat file
//! - Tolerate a missing file (start empty) and malformed lines (skip them)
//! - Rewrite the whole file on save; there is no append path
//!
//! Derived fields are never written and never trusted from storage; they are
//! recomputed as each line is parsed.

mod flatfile;

pub use flatfile::FlatFileStore;
