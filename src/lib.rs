//! # Markbook
//!
//! A student mark roster with:
//! - Fixed-shape records (coursework triple + exam) and derived grading
//! - In-memory CRUD, search, sort, and class statistics
//! - Line-oriented flat-file persistence with write-through saves
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                Presentation Layer (CLI)                      │
//! │           (prompting, display formatting)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Gradebook                                │
//! │        (operation set + write-through persistence)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌───────────────┐
//!   │   Roster    │          │ FlatFileStore │
//!   │ (in-memory) │          │  (file I/O)   │
//!   └─────────────┘          └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod roster;
pub mod storage;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MarkbookError, Result};
pub use config::Config;
pub use engine::Gradebook;
pub use record::{Grade, StudentRecord};
pub use roster::{Roster, Statistics};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Markbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
