//! Engine Module
//!
//! The coordinating type tying the roster to its backing file.
//!
//! ## Responsibilities
//! - Load the roster from storage once at startup
//! - Expose the full operation set to the presentation layer
//! - Persist the whole roster after every mutation (write-through)

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::record::StudentRecord;
use crate::roster::{Roster, Statistics};
use crate::storage::FlatFileStore;

/// The main gradebook engine
///
/// ## Persistence model
///
/// Write-through, whole-file: every mutating call (`add`/`update`/`delete`/
/// `sort_by_percentage`) rewrites the backing file after the in-memory
/// mutation succeeds. A failed save is non-fatal — it is logged as a warning
/// and the in-memory roster stays authoritative for the rest of the session;
/// only durability is at risk until the next successful save.
///
/// Single-threaded by design: one user, one process, no locking.
pub struct Gradebook {
    /// Engine configuration
    config: Config,

    /// In-memory record collection
    roster: Roster,

    /// Flat-file persistence adapter
    store: FlatFileStore,
}

impl Gradebook {
    /// Open a gradebook with the given config
    ///
    /// Loads the data file if it exists; an absent file starts an empty
    /// roster. Malformed lines are skipped during the load, never fatal.
    pub fn open(config: Config) -> Result<Self> {
        let store = FlatFileStore::new(&config.data_file);
        let records = store.load()?;
        let roster = Roster::from_records(records);

        tracing::info!(
            count = roster.len(),
            path = %config.data_file.display(),
            "gradebook opened"
        );

        Ok(Self {
            config,
            roster,
            store,
        })
    }

    /// Open with a data file path (convenience method)
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_file(path).build();
        Self::open(config)
    }

    // =========================================================================
    // Mutations (write-through)
    // =========================================================================

    /// Add a new student record
    ///
    /// Errors: `DuplicateId`, `OutOfRange`, `InvalidInput`.
    pub fn add(
        &mut self,
        id: &str,
        name: &str,
        coursework: [u32; 3],
        exam: u32,
    ) -> Result<StudentRecord> {
        let record = self.roster.add(id, name, coursework, exam)?.clone();
        self.persist();
        Ok(record)
    }

    /// Replace an existing student's marks
    ///
    /// Errors: `NotFound`, `OutOfRange`.
    pub fn update(&mut self, id: &str, coursework: [u32; 3], exam: u32) -> Result<StudentRecord> {
        let record = self.roster.update(id, coursework, exam)?.clone();
        self.persist();
        Ok(record)
    }

    /// Delete a student record, returning it
    ///
    /// Errors: `NotFound`.
    pub fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        let record = self.roster.delete(id)?;
        self.persist();
        Ok(record)
    }

    /// Stable sort of the roster by percentage
    ///
    /// The new order is part of the stored state, so this persists too.
    pub fn sort_by_percentage(&mut self, descending: bool) {
        self.roster.sort_by_percentage(descending);
        self.persist();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up a record by exact ID
    ///
    /// Errors: `NotFound`.
    pub fn find(&self, id: &str) -> Result<&StudentRecord> {
        self.roster
            .find_by_id(id)
            .ok_or_else(|| crate::MarkbookError::NotFound(id.to_string()))
    }

    /// Search by name (case-insensitive) or ID (case-sensitive) substring
    pub fn search(&self, term: &str) -> Vec<&StudentRecord> {
        self.roster.search(term)
    }

    /// Highest-percentage record (first wins on ties)
    pub fn highest(&self) -> Result<&StudentRecord> {
        self.roster.highest()
    }

    /// Lowest-percentage record (first wins on ties)
    pub fn lowest(&self) -> Result<&StudentRecord> {
        self.roster.lowest()
    }

    /// Class statistics over the whole roster
    pub fn statistics(&self) -> Result<Statistics> {
        self.roster.statistics()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save the full roster now, surfacing any I/O failure
    pub fn save(&self) -> Result<()> {
        self.store.save(self.roster.records())
    }

    /// Write-through save after a successful mutation
    ///
    /// A failure here is non-fatal: the in-memory roster is the source of
    /// truth until the next successful save.
    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(
                error = %e,
                path = %self.config.data_file.display(),
                "save failed; in-memory records remain authoritative"
            );
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The underlying roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The data file path
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// The configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
