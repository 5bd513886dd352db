//! Roster Module
//!
//! The in-memory ordered collection of student records.
//!
//! ## Responsibilities
//! - Own all CRUD, lookup, search, and sort operations
//! - Enforce ID uniqueness and mark ranges on every mutation
//! - Keep insertion order; deletes never reorder survivors
//! - Compute class statistics over the current records
//!
//! No I/O happens here. Persistence is the storage module's job, wired in by
//! the engine. The whole collection lives in memory and is mutated by exactly
//! one caller at a time (single-user, single-process tool), so there is no
//! internal locking.

mod stats;

pub use stats::Statistics;

use crate::error::{MarkbookError, Result};
use crate::record::StudentRecord;

/// Ordered collection of student records
///
/// Records keep their insertion order until an explicit sort. Every mutation
/// validates fully before committing, so the collection never holds a record
/// violating the mark-range or unique-ID invariants.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from already-validated records (e.g. a file load)
    ///
    /// A record whose ID duplicates an earlier one is dropped with a warning;
    /// the first occurrence wins.
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        let mut roster = Self::new();
        for record in records {
            if roster.find_by_id(&record.id).is_some() {
                tracing::warn!(id = %record.id, "dropping record with duplicate ID");
                continue;
            }
            roster.records.push(record);
        }
        roster
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a new record at the end of the collection
    ///
    /// Errors: `DuplicateId`, `OutOfRange`, `InvalidInput`. On error the
    /// collection is unchanged (count, contents, and order).
    pub fn add(
        &mut self,
        id: &str,
        name: &str,
        coursework: [u32; 3],
        exam: u32,
    ) -> Result<&StudentRecord> {
        if self.find_by_id(id).is_some() {
            return Err(MarkbookError::DuplicateId(id.to_string()));
        }

        let record = StudentRecord::new(id, name, coursework, exam)?;
        self.records.push(record);

        // Just pushed, so last() is the new record
        Ok(self.records.last().unwrap())
    }

    /// Replace the marks of an existing record in place
    ///
    /// `id` and `name` are preserved; all derived fields are recomputed.
    /// Errors: `NotFound`, `OutOfRange`.
    pub fn update(&mut self, id: &str, coursework: [u32; 3], exam: u32) -> Result<&StudentRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| MarkbookError::NotFound(id.to_string()))?;

        self.records[index].set_marks(coursework, exam)?;
        Ok(&self.records[index])
    }

    /// Remove a record, preserving the relative order of the rest
    ///
    /// Returns the removed record. Errors: `NotFound`.
    pub fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| MarkbookError::NotFound(id.to_string()))?;

        Ok(self.records.remove(index))
    }

    /// Stable sort of the whole collection by percentage
    ///
    /// Records with equal percentage keep their prior relative order in both
    /// directions.
    pub fn sort_by_percentage(&mut self, descending: bool) {
        if descending {
            self.records
                .sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        } else {
            self.records
                .sort_by(|a, b| a.percentage.total_cmp(&b.percentage));
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up a record by exact (case-sensitive) ID
    pub fn find_by_id(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Find records whose name or ID contains `term`
    ///
    /// Name matching is a case-insensitive substring test; ID matching is a
    /// case-sensitive substring test. The asymmetry is deliberate and matches
    /// the established lookup behavior. Results come back in collection
    /// order; no match is an empty vec, not an error.
    pub fn search(&self, term: &str) -> Vec<&StudentRecord> {
        let term_lower = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&term_lower) || r.id.contains(term))
            .collect()
    }

    /// The record with the highest percentage
    ///
    /// On ties the first record in current collection order wins.
    /// Errors: `EmptyRoster`.
    pub fn highest(&self) -> Result<&StudentRecord> {
        let mut iter = self.records.iter();
        let mut best = iter.next().ok_or(MarkbookError::EmptyRoster)?;
        for record in iter {
            if record.percentage > best.percentage {
                best = record;
            }
        }
        Ok(best)
    }

    /// The record with the lowest percentage (first wins on ties)
    ///
    /// Errors: `EmptyRoster`.
    pub fn lowest(&self) -> Result<&StudentRecord> {
        let mut iter = self.records.iter();
        let mut worst = iter.next().ok_or(MarkbookError::EmptyRoster)?;
        for record in iter {
            if record.percentage < worst.percentage {
                worst = record;
            }
        }
        Ok(worst)
    }

    /// Class-wide statistics over all records
    ///
    /// Errors: `EmptyRoster`.
    pub fn statistics(&self) -> Result<Statistics> {
        if self.records.is_empty() {
            return Err(MarkbookError::EmptyRoster);
        }
        Ok(stats::compute(&self.records))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All records in current collection order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Iterate over records in current collection order
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
