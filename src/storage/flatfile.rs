//! Flat-file store
//!
//! Line-oriented text format:
//! - Line 1: decimal record count. Informational only — a correct reader
//!   never trusts it over the actual line count.
//! - Lines 2..: one record per line, `id,name,cw1,cw2,cw3,exam`.
//!
//! Known limitation: commas inside `name` are not escaped, so such a name
//! corrupts its own line on reload (the line is then skipped as malformed).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::StudentRecord;

/// Minimum comma-separated fields per record line
const FIELDS_PER_LINE: usize = 6;

/// Persists the roster to a single flat file
///
/// The file is rewritten wholesale on every save. The rewrite goes through a
/// temp file and rename, so a failed write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all records from the backing file
    ///
    /// - Absent file: returns an empty vec, not an error.
    /// - Malformed line (fewer than 6 fields, non-integer mark, or a mark
    ///   outside its range): skipped with a warning, never fatal.
    ///
    /// Every returned record has its derived fields freshly recomputed.
    pub fn load(&self) -> Result<Vec<StudentRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();

        // Skip the count header and read every remaining line regardless of
        // what the header claimed.
        for (line_no, line) in contents.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    tracing::warn!(line = line_no + 1, %reason, "skipping malformed record line");
                }
            }
        }

        tracing::debug!(count = records.len(), path = %self.path.display(), "loaded records");
        Ok(records)
    }

    /// Rewrite the backing file with the full record set
    ///
    /// Errors: `Io` if the write cannot complete; the previous file contents
    /// survive a failed save.
    pub fn save(&self, records: &[StudentRecord]) -> Result<()> {
        let mut contents = String::new();
        contents.push_str(&records.len().to_string());
        contents.push('\n');
        for record in records {
            contents.push_str(&format_line(record));
            contents.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(count = records.len(), path = %self.path.display(), "saved records");
        Ok(())
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// =============================================================================
// Line Codec
// =============================================================================

/// Parse one record line, recomputing derived fields
///
/// Extra trailing fields are ignored (only the first 6 are read). Marks
/// tolerate surrounding whitespace.
fn parse_line(line: &str) -> std::result::Result<StudentRecord, String> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < FIELDS_PER_LINE {
        return Err(format!(
            "expected {} fields, got {}",
            FIELDS_PER_LINE,
            parts.len()
        ));
    }

    let mut marks = [0u32; 4];
    for (slot, raw) in marks.iter_mut().zip(&parts[2..FIELDS_PER_LINE]) {
        *slot = raw
            .trim()
            .parse()
            .map_err(|_| format!("non-integer mark '{}'", raw.trim()))?;
    }

    // Out-of-range marks are rejected here too, so the roster never holds a
    // record violating its invariants.
    StudentRecord::new(parts[0], parts[1], [marks[0], marks[1], marks[2]], marks[3])
        .map_err(|e| e.to_string())
}

/// Serialize one record's input fields
fn format_line(record: &StudentRecord) -> String {
    format!(
        "{},{},{},{},{},{}",
        record.id,
        record.name,
        record.coursework[0],
        record.coursework[1],
        record.coursework[2],
        record.exam
    )
}
