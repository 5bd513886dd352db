//! Student Record Model
//!
//! Fixed-shape record for one student's marks.
//!
//! ## Responsibilities
//! - Hold the four input fields (id, name, coursework triple, exam mark)
//! - Hold the four derived fields, always consistent with the inputs
//! - Validate mark ranges before any field is committed
//! - Route all derivation through one pure function (see `grading`)

mod grading;

pub use grading::{derive, Derived, Grade};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MarkbookError, Result};

/// Maximum mark for a single coursework component
pub const COURSEWORK_MAX: u32 = 20;

/// Maximum exam mark
pub const EXAM_MAX: u32 = 100;

/// Maximum overall mark (3 × coursework + exam)
pub const OVERALL_MAX: u32 = 3 * COURSEWORK_MAX + EXAM_MAX;

/// Identifies which mark field failed range validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkField {
    Coursework1,
    Coursework2,
    Coursework3,
    Exam,
}

impl MarkField {
    /// Upper bound for this field (lower bound is always 0)
    pub fn max(&self) -> u32 {
        match self {
            MarkField::Exam => EXAM_MAX,
            _ => COURSEWORK_MAX,
        }
    }
}

impl fmt::Display for MarkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkField::Coursework1 => write!(f, "coursework 1"),
            MarkField::Coursework2 => write!(f, "coursework 2"),
            MarkField::Coursework3 => write!(f, "coursework 3"),
            MarkField::Exam => write!(f, "exam"),
        }
    }
}

/// One student's academic record
///
/// The last four fields are derived and must never be set independently:
/// construction and `set_marks` are the only paths that touch them, and both
/// recompute via [`derive`]. Derived fields are never read back from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Opaque unique identifier (case-sensitive, immutable after creation)
    pub id: String,

    /// Display name (no distinct rename operation)
    pub name: String,

    /// Three coursework marks, each 0–20
    pub coursework: [u32; 3],

    /// Exam mark, 0–100
    pub exam: u32,

    /// Sum of the coursework marks (0–60)
    pub coursework_total: u32,

    /// Coursework total plus exam (0–160)
    pub overall: u32,

    /// Overall mark as a percentage of 160 (not rounded)
    pub percentage: f64,

    /// Letter grade derived from the percentage
    pub grade: Grade,
}

impl StudentRecord {
    /// Create a validated record with all derived fields computed
    ///
    /// Errors:
    /// - `InvalidInput` if `id` or `name` is empty
    /// - `OutOfRange` if any mark violates its bound
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coursework: [u32; 3],
        exam: u32,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(MarkbookError::InvalidInput(
                "student ID must not be empty".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(MarkbookError::InvalidInput(
                "student name must not be empty".to_string(),
            ));
        }

        validate_marks(coursework, exam)?;
        let derived = derive(coursework, exam);

        Ok(Self {
            id,
            name,
            coursework,
            exam,
            coursework_total: derived.coursework_total,
            overall: derived.overall,
            percentage: derived.percentage,
            grade: derived.grade,
        })
    }

    /// Replace the input marks and recompute every derived field
    ///
    /// Validates all four marks before committing any of them; `id` and
    /// `name` are untouched.
    pub fn set_marks(&mut self, coursework: [u32; 3], exam: u32) -> Result<()> {
        validate_marks(coursework, exam)?;
        let derived = derive(coursework, exam);

        self.coursework = coursework;
        self.exam = exam;
        self.coursework_total = derived.coursework_total;
        self.overall = derived.overall;
        self.percentage = derived.percentage;
        self.grade = derived.grade;

        Ok(())
    }
}

/// Check every mark against its declared range
///
/// Validate-all-then-commit: callers must not apply any mark until this
/// returns `Ok`.
pub fn validate_marks(coursework: [u32; 3], exam: u32) -> Result<()> {
    const CW_FIELDS: [MarkField; 3] = [
        MarkField::Coursework1,
        MarkField::Coursework2,
        MarkField::Coursework3,
    ];

    for (mark, field) in coursework.iter().zip(CW_FIELDS) {
        if *mark > COURSEWORK_MAX {
            return Err(MarkbookError::OutOfRange {
                field,
                min: 0,
                max: COURSEWORK_MAX,
                value: *mark,
            });
        }
    }

    if exam > EXAM_MAX {
        return Err(MarkbookError::OutOfRange {
            field: MarkField::Exam,
            min: 0,
            max: EXAM_MAX,
            value: exam,
        });
    }

    Ok(())
}
