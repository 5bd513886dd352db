//! Grade derivation
//!
//! The single pure function mapping input marks to derived totals and the
//! letter grade. Nothing else in the crate computes these values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::OVERALL_MAX;

/// Letter grade bands
///
/// Thresholds are evaluated against the overall percentage, inclusive on the
/// lower end of each band: ≥70 A, ≥60 B, ≥50 C, ≥40 D, else F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a percentage to its grade band
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            Grade::A
        } else if percentage >= 60.0 {
            Grade::B
        } else if percentage >= 50.0 {
            Grade::C
        } else if percentage >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// The letter as a char
    pub fn letter(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The four derived fields of a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub coursework_total: u32,
    pub overall: u32,
    pub percentage: f64,
    pub grade: Grade,
}

/// Compute all derived fields from the input marks
///
/// Pure function; assumes marks are already range-validated. The percentage
/// is kept at full `f64` precision (rounding is a display concern).
pub fn derive(coursework: [u32; 3], exam: u32) -> Derived {
    let coursework_total: u32 = coursework.iter().sum();
    let overall = coursework_total + exam;
    let percentage = f64::from(overall) / f64::from(OVERALL_MAX) * 100.0;
    let grade = Grade::from_percentage(percentage);

    Derived {
        coursework_total,
        overall,
        percentage,
        grade,
    }
}
