//! Tests for the Roster
//!
//! These tests verify:
//! - Add/update/delete invariants (uniqueness, order, no partial commits)
//! - Lookup and search semantics
//! - Stable sorting by percentage
//! - Highest/lowest selection and tie-breaking
//! - Class statistics and the empty-roster case
//!
//! The roster is single-user by design: there is deliberately no concurrent
//! access to simulate here.

use markbook::record::Grade;
use markbook::{MarkbookError, Roster, StudentRecord};

// =============================================================================
// Helper Functions
// =============================================================================

/// Roster with three records at 80%, 60%, and 40% overall
fn setup_scenario_roster() -> Roster {
    let mut roster = Roster::new();
    // overall 128 / 160 = 80%
    roster.add("S001", "Alice", [20, 8, 0], 100).unwrap();
    // overall 96 / 160 = 60%
    roster.add("S002", "Bob", [16, 10, 10], 60).unwrap();
    // overall 64 / 160 = 40%
    roster.add("S003", "Carol", [2, 1, 1], 60).unwrap();
    roster
}

fn ids(records: &[&StudentRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn roster_ids(roster: &Roster) -> Vec<String> {
    roster.iter().map(|r| r.id.clone()).collect()
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_then_find_by_id() {
    let mut roster = Roster::new();
    roster.add("S001", "Alice", [5, 10, 15], 60).unwrap();

    let record = roster.find_by_id("S001").unwrap();
    assert_eq!(record.name, "Alice");
    assert_eq!(record.coursework_total, 30);
    assert_eq!(record.overall, 90);
    assert_eq!(record.percentage, 56.25);
    assert_eq!(record.grade, Grade::C);
}

#[test]
fn test_add_appends_in_insertion_order() {
    let roster = setup_scenario_roster();
    assert_eq!(roster_ids(&roster), vec!["S001", "S002", "S003"]);
}

#[test]
fn test_add_duplicate_id_leaves_roster_unchanged() {
    let mut roster = setup_scenario_roster();
    let before: Vec<StudentRecord> = roster.records().to_vec();

    let err = roster.add("S002", "Mallory", [1, 1, 1], 10).unwrap_err();

    assert!(matches!(err, MarkbookError::DuplicateId(id) if id == "S002"));
    assert_eq!(roster.records(), &before[..]);
}

#[test]
fn test_add_out_of_range_leaves_roster_unchanged() {
    let mut roster = setup_scenario_roster();

    let err = roster.add("S004", "Dave", [5, 5, 5], 101).unwrap_err();

    assert!(matches!(err, MarkbookError::OutOfRange { .. }));
    assert_eq!(roster.len(), 3);
    assert!(roster.find_by_id("S004").is_none());
}

#[test]
fn test_id_match_is_case_sensitive() {
    let mut roster = Roster::new();
    roster.add("abc", "Alice", [5, 5, 5], 50).unwrap();

    // Different case is a different ID
    roster.add("ABC", "Bob", [5, 5, 5], 50).unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.find_by_id("abc").unwrap().name, "Alice");
    assert_eq!(roster.find_by_id("ABC").unwrap().name, "Bob");
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_recomputes_derived_and_preserves_identity() {
    let mut roster = setup_scenario_roster();

    let updated = roster.update("S003", [20, 20, 20], 100).unwrap();

    assert_eq!(updated.id, "S003");
    assert_eq!(updated.name, "Carol");
    assert_eq!(updated.coursework_total, 60);
    assert_eq!(updated.overall, 160);
    assert_eq!(updated.percentage, 100.0);
    assert_eq!(updated.grade, Grade::A);
}

#[test]
fn test_update_missing_id_fails_with_not_found() {
    let mut roster = setup_scenario_roster();

    let err = roster.update("S999", [1, 1, 1], 10).unwrap_err();
    assert!(matches!(err, MarkbookError::NotFound(id) if id == "S999"));
}

#[test]
fn test_update_out_of_range_leaves_record_unchanged() {
    let mut roster = setup_scenario_roster();
    let before = roster.find_by_id("S001").unwrap().clone();

    let err = roster.update("S001", [0, 0, 21], 50).unwrap_err();

    assert!(matches!(err, MarkbookError::OutOfRange { .. }));
    assert_eq!(roster.find_by_id("S001").unwrap(), &before);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_preserves_order_of_survivors() {
    let mut roster = setup_scenario_roster();
    let s1_before = roster.find_by_id("S001").unwrap().clone();
    let s3_before = roster.find_by_id("S003").unwrap().clone();

    let removed = roster.delete("S002").unwrap();

    assert_eq!(removed.id, "S002");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster_ids(&roster), vec!["S001", "S003"]);
    assert_eq!(roster.find_by_id("S001").unwrap(), &s1_before);
    assert_eq!(roster.find_by_id("S003").unwrap(), &s3_before);
}

#[test]
fn test_delete_missing_id_fails_with_not_found() {
    let mut roster = setup_scenario_roster();

    let err = roster.delete("S999").unwrap_err();

    assert!(matches!(err, MarkbookError::NotFound(_)));
    assert_eq!(roster.len(), 3);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_name_is_case_insensitive_substring() {
    let roster = setup_scenario_roster();

    let matches = roster.search("ALICE");
    assert_eq!(ids(&matches), vec!["S001"]);

    let matches = roster.search("o");
    // "Bob" and "Carol" both contain an 'o'
    assert_eq!(ids(&matches), vec!["S002", "S003"]);
}

#[test]
fn test_search_id_is_case_sensitive_substring() {
    let roster = setup_scenario_roster();

    // Substring of every ID
    let matches = roster.search("S00");
    assert_eq!(matches.len(), 3);

    // Lowercase does not match the IDs (and no name contains it)
    let matches = roster.search("s00");
    assert!(matches.is_empty());
}

#[test]
fn test_search_no_match_returns_empty_not_error() {
    let roster = setup_scenario_roster();
    assert!(roster.search("zzz").is_empty());
}

#[test]
fn test_search_returns_collection_order() {
    let mut roster = Roster::new();
    roster.add("X1", "Anna", [5, 5, 5], 50).unwrap();
    roster.add("X2", "Hannah", [5, 5, 5], 50).unwrap();
    roster.add("X3", "Joanna", [5, 5, 5], 50).unwrap();

    let matches = roster.search("ann");
    assert_eq!(ids(&matches), vec!["X1", "X2", "X3"]);
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_ascending_and_descending() {
    let mut roster = setup_scenario_roster();

    roster.sort_by_percentage(false);
    assert_eq!(roster_ids(&roster), vec!["S003", "S002", "S001"]);

    roster.sort_by_percentage(true);
    assert_eq!(roster_ids(&roster), vec!["S001", "S002", "S003"]);
}

#[test]
fn test_sort_is_stable_on_ties() {
    let mut roster = Roster::new();
    // T1/T2/T3 all at the same percentage, L below them
    roster.add("T1", "Alice", [10, 10, 10], 60).unwrap();
    roster.add("L", "Bob", [0, 0, 0], 10).unwrap();
    roster.add("T2", "Carol", [10, 10, 10], 60).unwrap();
    roster.add("T3", "Dave", [10, 10, 10], 60).unwrap();

    roster.sort_by_percentage(true);
    assert_eq!(roster_ids(&roster), vec!["T1", "T2", "T3", "L"]);

    roster.sort_by_percentage(false);
    assert_eq!(roster_ids(&roster), vec!["L", "T1", "T2", "T3"]);
}

// =============================================================================
// Highest / Lowest Tests
// =============================================================================

#[test]
fn test_highest_and_lowest() {
    let roster = setup_scenario_roster();

    assert_eq!(roster.highest().unwrap().id, "S001");
    assert_eq!(roster.lowest().unwrap().id, "S003");
}

#[test]
fn test_highest_tie_first_record_wins() {
    let mut roster = Roster::new();
    roster.add("A", "Alice", [20, 20, 20], 100).unwrap();
    roster.add("B", "Bob", [20, 20, 20], 100).unwrap();
    roster.add("C", "Carol", [0, 0, 0], 0).unwrap();

    assert_eq!(roster.highest().unwrap().id, "A");
}

#[test]
fn test_lowest_tie_first_record_wins() {
    let mut roster = Roster::new();
    roster.add("A", "Alice", [20, 20, 20], 100).unwrap();
    roster.add("B", "Bob", [0, 0, 0], 0).unwrap();
    roster.add("C", "Carol", [0, 0, 0], 0).unwrap();

    assert_eq!(roster.lowest().unwrap().id, "B");
}

#[test]
fn test_highest_on_empty_roster_fails() {
    let roster = Roster::new();

    assert!(matches!(
        roster.highest().unwrap_err(),
        MarkbookError::EmptyRoster
    ));
    assert!(matches!(
        roster.lowest().unwrap_err(),
        MarkbookError::EmptyRoster
    ));
}

// =============================================================================
// Statistics Tests
// =============================================================================

#[test]
fn test_statistics_on_empty_roster_fails() {
    let roster = Roster::new();

    assert!(matches!(
        roster.statistics().unwrap_err(),
        MarkbookError::EmptyRoster
    ));
}

#[test]
fn test_statistics_scenario_80_60_40() {
    let roster = setup_scenario_roster();
    let stats = roster.statistics().unwrap();

    assert_eq!(stats.count, 3);
    assert_eq!(stats.average, 60.0);
    assert_eq!(stats.max, 80.0);
    assert_eq!(stats.min, 40.0);

    assert_eq!(stats.grade_counts.get(&Grade::A), Some(&1));
    assert_eq!(stats.grade_counts.get(&Grade::B), Some(&1));
    assert_eq!(stats.grade_counts.get(&Grade::D), Some(&1));
    // Only grades that occur appear as keys
    assert_eq!(stats.grade_counts.get(&Grade::C), None);
    assert_eq!(stats.grade_counts.get(&Grade::F), None);
}

#[test]
fn test_statistics_single_record() {
    let mut roster = Roster::new();
    roster.add("S001", "Alice", [5, 10, 15], 60).unwrap();

    let stats = roster.statistics().unwrap();

    assert_eq!(stats.count, 1);
    assert_eq!(stats.average, 56.25);
    assert_eq!(stats.max, 56.25);
    assert_eq!(stats.min, 56.25);
    assert_eq!(stats.grade_counts.get(&Grade::C), Some(&1));
}

// =============================================================================
// Load Construction Tests
// =============================================================================

#[test]
fn test_from_records_drops_duplicate_ids_first_wins() {
    let records = vec![
        StudentRecord::new("S001", "Alice", [5, 5, 5], 50).unwrap(),
        StudentRecord::new("S002", "Bob", [6, 6, 6], 60).unwrap(),
        StudentRecord::new("S001", "Impostor", [1, 1, 1], 10).unwrap(),
    ];

    let roster = Roster::from_records(records);

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.find_by_id("S001").unwrap().name, "Alice");
}
