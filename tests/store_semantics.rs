#[path = "../src/store.rs"]
mod store;

use store::{AddError, AttendanceStore, DEMO_STUDENTS};

#[test]
fn add_trims_and_preserves_original_casing() {
    let mut roster = AttendanceStore::new();
    let record = roster.add("  Bob WILSON  ").expect("add");
    assert_eq!(record.name, "Bob WILSON");
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.all()[0].name, "Bob WILSON");
    assert!(!record.time.is_empty());
    assert!(record.timestamp > 0);
}

#[test]
fn blank_input_is_rejected_without_mutation() {
    let mut roster = AttendanceStore::new();
    assert_eq!(roster.add("   "), Err(AddError::EmptyName));
    assert_eq!(roster.add(""), Err(AddError::EmptyName));
    assert!(roster.is_empty());
}

#[test]
fn duplicate_names_compare_case_insensitively() {
    let mut roster = AttendanceStore::new();
    let first = roster.add("Alice").expect("first add");
    let err = roster.add("alice").expect_err("duplicate must fail");
    assert_eq!(
        err,
        AddError::AlreadyPresent {
            name: "alice".to_string()
        }
    );
    assert_eq!(roster.len(), 1);
    // The first record is untouched by the rejected second call.
    assert_eq!(roster.all()[0].name, "Alice");
    assert_eq!(roster.all()[0].time, first.time);
    assert_eq!(roster.all()[0].timestamp, first.timestamp);
}

#[test]
fn iteration_order_tracks_insertion_and_survives_removal() {
    let mut roster = AttendanceStore::new();
    for name in ["One", "Two", "Three", "Four"] {
        roster.add(name).expect("add");
    }
    assert_eq!(roster.remove_at(1).as_deref(), Some("Two"));
    let names: Vec<&str> = roster.all().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["One", "Three", "Four"]);
}

#[test]
fn out_of_range_removal_is_a_noop() {
    let mut roster = AttendanceStore::new();
    roster.add("Only One").expect("add");
    let before: Vec<String> = roster.all().iter().map(|r| r.name.clone()).collect();

    assert_eq!(roster.remove_at(1), None);
    assert_eq!(roster.remove_at(usize::MAX), None);

    let after: Vec<String> = roster.all().iter().map(|r| r.name.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(roster.len(), 1);
}

#[test]
fn clear_empties_the_roster() {
    let mut roster = AttendanceStore::new();
    roster.add("A").expect("add");
    roster.add("B").expect("add");
    roster.clear();
    assert!(roster.is_empty());
    assert_eq!(roster.len(), 0);
}

#[test]
fn add_many_demo_roster_twice_adds_five_then_zero() {
    let mut roster = AttendanceStore::new();
    assert_eq!(roster.add_many(DEMO_STUDENTS), 5);
    assert_eq!(roster.add_many(DEMO_STUDENTS), 0);
    assert_eq!(roster.len(), 5);
    let names: Vec<&str> = roster.all().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, DEMO_STUDENTS);
}

#[test]
fn add_many_skips_duplicates_and_blanks_silently() {
    let mut roster = AttendanceStore::new();
    roster.add("Alice Johnson").expect("seed");
    let added = roster.add_many(["alice johnson", "", "  ", "New Kid"]);
    assert_eq!(added, 1);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.all()[1].name, "New Kid");
}
