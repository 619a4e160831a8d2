// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::index::find_index_by_name;
use crate::types::id::RowIndex;
use crate::types::record::Record;
use std::vec::Vec;

fn sample() -> Vec<Record> {
    vec![
        Record::new("Alice", "a@x.com"),
        Record::new("Bob", "b@x.com"),
        Record::new("Alice", "a2@x.com"),
        Record::new("Carol", "c@x.com"),
    ]
}

#[test]
fn test_first_match_wins_with_duplicates() {
    let records = sample();
    assert_eq!(find_index_by_name(&records, "Alice"), Some(RowIndex(0)));
    assert_eq!(find_index_by_name(&records, "Carol"), Some(RowIndex(3)));
}

#[test]
fn test_smallest_index_property() {
    let records = sample();
    for key in ["Alice", "Bob", "Carol"] {
        let RowIndex(found) = find_index_by_name(&records, key).unwrap();
        assert_eq!(records[found].name, key);
        assert!(records[..found].iter().all(|r| r.name != key));
    }
}

#[test]
fn test_missing_key() {
    let records = sample();
    assert_eq!(find_index_by_name(&records, "Dave"), None);
    assert_eq!(find_index_by_name(&records, "alice"), None);
    assert_eq!(find_index_by_name(&[], "Alice"), None);
}

#[test]
fn test_matches_name_column_only() {
    let records = vec![Record::new("Alice", "Bob")];
    assert_eq!(find_index_by_name(&records, "Bob"), None);
}
