//! Region Module Tests
//!
//! Validates the local storage mechanics and index maintenance.
//!
//! *Note: network-facing behavior (the HTTP handlers and client retries)
//! is exercised against a running server; unit tests here focus on the
//! region and index data structures.*

use crate::model::Customer;
use crate::region::index::NameIndex;
use crate::region::memory::Region;

#[test]
fn test_region_put_and_get_roundtrip() {
    let region: Region<u64, Customer> = Region::new("customers");

    let jon_doe = Customer::new_customer(1, "Jon Doe");
    region.put(1, jon_doe.clone());

    let retrieved = region.get(&1);

    assert!(retrieved.is_some());
    assert_eq!(retrieved.unwrap(), jon_doe);
}

#[test]
fn test_region_get_nonexistent_key() {
    let region: Region<u64, Customer> = Region::new("customers");

    assert!(region.get(&99).is_none());
}

#[test]
fn test_region_count_tracks_saves() {
    let region: Region<u64, Customer> = Region::new("customers");

    assert_eq!(region.len(), 0);
    assert!(region.is_empty());

    region.put(1, Customer::new_customer(1, "Jon Doe"));

    assert_eq!(region.len(), 1);
    assert!(!region.is_empty());
}

#[test]
fn test_region_overwrite_returns_previous_value() {
    let region: Region<u64, Customer> = Region::new("customers");

    let original = Customer::new_customer(1, "Jon Doe");
    let updated = Customer::new_customer(1, "Jon Q. Doe");

    assert!(region.put(1, original.clone()).is_none());

    let previous = region.put(1, updated.clone());
    assert_eq!(previous, Some(original));

    assert_eq!(region.get(&1), Some(updated));
    assert_eq!(region.len(), 1);
}

#[test]
fn test_region_multiple_keys() {
    let region: Region<u64, Customer> = Region::new("customers");

    for id in 0..100u64 {
        region.put(id, Customer::new_customer(id, &format!("Customer {}", id)));
    }

    for id in 0..100u64 {
        let retrieved = region.get(&id);
        assert!(retrieved.is_some(), "Customer {} should exist", id);
        assert_eq!(retrieved.unwrap().name(), format!("Customer {}", id));
    }
    assert_eq!(region.len(), 100);
}

#[test]
fn test_region_remove() {
    let region: Region<u64, Customer> = Region::new("customers");

    let jon_doe = Customer::new_customer(1, "Jon Doe");
    region.put(1, jon_doe.clone());

    assert_eq!(region.remove(&1), Some(jon_doe));
    assert!(region.get(&1).is_none());
    assert!(region.is_empty());
}

#[test]
fn test_region_put_with_op_deduplicates() {
    let region: Region<u64, Customer> = Region::new("customers");

    let first = Customer::new_customer(1, "Jon Doe");
    let second = Customer::new_customer(1, "Someone Else");

    // First write with this op id applies.
    let outcome = region.put_with_op("op-1", 1, first.clone());
    assert_eq!(outcome, Some(None));

    // Retried request with the same op id must not apply.
    let outcome = region.put_with_op("op-1", 1, second.clone());
    assert!(outcome.is_none());
    assert_eq!(region.get(&1), Some(first.clone()));

    // A fresh op id applies and reports the previous value.
    let outcome = region.put_with_op("op-2", 1, second.clone());
    assert_eq!(outcome, Some(Some(first)));
    assert_eq!(region.get(&1), Some(second));
}

#[test]
fn test_region_entries_snapshot() {
    let region: Region<u64, Customer> = Region::new("customers");

    region.put(1, Customer::new_customer(1, "Jon Doe"));
    region.put(2, Customer::new_customer(2, "Jane Doe"));

    let mut entries = region.entries();
    entries.sort_by_key(|(key, _)| *key);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].1.name(), "Jon Doe");
    assert_eq!(entries[1].1.name(), "Jane Doe");
}

#[test]
fn test_index_insert_and_lookup() {
    let index = NameIndex::new();

    index.insert("Jon Doe", 1);
    index.insert("Jon Doe", 2);
    index.insert("Jane Doe", 3);

    let mut ids = index.ids_for("Jon Doe");
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);

    assert_eq!(index.ids_for("Jane Doe"), vec![3]);
    assert_eq!(index.indexed_name_count(), 2);
}

#[test]
fn test_index_insert_is_idempotent() {
    let index = NameIndex::new();

    index.insert("Jon Doe", 1);
    index.insert("Jon Doe", 1);

    assert_eq!(index.ids_for("Jon Doe"), vec![1]);
}

#[test]
fn test_index_remove_drops_empty_names() {
    let index = NameIndex::new();

    index.insert("Jon Doe", 1);
    index.remove("Jon Doe", 1);

    assert!(index.ids_for("Jon Doe").is_empty());
    assert_eq!(index.indexed_name_count(), 0);

    // Removing an id that was never indexed is a no-op.
    index.remove("Jane Doe", 9);
    assert_eq!(index.indexed_name_count(), 0);
}

#[test]
fn test_index_names_lists_indexed_names() {
    let index = NameIndex::new();

    index.insert("Jon Doe", 1);
    index.insert("Jane Doe", 2);

    let mut names = index.names();
    names.sort();
    assert_eq!(names, vec!["Jane Doe", "Jon Doe"]);
}
