//! Integration test: element ownership across shifts and reallocations.
//!
//! Uses [`DropTracker`] to confirm each element is dropped exactly once:
//! on `delete`, on `set` (the replaced value), when the array is dropped,
//! and never by growth, shrinking or shifting.

use larray::DynamicArray;
use larray_test_utils::fixtures::{DropTracker, Tracked};

fn tracked_array(tracker: &DropTracker, n: u32) -> DynamicArray<Tracked> {
    (0..n).map(|id| tracker.track(id)).collect()
}

#[test]
fn growth_does_not_drop_elements() {
    let tracker = DropTracker::new();
    let a = tracked_array(&tracker, 33);
    assert_eq!(a.capacity(), 64);
    assert_eq!(tracker.drops(), 0);
    drop(a);
    assert_eq!(tracker.drops(), 33);
}

#[test]
fn delete_drops_only_the_removed_element() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 8);
    a.delete(3).unwrap();
    assert_eq!(tracker.drops(), 1);
    let ids: Vec<u32> = a.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 4, 5, 6, 7]);
}

#[test]
fn shrinking_moves_without_dropping() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 16);
    let mut popped = Vec::new();
    while a.len() > 1 {
        popped.push(a.pop_at(0).unwrap());
    }
    assert!(a.stats().shrink_events > 0);
    assert_eq!(tracker.drops(), 0);
    drop(popped);
    assert_eq!(tracker.drops(), 15);
    drop(a);
    assert_eq!(tracker.drops(), 16);
}

#[test]
fn set_returns_old_value_to_caller() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 3);
    let old = a.set(1, tracker.track(99)).unwrap();
    assert_eq!(old.id, 1);
    assert_eq!(tracker.drops(), 0);
    drop(old);
    assert_eq!(tracker.drops(), 1);
}

#[test]
fn failed_set_drops_the_rejected_value() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 2);
    assert!(a.set(5, tracker.track(50)).is_err());
    assert_eq!(tracker.drops(), 1);
    assert_eq!(a.len(), 2);
}

#[test]
fn insert_shifts_without_dropping() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 4);
    a.insert(0, tracker.track(10));
    a.insert(2, tracker.track(11));
    assert_eq!(tracker.drops(), 0);
    let ids: Vec<u32> = a.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![10, 0, 11, 1, 2, 3]);
}

#[test]
fn partially_consumed_into_iter_drops_the_rest() {
    let tracker = DropTracker::new();
    let a = tracked_array(&tracker, 5);
    let mut it = a.into_iter();
    let first = it.next().unwrap();
    let last = it.next_back().unwrap();
    assert_eq!((first.id, last.id), (0, 4));
    drop(it);
    assert_eq!(tracker.drops(), 3);
}

#[test]
fn concat_clones_into_fresh_storage() {
    let tracker = DropTracker::new();
    let a = tracked_array(&tracker, 2);
    let b = tracked_array(&tracker, 2);
    let c = a.concat(&b);
    drop(c);
    assert_eq!(tracker.drops(), 4);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
}

#[test]
fn clear_drops_everything() {
    let tracker = DropTracker::new();
    let mut a = tracked_array(&tracker, 6);
    a.clear();
    assert_eq!(tracker.drops(), 6);
    assert_eq!(a.capacity(), 1);
}
