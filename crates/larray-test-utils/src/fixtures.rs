//! Reusable array fixtures.
//!
//! - [`sample`] and [`with_duplicates`]: the small arrays most tests start from.
//! - [`tight`]: an array whose capacity equals its length, for probing
//!   shrink boundaries that doubling alone never reaches.
//! - [`DropTracker`]: counts drops of [`Tracked`] values to check that
//!   removals, shifts and reallocations neither leak nor double-drop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use larray::DynamicArray;

/// `[1, 4, 3, 6]`.
pub fn sample() -> DynamicArray<i32> {
    DynamicArray::from([1, 4, 3, 6])
}

/// `[1, 4, 4, 1, 9, 4, 6, 6]`.
pub fn with_duplicates() -> DynamicArray<i32> {
    DynamicArray::from([1, 4, 4, 1, 9, 4, 6, 6])
}

/// `0..len` appended one at a time (capacity is the next power of two).
pub fn filled(len: usize) -> DynamicArray<i32> {
    (0..len as i32).collect()
}

/// An array holding `values` with capacity exactly `max(1, values.len())`.
///
/// Concatenation sizes its result to the combined length, which gives
/// capacities (like 9) that growth from 1 never produces.
pub fn tight(values: &[i32]) -> DynamicArray<i32> {
    DynamicArray::from(values).concat(&DynamicArray::new())
}

/// Shared drop counter for [`Tracked`] values.
#[derive(Clone, Default)]
pub struct DropTracker {
    drops: Arc<AtomicUsize>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A value whose drop increments this tracker.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: Arc::clone(&self.drops),
        }
    }

    /// How many tracked values have been dropped.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::Relaxed)
    }
}

/// A value that records its own drop. Compares equal by `id`.
#[derive(Clone, Debug)]
pub struct Tracked {
    pub id: u32,
    drops: Arc<AtomicUsize>,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::Relaxed);
    }
}
