//! Cumulative reallocation statistics.
//!
//! [`ResizeStats`] records how often an array has reallocated its backing
//! buffer, enabling profiling of growth behaviour under a workload.

/// Reallocation counters collected over the lifetime of an array.
///
/// Read through [`DynamicArray::stats`](crate::DynamicArray::stats) and
/// cleared by [`DynamicArray::reset_stats`](crate::DynamicArray::reset_stats).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResizeStats {
    /// Number of reallocations to a larger buffer.
    pub grow_events: u64,
    /// Number of reallocations to a smaller buffer.
    pub shrink_events: u64,
    /// Total elements moved between buffers by reallocations.
    pub elements_moved: u64,
    /// Largest capacity held since creation or the last reset.
    pub peak_capacity: usize,
}

impl ResizeStats {
    /// Fresh counters for an array that currently holds `capacity` slots.
    pub(crate) fn seeded(capacity: usize) -> Self {
        Self {
            peak_capacity: capacity,
            ..Self::default()
        }
    }

    pub(crate) fn record_grow(&mut self, moved: usize, new_capacity: usize) {
        self.grow_events += 1;
        self.elements_moved += moved as u64;
        self.peak_capacity = self.peak_capacity.max(new_capacity);
    }

    pub(crate) fn record_shrink(&mut self, moved: usize) {
        self.shrink_events += 1;
        self.elements_moved += moved as u64;
    }

    /// Total reallocations in either direction.
    pub fn reallocations(&self) -> u64 {
        self.grow_events + self.shrink_events
    }
}
