//! Capacity policy: when the backing buffer grows or shrinks, and to what size.

use crate::error::PolicyError;

/// Growth and shrink rules for a [`DynamicArray`](crate::DynamicArray).
///
/// Both reallocation directions use the same sizing function,
/// `max(1, grow_factor * len)`. Growth happens when an insertion finds the
/// buffer full; shrinking happens after a single-element removal when the
/// capacity has reached `shrink_threshold * len` (using the length after
/// the removal). Validated at construction; immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityPolicy {
    grow_factor: usize,
    shrink_threshold: usize,
}

impl CapacityPolicy {
    /// Default growth factor: capacity doubles.
    pub const DEFAULT_GROW_FACTOR: usize = 2;

    /// Default shrink threshold: shrink once capacity is 3x the length.
    pub const DEFAULT_SHRINK_THRESHOLD: usize = 3;

    /// Smallest capacity a buffer may have.
    pub const MIN_CAPACITY: usize = 1;

    /// Create a policy with the given factors.
    ///
    /// Rejects `grow_factor < 2` and `shrink_threshold <= grow_factor`.
    pub fn new(grow_factor: usize, shrink_threshold: usize) -> Result<Self, PolicyError> {
        if grow_factor < 2 {
            return Err(PolicyError::GrowFactorTooSmall { grow_factor });
        }
        if shrink_threshold <= grow_factor {
            return Err(PolicyError::ShrinkWouldThrash {
                grow_factor,
                shrink_threshold,
            });
        }
        Ok(Self {
            grow_factor,
            shrink_threshold,
        })
    }

    /// Multiplier applied to the length when sizing a new buffer.
    pub fn grow_factor(&self) -> usize {
        self.grow_factor
    }

    /// Capacity-to-length ratio at which a removal triggers a shrink.
    pub fn shrink_threshold(&self) -> usize {
        self.shrink_threshold
    }

    /// Capacity of a freshly sized buffer for `len` elements.
    pub fn target_capacity(&self, len: usize) -> usize {
        len.saturating_mul(self.grow_factor).max(Self::MIN_CAPACITY)
    }

    /// Whether inserting one more element requires growth first.
    pub fn should_grow(&self, len: usize, capacity: usize) -> bool {
        debug_assert!(len <= capacity, "length {len} exceeds capacity {capacity}");
        len == capacity
    }

    /// Whether a buffer of `capacity` is oversized for `len` elements.
    ///
    /// Call with the length *after* the removal. Never true for an empty array.
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        len > 0 && capacity >= len.saturating_mul(self.shrink_threshold)
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            grow_factor: Self::DEFAULT_GROW_FACTOR,
            shrink_threshold: Self::DEFAULT_SHRINK_THRESHOLD,
        }
    }
}
