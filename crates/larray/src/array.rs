//! The growable array type and its capacity management.
//!
//! [`DynamicArray`] keeps a contiguous run of values in a slot buffer
//! whose capacity is managed explicitly by a [`CapacityPolicy`]: the buffer
//! grows to `2 * len` when an insertion finds it full, and shrinks to
//! `2 * len` when a single removal leaves it at least three times larger
//! than the remaining length.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Rev;
use std::ops::{Add, Index, IndexMut};

use crate::error::ArrayError;
use crate::iter::{IntoIter, Iter};
use crate::policy::CapacityPolicy;
use crate::slots::SlotBuffer;
use crate::stats::ResizeStats;

/// A growable, indexable sequence with an explicit capacity policy.
///
/// Indices are zero-based and unsigned, so negative positions cannot be
/// expressed for `get`, `set`, `delete` or `insert`. [`pop_at`] is the one
/// operation that accepts a signed index, counting from the end when
/// negative.
///
/// Mutating the array while an [`Iter`] is alive is rejected by the borrow
/// checker: iteration always observes a stable array.
///
/// [`pop_at`]: DynamicArray::pop_at
pub struct DynamicArray<T> {
    buffer: SlotBuffer<T>,
    len: usize,
    policy: CapacityPolicy,
    stats: ResizeStats,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with capacity 1 and the default policy.
    pub fn new() -> Self {
        Self::with_policy(CapacityPolicy::default())
    }

    /// Create an empty array that resizes according to `policy`.
    pub fn with_policy(policy: CapacityPolicy) -> Self {
        let capacity = policy.target_capacity(0);
        Self {
            buffer: SlotBuffer::new(capacity),
            len: 0,
            policy,
            stats: ResizeStats::seeded(capacity),
        }
    }

    /// Number of elements in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer. Always at least 1.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The capacity policy in force.
    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Reallocation statistics accumulated so far.
    pub fn stats(&self) -> &ResizeStats {
        &self.stats
    }

    /// Zero the reallocation counters. Peak capacity restarts at the current capacity.
    pub fn reset_stats(&mut self) {
        self.stats = ResizeStats::seeded(self.capacity());
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        self.buffer
            .get(index)
            .ok_or_else(|| ArrayError::out_of_range(index, self.len))
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        let len = self.len;
        self.buffer
            .get_mut(index)
            .ok_or_else(|| ArrayError::out_of_range(index, len))
    }

    /// Replace the element at `index` with `value`, returning the old element.
    ///
    /// On failure `value` is dropped and the array is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ArrayError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Remove and drop the element at `index`, shifting later elements left.
    ///
    /// May shrink the buffer.
    pub fn delete(&mut self, index: usize) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.remove_checked(index).map(drop)
    }

    /// Append `value` at the end, growing the buffer first if it is full.
    pub fn append(&mut self, value: T) {
        if self.policy.should_grow(self.len, self.capacity()) {
            self.grow();
        }
        self.buffer.put(self.len, value);
        self.len += 1;
        self.debug_check();
    }

    /// Insert `value` before `index`, shifting later elements right.
    ///
    /// An index at or past the end appends.
    pub fn insert(&mut self, index: usize, value: T) {
        if index >= self.len {
            self.append(value);
            return;
        }
        if self.policy.should_grow(self.len, self.capacity()) {
            self.grow();
        }
        self.buffer.shift_right(index, self.len);
        self.buffer.put(index, value);
        self.len += 1;
        self.debug_check();
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.pop_at(-1)
    }

    /// Remove and return the element at `index`.
    ///
    /// Negative indices count from the end: `-1` is the last element and
    /// `-len` the first. Valid indices are `[-len, len)`. May shrink the
    /// buffer.
    pub fn pop_at(&mut self, index: isize) -> Result<T, ArrayError> {
        let resolved = self.resolve_signed(index)?;
        self.remove_checked(resolved)
    }

    /// Drop every element and return to a single-slot buffer.
    ///
    /// Not counted as a shrink in [`ResizeStats`].
    pub fn clear(&mut self) {
        self.buffer = SlotBuffer::new(self.policy.target_capacity(0));
        self.len = 0;
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buffer, self.len)
    }

    /// Iterate over the elements back to front.
    pub fn iter_rev(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::out_of_range(index, self.len))
        }
    }

    /// Map a signed `pop_at` index onto `[0, len)`.
    fn resolve_signed(&self, index: isize) -> Result<usize, ArrayError> {
        let err = ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        };
        let len = isize::try_from(self.len).map_err(|_| err.clone())?;
        if index >= len || index < -len {
            return Err(err);
        }
        let absolute = if index < 0 { index + len } else { index };
        usize::try_from(absolute).map_err(|_| err)
    }

    /// Take the element at an index already known to be in range, close
    /// the gap, then apply the shrink rule to the reduced length.
    fn remove_checked(&mut self, index: usize) -> Result<T, ArrayError> {
        let value = self
            .buffer
            .take(index)
            .ok_or_else(|| ArrayError::out_of_range(index, self.len))?;
        self.buffer.shift_left(index, self.len);
        self.len -= 1;
        if self.policy.should_shrink(self.len, self.capacity()) {
            self.shrink();
        }
        self.debug_check();
        Ok(value)
    }

    fn grow(&mut self) {
        let target = self.policy.target_capacity(self.len);
        let moved = self.buffer.relocate(self.len, target);
        self.stats.record_grow(moved, target);
        debug_assert!(self.buffer.is_packed(self.len), "grow left a gap");
    }

    fn shrink(&mut self) {
        let target = self.policy.target_capacity(self.len);
        let moved = self.buffer.relocate(self.len, target);
        self.stats.record_shrink(moved);
        debug_assert!(self.buffer.is_packed(self.len), "shrink left a gap");
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.len <= self.capacity(), "len exceeds capacity");
        debug_assert!(self.capacity() >= CapacityPolicy::MIN_CAPACITY);
    }

    pub(crate) fn into_parts(self) -> (SlotBuffer<T>, usize) {
        (self.buffer, self.len)
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|x| x == value)
    }

    /// Index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Result<usize, ArrayError> {
        self.iter()
            .position(|x| x == value)
            .ok_or(ArrayError::ValueNotFound)
    }
}

impl<T: PartialEq + 'static> DynamicArray<T> {
    /// Compare against a type-erased value.
    ///
    /// Returns `false` when `other` is not a `DynamicArray<T>`.
    pub fn equals_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}

impl<T: Clone> DynamicArray<T> {
    /// A new array holding this array's elements followed by `other`'s.
    ///
    /// The result owns fresh storage sized to the combined length (at least
    /// 1) and uses this array's policy.
    pub fn concat(&self, other: &Self) -> Self {
        let len = self.len + other.len;
        let capacity = len.max(CapacityPolicy::MIN_CAPACITY);
        let mut buffer = SlotBuffer::new(capacity);
        self.buffer.clone_prefix_into(self.len, &mut buffer, 0);
        other.buffer.clone_prefix_into(other.len, &mut buffer, self.len);
        Self {
            buffer,
            len,
            policy: self.policy,
            stats: ResizeStats::seeded(capacity),
        }
    }

    /// Copy the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone + 'static> DynamicArray<T> {
    /// Concatenate with a type-erased operand.
    ///
    /// Fails with [`ArrayError::TypeMismatch`] unless `other` is a
    /// `DynamicArray<T>`.
    pub fn concat_dyn(&self, other: &dyn Any) -> Result<Self, ArrayError> {
        other
            .downcast_ref::<Self>()
            .map(|other| self.concat(other))
            .ok_or(ArrayError::TypeMismatch {
                expected: std::any::type_name::<Self>(),
            })
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let capacity = self.capacity();
        let mut buffer = SlotBuffer::new(capacity);
        self.buffer.clone_prefix_into(self.len, &mut buffer, 0);
        Self {
            buffer,
            len: self.len,
            policy: self.policy,
            stats: ResizeStats::seeded(capacity),
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Clone> Add<&DynamicArray<T>> for &DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn add(self, rhs: &DynamicArray<T>) -> DynamicArray<T> {
        self.concat(rhs)
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    /// Append each element in order. Never shrinks.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

/// Renders as `[1, 2, 3]`, each element in its `Debug` form.
impl<T: fmt::Debug> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value:?}")?;
        }
        f.write_str("]")
    }
}

/// Renders as `DynamicArray([1, 2, 3])`.
impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicArray({self})")
    }
}
