//! Fixed-capacity slot storage backing a [`DynamicArray`](crate::DynamicArray).
//!
//! A [`SlotBuffer`] is a boxed slice of `Option<T>` whose length is the
//! array's capacity: `Some` marks a live slot, `None` a vacant one. The
//! buffer never grows in place. Reallocation builds a fresh buffer and
//! moves the live prefix across, leaving nothing behind in the old one.

/// Owned, contiguous, fixed-capacity storage of optional slots.
pub(crate) struct SlotBuffer<T> {
    /// Backing storage. Allocated to full capacity at creation.
    slots: Box<[Option<T>]>,
}

impl<T> SlotBuffer<T> {
    /// Create a buffer of `capacity` vacant slots.
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "slot buffer capacity must be > 0");
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Total number of slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Shared access to the value in slot `index`, if occupied.
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Mutable access to the value in slot `index`, if occupied.
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Store `value` in slot `index`, returning whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub(crate) fn put(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].replace(value)
    }

    /// Move the value out of slot `index`, leaving it vacant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Move slots `[at, end)` one position right, vacating `at`.
    ///
    /// Slot `end` must be vacant and inside the buffer; it receives the
    /// value previously at `end - 1`.
    pub(crate) fn shift_right(&mut self, at: usize, end: usize) {
        debug_assert!(self.slots[end].is_none(), "shift_right into live slot");
        self.slots[at..=end].rotate_right(1);
    }

    /// Move slots `(at, end)` one position left, vacating `end - 1`.
    ///
    /// Slot `at` must already be vacant (its value taken by the caller).
    pub(crate) fn shift_left(&mut self, at: usize, end: usize) {
        debug_assert!(self.slots[at].is_none(), "shift_left over live slot");
        self.slots[at..end].rotate_left(1);
    }

    /// Replace this buffer with one of `capacity` slots, moving the first
    /// `len` values across in order.
    ///
    /// Returns the number of values moved.
    pub(crate) fn relocate(&mut self, len: usize, capacity: usize) -> usize {
        debug_assert!(capacity >= len, "relocation would drop live slots");
        let mut fresh = Self::new(capacity);
        let mut moved = 0;
        for (dst, src) in fresh.slots.iter_mut().zip(&mut self.slots[..len]) {
            *dst = src.take();
            moved += 1;
        }
        *self = fresh;
        moved
    }

    /// Number of occupied slots. Linear in capacity.
    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether slots `[0, len)` are all occupied and the rest vacant.
    pub(crate) fn is_packed(&self, len: usize) -> bool {
        self.slots[..len].iter().all(Option::is_some)
            && self.slots[len..].iter().all(Option::is_none)
    }
}

impl<T: Clone> SlotBuffer<T> {
    /// Clone the first `len` values into `dst` starting at slot `offset`.
    pub(crate) fn clone_prefix_into(&self, len: usize, dst: &mut Self, offset: usize) {
        for (to, from) in dst.slots[offset..offset + len]
            .iter_mut()
            .zip(&self.slots[..len])
        {
            *to = from.clone();
        }
    }
}
