//! Borrowing and consuming iterators over a [`DynamicArray`](crate::DynamicArray).

use std::fmt;
use std::iter::FusedIterator;

use crate::array::DynamicArray;
use crate::slots::SlotBuffer;

/// Borrowing iterator over the live prefix of an array.
///
/// Reads the backing buffer one slot at a time rather than taking a
/// snapshot. Double-ended, so `rev()` walks from the last element.
pub struct Iter<'a, T> {
    buffer: &'a SlotBuffer<T>,
    /// Next index yielded from the front.
    front: usize,
    /// One past the next index yielded from the back.
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(buffer: &'a SlotBuffer<T>, len: usize) -> Self {
        Self {
            buffer,
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&Remaining(self.clone())).finish()
    }
}

/// Consuming iterator that moves elements out of an array.
///
/// Elements not yet yielded are dropped with the iterator.
pub struct IntoIter<T> {
    buffer: SlotBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(array: DynamicArray<T>) -> Self {
        let (buffer, len) = array.into_parts();
        Self {
            buffer,
            front: 0,
            back: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.buffer.take(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.take(self.back)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = Iter {
            buffer: &self.buffer,
            front: self.front,
            back: self.back,
        };
        f.debug_tuple("IntoIter").field(&Remaining(pending)).finish()
    }
}

/// Renders the elements an iterator has yet to yield as a list.
struct Remaining<'a, T>(Iter<'a, T>);

impl<T: fmt::Debug> fmt::Debug for Remaining<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;

    #[test]
    fn forward_and_backward() {
        let a = DynamicArray::from([1, 4, 3, 6]);
        let fwd: Vec<i32> = a.iter().copied().collect();
        let back: Vec<i32> = a.iter_rev().copied().collect();
        assert_eq!(fwd, vec![1, 4, 3, 6]);
        assert_eq!(back, vec![6, 3, 4, 1]);
    }

    #[test]
    fn iteration_is_restartable() {
        let a = DynamicArray::from([1, 4, 3, 6]);
        let first: Vec<_> = a.iter().collect();
        let second: Vec<_> = a.iter().collect();
        assert_eq!(first, second);
        let first_rev: Vec<_> = a.iter_rev().collect();
        let second_rev: Vec<_> = a.iter_rev().collect();
        assert_eq!(first_rev, second_rev);
    }

    #[test]
    fn empty_iterates_nothing() {
        let a: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(a.iter().next(), None);
        assert_eq!(a.iter_rev().next(), None);
    }

    #[test]
    fn duplicates_are_all_yielded() {
        let a = DynamicArray::from([1, 4, 4, 1, 9, 4, 6, 6]);
        let mut seen: Vec<i32> = (&a).into_iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 1, 4, 4, 4, 6, 6, 9]);

        let b = DynamicArray::from([1, 1, 4, 4, 4, 6, 6, 9]);
        let back: Vec<i32> = b.iter_rev().copied().collect();
        assert_eq!(back, vec![9, 6, 6, 4, 4, 4, 1, 1]);
    }

    #[test]
    fn ends_meet_in_the_middle() {
        let a = DynamicArray::from([1, 2, 3]);
        let mut it = a.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn into_iter_moves_out() {
        let a = DynamicArray::from(vec![String::from("a"), String::from("b")]);
        let out: Vec<String> = a.into_iter().collect();
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn into_iter_reversed() {
        let a = DynamicArray::from([1, 2, 3]);
        let out: Vec<i32> = a.into_iter().rev().collect();
        assert_eq!(out, vec![3, 2, 1]);
    }

    #[test]
    fn debug_shows_pending_elements() {
        let a = DynamicArray::from([1, 2, 3]);
        let mut it = a.iter();
        assert_eq!(format!("{it:?}"), "Iter([1, 2, 3])");
        it.next();
        assert_eq!(format!("{it:?}"), "Iter([2, 3])");

        let mut owned = a.clone().into_iter();
        owned.next_back();
        assert_eq!(format!("{owned:?}"), "IntoIter([1, 2])");
        owned.next();
        owned.next();
        assert_eq!(format!("{owned:?}"), "IntoIter([])");
    }

    #[test]
    fn for_loop_over_reference() {
        let a = DynamicArray::from([2, 4, 6]);
        let mut sum = 0;
        for x in &a {
            sum += x;
        }
        assert_eq!(sum, 12);
    }
}
