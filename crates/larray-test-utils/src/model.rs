//! Scripted operations and a reference model of the capacity policy.
//!
//! [`ReferenceModel`] tracks contents in a `Vec` and recomputes capacity
//! with the default 2x/3x arithmetic written out longhand, so a script
//! can be replayed against both and compared step by step.

use larray::{ArrayError, DynamicArray};
use proptest::prelude::*;

/// One mutation applied to an `i32` array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Append(i32),
    Insert(usize, i32),
    Set(usize, i32),
    Delete(usize),
    Pop,
    PopAt(isize),
    Extend(Vec<i32>),
    Clear,
}

impl Op {
    /// Whether this op removes a single element (and so may shrink).
    pub fn is_removal(&self) -> bool {
        matches!(self, Op::Delete(_) | Op::Pop | Op::PopAt(_))
    }
}

/// Observable result of applying an [`Op`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Succeeded with nothing to return.
    Done,
    /// Succeeded returning an element (popped, or replaced by `Set`).
    Value(i32),
    /// Failed; the array must be unchanged.
    Failed(ArrayError),
}

impl<T> From<Result<T, ArrayError>> for Outcome
where
    T: Into<Outcome>,
{
    fn from(result: Result<T, ArrayError>) -> Self {
        match result {
            Ok(v) => v.into(),
            Err(e) => Outcome::Failed(e),
        }
    }
}

impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Outcome::Done
    }
}

impl From<i32> for Outcome {
    fn from(v: i32) -> Self {
        Outcome::Value(v)
    }
}

/// Apply `op` to a real array.
pub fn apply(array: &mut DynamicArray<i32>, op: &Op) -> Outcome {
    match op {
        Op::Append(x) => {
            array.append(*x);
            Outcome::Done
        }
        Op::Insert(i, x) => {
            array.insert(*i, *x);
            Outcome::Done
        }
        Op::Set(i, x) => array.set(*i, *x).into(),
        Op::Delete(i) => array.delete(*i).into(),
        Op::Pop => array.pop().into(),
        Op::PopAt(i) => array.pop_at(*i).into(),
        Op::Extend(xs) => {
            array.extend(xs.iter().copied());
            Outcome::Done
        }
        Op::Clear => {
            array.clear();
            Outcome::Done
        }
    }
}

/// `Vec`-backed model of an array under the default policy.
#[derive(Clone, Debug)]
pub struct ReferenceModel {
    items: Vec<i32>,
    capacity: usize,
}

impl ReferenceModel {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 1,
        }
    }

    pub fn items(&self) -> &[i32] {
        &self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn sized_for(len: usize) -> usize {
        if len == 0 {
            1
        } else {
            2 * len
        }
    }

    fn grow_if_full(&mut self) {
        if self.items.len() == self.capacity {
            self.capacity = Self::sized_for(self.items.len());
        }
    }

    fn shrink_if_sparse(&mut self) {
        let len = self.items.len();
        if len > 0 && self.capacity >= 3 * len {
            self.capacity = Self::sized_for(len);
        }
    }

    fn out_of_range(&self, index: usize) -> Outcome {
        Outcome::Failed(ArrayError::IndexOutOfRange {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len: self.items.len(),
        })
    }

    fn remove(&mut self, index: usize) -> i32 {
        let value = self.items.remove(index);
        self.shrink_if_sparse();
        value
    }

    pub fn apply(&mut self, op: &Op) -> Outcome {
        let len = self.items.len();
        match op {
            Op::Append(x) => {
                self.grow_if_full();
                self.items.push(*x);
                Outcome::Done
            }
            Op::Insert(i, x) => {
                self.grow_if_full();
                if *i >= len {
                    self.items.push(*x);
                } else {
                    self.items.insert(*i, *x);
                }
                Outcome::Done
            }
            Op::Set(i, x) if *i < len => {
                Outcome::Value(std::mem::replace(&mut self.items[*i], *x))
            }
            Op::Set(i, _) => self.out_of_range(*i),
            Op::Delete(i) if *i < len => {
                self.remove(*i);
                Outcome::Done
            }
            Op::Delete(i) => self.out_of_range(*i),
            Op::Pop => self.apply(&Op::PopAt(-1)),
            Op::PopAt(i) => {
                let signed_len = len as isize;
                if *i >= signed_len || *i < -signed_len {
                    return Outcome::Failed(ArrayError::IndexOutOfRange { index: *i, len });
                }
                let index = (if *i < 0 { *i + signed_len } else { *i }) as usize;
                Outcome::Value(self.remove(index))
            }
            Op::Extend(xs) => {
                for x in xs {
                    self.grow_if_full();
                    self.items.push(*x);
                }
                Outcome::Done
            }
            Op::Clear => {
                self.items.clear();
                self.capacity = 1;
                Outcome::Done
            }
        }
    }
}

impl Default for ReferenceModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Strategy producing a single [`Op`], biased towards appends so scripts
/// build up enough elements to exercise shrinking.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Append),
        2 => (0usize..40, any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
        1 => (0usize..40, any::<i32>()).prop_map(|(i, x)| Op::Set(i, x)),
        2 => (0usize..40).prop_map(Op::Delete),
        2 => Just(Op::Pop),
        2 => (-40isize..40).prop_map(Op::PopAt),
        1 => proptest::collection::vec(any::<i32>(), 0..8).prop_map(Op::Extend),
        1 => Just(Op::Clear),
    ]
}

/// Strategy producing a script of up to `max_ops` operations.
pub fn script_strategy(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op_strategy(), 0..max_ops)
}
