//! Benchmark workloads for the LArray growable array.
//!
//! Provides deterministic workload builders shared by the Criterion
//! benches and the `resize_trace` example:
//!
//! - [`append_profile`]: build an array by repeated append
//! - [`front_insert_profile`]: build an array by inserting at index 0
//! - [`drain_front`]: empty an array through `pop_at(0)`
//! - [`churn_script`]: a fixed mixed script of appends and removals

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use larray::DynamicArray;
use larray_test_utils::Op;

/// Build an array of `n` elements by appending `0..n`.
pub fn append_profile(n: usize) -> DynamicArray<u64> {
    let mut array = DynamicArray::new();
    for i in 0..n as u64 {
        array.append(i);
    }
    array
}

/// Build an array of `n` elements by inserting each at the front.
///
/// Quadratic in `n`: every insert shifts the whole array.
pub fn front_insert_profile(n: usize) -> DynamicArray<u64> {
    let mut array = DynamicArray::new();
    for i in 0..n as u64 {
        array.insert(0, i);
    }
    array
}

/// Pop from the front until empty, returning the sum of popped values.
pub fn drain_front(array: &mut DynamicArray<u64>) -> u64 {
    let mut sum = 0;
    while let Ok(v) = array.pop_at(0) {
        sum += v;
    }
    sum
}

/// A deterministic script that grows to roughly `peak` elements, then
/// alternates bursts of removals and appends so the array repeatedly
/// crosses its shrink threshold.
pub fn churn_script(peak: usize, rounds: usize) -> Vec<Op> {
    let mut script = Vec::with_capacity(peak + rounds * peak);
    script.extend((0..peak as i32).map(Op::Append));
    for round in 0..rounds {
        let burst = peak * 3 / 4;
        for k in 0..burst {
            if k % 2 == 0 {
                script.push(Op::Pop);
            } else {
                script.push(Op::Delete(k % 7));
            }
        }
        script.extend((0..burst as i32).map(|v| Op::Append(v + round as i32)));
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use larray_test_utils::{apply, ReferenceModel};

    #[test]
    fn append_profile_has_expected_shape() {
        let a = append_profile(1000);
        assert_eq!(a.len(), 1000);
        assert_eq!(a.capacity(), 1024);
        assert_eq!(a.get(999), Ok(&999));
    }

    #[test]
    fn front_insert_profile_is_reversed() {
        let a = front_insert_profile(5);
        assert_eq!(a.to_vec(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn drain_front_empties() {
        let mut a = append_profile(100);
        assert_eq!(drain_front(&mut a), (0..100).sum());
        assert!(a.is_empty());
    }

    #[test]
    fn churn_script_shrinks_and_regrows() {
        let script = churn_script(64, 4);
        let mut array = DynamicArray::new();
        let mut model = ReferenceModel::new();
        for op in &script {
            assert_eq!(apply(&mut array, op), model.apply(op));
        }
        assert!(array.stats().shrink_events > 0);
        assert!(array.stats().grow_events > 7);
        assert_eq!(array.capacity(), model.capacity());
    }
}
