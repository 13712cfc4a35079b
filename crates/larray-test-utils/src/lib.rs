//! Test utilities for LArray development.
//!
//! Provides a scripted [`Op`] vocabulary with proptest strategies, a
//! [`ReferenceModel`] that predicts contents and capacity without using
//! the library, invariant checks, and reusable [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

pub use model::{apply, op_strategy, script_strategy, Op, Outcome, ReferenceModel};

use larray::DynamicArray;

/// Describe the first capacity invariant `array` violates, if any.
///
/// With `after_removal`, also requires `capacity < 3 * len` for a
/// non-empty array.
pub fn invariant_violation<T>(array: &DynamicArray<T>, after_removal: bool) -> Option<String> {
    let (len, cap) = (array.len(), array.capacity());
    if cap < 1 {
        return Some(format!("capacity {cap} below 1"));
    }
    if cap < len {
        return Some(format!("capacity {cap} below length {len}"));
    }
    let threshold = array.policy().shrink_threshold();
    if after_removal && len > 0 && cap >= threshold * len {
        return Some(format!(
            "capacity {cap} not shrunk after removal (len {len}, threshold {threshold})"
        ));
    }
    None
}

/// Panic with a descriptive message if `array` violates a capacity invariant.
pub fn assert_invariants<T>(array: &DynamicArray<T>, after_removal: bool) {
    if let Some(msg) = invariant_violation(array, after_removal) {
        panic!("invariant violated: {msg}");
    }
}
