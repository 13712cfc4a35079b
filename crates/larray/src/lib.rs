//! A growable array with an explicit, deterministic capacity policy.
//!
//! [`DynamicArray`] behaves like an indexed list (get, set, insert, delete,
//! pop, concatenation, membership, forward and reverse iteration) while
//! managing its own backing buffer rather than deferring to `Vec`'s growth
//! strategy. This crate contains no `unsafe` code.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>
//! ├── SlotBuffer<T>   (Box<[Option<T>]>, capacity = slot count)
//! ├── len             (slots [0, len) live, [len, capacity) vacant)
//! ├── CapacityPolicy  (grow ×2 when full, shrink when cap >= 3 × len)
//! └── ResizeStats     (grow/shrink counters, elements moved, peak capacity)
//! ```
//!
//! # Capacity rules
//!
//! - **Grow:** an append or insert that finds `len == capacity` first moves
//!   the elements into a buffer of `max(1, 2 * len)` slots.
//! - **Shrink:** a single removal (`delete`, `pop`, `pop_at`) that leaves
//!   `len > 0` and `capacity >= 3 * len` moves the elements into a buffer of
//!   `2 * len` slots. The check uses the length after the removal.
//! - Batch appends (`extend`, collecting) never shrink.
//!
//! # Example
//!
//! ```
//! use larray::DynamicArray;
//!
//! let mut a = DynamicArray::from([1, 4, 3, 6]);
//! a.delete(0).unwrap();
//! assert_eq!(a.to_string(), "[4, 3, 6]");
//! assert_eq!(a.pop_at(-1), Ok(6));
//! assert_eq!(a.index_of(&3), Ok(1));
//! assert_eq!(format!("{a:?}"), "DynamicArray([4, 3])");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod iter;
pub mod policy;
mod slots;
pub mod stats;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use error::{ArrayError, PolicyError};
pub use iter::{IntoIter, Iter};
pub use policy::CapacityPolicy;
pub use stats::ResizeStats;
