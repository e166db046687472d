//! Binary search over sorted slices: insertion points, partitions and ordered inserts.
//!
//! Every operation comes in three shapes:
//!
//! - `op(v, target)` orders elements with `PartialOrd::lt`.
//! - `op_by(v, target, lt)` takes a strict less-than predicate.
//! - `op_with(v, target, options)` takes an [`Options`] value carrying the predicate and, for
//!   the inserts, whether the caller's vector may be mutated.
//!
//! The input must already be sorted under the relation in use. This is not checked. An unsorted
//! input or an inconsistent relation yields some index in `0..=v.len()`, never a panic from the
//! library itself.
//!
//! ```
//! use bisect_comp::{bisect_left, bisect_right, insorted_by, partition};
//!
//! let v = [1, 2, 3, 3, 4, 5];
//! assert_eq!(bisect_left(&v, &3), 2);
//! assert_eq!(bisect_right(&v, &3), 4);
//! assert_eq!(partition(&v, &3), (&v[..4], &v[4..]));
//!
//! let words = ["A", "BC", "DE", "FGH"];
//! let inserted = insorted_by(&words, "XX", |a, b| a.len() < b.len());
//! assert_eq!(inserted, ["A", "BC", "DE", "XX", "FGH"]);
//! ```

pub mod bound;
pub mod insort;
pub mod kernel;
pub mod options;
pub mod partition;
pub mod patterns;

pub use bound::{
    bisect_left, bisect_left_by, bisect_left_with, bisect_right, bisect_right_by,
    bisect_right_with,
};
pub use insort::{
    insort, insort_by, insort_left, insort_left_by, insort_left_with, insort_with, insorted,
    insorted_by, insorted_left, insorted_left_by,
};
pub use options::{NaturalLt, Options};
pub use partition::{
    partition, partition_by, partition_left, partition_left_by, partition_left_with,
    partition_with,
};
