//! Splitting a sorted slice around a pivot value.
//!
//! The parts borrow from the input, which is never modified. Concatenating them gives back the
//! input exactly. Use `to_vec` on a part where an owned copy is needed.

use tracing::trace;

use crate::bound::{bisect_left_by, bisect_right_by};
use crate::options::Options;

/// Splits `v` into the elements `<= target` and the elements `> target`.
///
/// `partition(&[1, 2, 3, 3, 4, 5], &3)` is `([1, 2, 3, 3], [4, 5])`.
#[inline]
pub fn partition<'a, T: PartialOrd>(v: &'a [T], target: &T) -> (&'a [T], &'a [T]) {
    partition_by(v, target, <T as PartialOrd>::lt)
}

/// Splits `v` at [`bisect_right_by`]. Every element `e` of the left part satisfies
/// `!lt(target, e)`, every element of the right part satisfies `lt(target, e)`.
pub fn partition_by<'a, T, F>(v: &'a [T], target: &T, lt: F) -> (&'a [T], &'a [T])
where
    F: FnMut(&T, &T) -> bool,
{
    let index = bisect_right_by(v, target, lt);
    trace!(index, len = v.len(), "partition");

    v.split_at(index)
}

pub fn partition_with<'a, T, F>(v: &'a [T], target: &T, options: Options<F>) -> (&'a [T], &'a [T])
where
    F: FnMut(&T, &T) -> bool,
{
    partition_by(v, target, options.lt)
}

/// Splits `v` into the elements `< target` and the elements `>= target`.
///
/// `partition_left(&[1, 2, 3, 3, 4, 5], &3)` is `([1, 2], [3, 3, 4, 5])`.
#[inline]
pub fn partition_left<'a, T: PartialOrd>(v: &'a [T], target: &T) -> (&'a [T], &'a [T]) {
    partition_left_by(v, target, <T as PartialOrd>::lt)
}

/// Splits `v` at [`bisect_left_by`]. Every element `e` of the left part satisfies
/// `lt(e, target)`, every element of the right part satisfies `!lt(e, target)`.
pub fn partition_left_by<'a, T, F>(v: &'a [T], target: &T, lt: F) -> (&'a [T], &'a [T])
where
    F: FnMut(&T, &T) -> bool,
{
    let index = bisect_left_by(v, target, lt);
    trace!(index, len = v.len(), "partition_left");

    v.split_at(index)
}

pub fn partition_left_with<'a, T, F>(
    v: &'a [T],
    target: &T,
    options: Options<F>,
) -> (&'a [T], &'a [T])
where
    F: FnMut(&T, &T) -> bool,
{
    partition_left_by(v, target, options.lt)
}
