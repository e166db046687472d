//! Inserting into a sorted vector while keeping it sorted.
//!
//! There are two forms for each side:
//!
//! - `insort*` mutates the caller's `Vec` and hands the same vector back.
//! - `insorted*` leaves the input alone and returns a new `Vec` with one more element.
//!
//! [`insort_with`] and [`insort_left_with`] pick between the two with [`Options::in_place`],
//! which defaults to the copying form. They always take `&mut Vec<T>`, so a caller holding only a
//! shared slice uses `insorted*` instead.
//!
//! Finding the index is logarithmic, making room for the new element is linear in the number of
//! elements behind it.

use std::borrow::Cow;

use tracing::trace;

use crate::bound::{bisect_left_by, bisect_right_by};
use crate::options::Options;

/// Inserts `target` into `v` after any elements equal to it.
#[inline]
pub fn insort<T: PartialOrd>(v: &mut Vec<T>, target: T) -> &mut Vec<T> {
    insort_by(v, target, <T as PartialOrd>::lt)
}

/// Inserts `target` into `v`, which must be sorted under `lt`, at [`bisect_right_by`].
///
/// Returns `v` itself, now one element longer.
pub fn insort_by<T, F>(v: &mut Vec<T>, target: T, lt: F) -> &mut Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let index = bisect_right_by(v, &target, lt);
    trace!(index, len = v.len(), in_place = true, "insort");

    v.insert(index, target);
    v
}

/// Inserts `target` into `v` before any elements equal to it.
#[inline]
pub fn insort_left<T: PartialOrd>(v: &mut Vec<T>, target: T) -> &mut Vec<T> {
    insort_left_by(v, target, <T as PartialOrd>::lt)
}

/// Inserts `target` into `v`, which must be sorted under `lt`, at [`bisect_left_by`].
///
/// Returns `v` itself, now one element longer.
pub fn insort_left_by<T, F>(v: &mut Vec<T>, target: T, lt: F) -> &mut Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let index = bisect_left_by(v, &target, lt);
    trace!(index, len = v.len(), in_place = true, "insort_left");

    v.insert(index, target);
    v
}

/// Returns a copy of `v` with `target` inserted after any elements equal to it.
#[inline]
pub fn insorted<T: PartialOrd + Clone>(v: &[T], target: T) -> Vec<T> {
    insorted_by(v, target, <T as PartialOrd>::lt)
}

/// Returns a copy of `v` with `target` inserted at [`bisect_right_by`].
pub fn insorted_by<T, F>(v: &[T], target: T, lt: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let index = bisect_right_by(v, &target, lt);
    trace!(index, len = v.len(), in_place = false, "insort");

    copy_with_inserted(v, index, target)
}

/// Returns a copy of `v` with `target` inserted before any elements equal to it.
#[inline]
pub fn insorted_left<T: PartialOrd + Clone>(v: &[T], target: T) -> Vec<T> {
    insorted_left_by(v, target, <T as PartialOrd>::lt)
}

/// Returns a copy of `v` with `target` inserted at [`bisect_left_by`].
pub fn insorted_left_by<T, F>(v: &[T], target: T, lt: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let index = bisect_left_by(v, &target, lt);
    trace!(index, len = v.len(), in_place = false, "insort_left");

    copy_with_inserted(v, index, target)
}

/// Inserts `target` after any elements equal to it, using the relation in `options`.
///
/// With `options.in_place` set, `v` is mutated and the result borrows it. Otherwise `v` is only
/// read and the result owns a new vector.
///
/// Either way `v` stays mutably borrowed for as long as the returned `Cow` lives. Call
/// [`Cow::into_owned`] to release it, or use [`insorted_by`] directly when only a `&[T]` is at
/// hand or the input has to stay readable next to the result.
pub fn insort_with<'a, T, F>(v: &'a mut Vec<T>, target: T, options: Options<F>) -> Cow<'a, [T]>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let Options { lt, in_place } = options;

    if in_place {
        let inserted: &'a [T] = insort_by(v, target, lt);
        Cow::Borrowed(inserted)
    } else {
        Cow::Owned(insorted_by(v, target, lt))
    }
}

/// Inserts `target` before any elements equal to it, using the relation in `options`.
///
/// See [`insort_with`] for how `options.in_place` is handled and what it borrows. The copying
/// counterpart for a shared slice is [`insorted_left_by`].
pub fn insort_left_with<'a, T, F>(
    v: &'a mut Vec<T>,
    target: T,
    options: Options<F>,
) -> Cow<'a, [T]>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let Options { lt, in_place } = options;

    if in_place {
        let inserted: &'a [T] = insort_left_by(v, target, lt);
        Cow::Borrowed(inserted)
    } else {
        Cow::Owned(insorted_left_by(v, target, lt))
    }
}

fn copy_with_inserted<T: Clone>(v: &[T], index: usize, target: T) -> Vec<T> {
    let (head, tail) = v.split_at(index);

    let mut out = Vec::with_capacity(v.len() + 1);
    out.extend_from_slice(head);
    out.push(target);
    out.extend_from_slice(tail);

    out
}
