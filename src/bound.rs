//! Leftmost and rightmost insertion points.
//!
//! Both searches keep the half open window `[lo, hi)` of undecided indices. Everything left of
//! `lo` is known to belong before the target, everything from `hi` on is known to belong after
//! it. Each comparison shrinks the window to at most half its size, so a slice of length `n`
//! costs at most `ceil(log2(n + 1))` calls to `lt`, independent of how many elements equal the
//! target.
//!
//! `mid` is always inside `[lo, hi)` and therefore inside the slice, whatever `lt` answers. An
//! unsorted slice or an inconsistent relation can only move the result around inside
//! `0..=v.len()`.

use crate::options::Options;

/// Returns the smallest index at which `target` can be inserted while keeping `v` sorted.
///
/// Elements equal to `target` end up right of the inserted value. For `[1, 2, 3, 3, 4, 5]`
/// and `3` this is `2`. An empty slice yields `0`, a target larger than all elements yields
/// `v.len()`.
#[inline]
pub fn bisect_left<T: PartialOrd>(v: &[T], target: &T) -> usize {
    bisect_left_by(v, target, <T as PartialOrd>::lt)
}

/// [`bisect_left`] with a custom strict less-than relation.
///
/// Equivalent to the first index `i` for which `lt(&v[i], target)` is false.
pub fn bisect_left_by<T, F>(v: &[T], target: &T, mut lt: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if lt(&v[mid], target) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

pub fn bisect_left_with<T, F>(v: &[T], target: &T, options: Options<F>) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    bisect_left_by(v, target, options.lt)
}

/// Returns the largest index at which `target` can be inserted while keeping `v` sorted.
///
/// Elements equal to `target` end up left of the inserted value. For `[1, 2, 3, 3, 4, 5]`
/// and `3` this is `4`. If `target` occurs `k` times, the result is `bisect_left + k`.
#[inline]
pub fn bisect_right<T: PartialOrd>(v: &[T], target: &T) -> usize {
    bisect_right_by(v, target, <T as PartialOrd>::lt)
}

/// [`bisect_right`] with a custom strict less-than relation.
///
/// Equivalent to the first index `i` for which `lt(target, &v[i])` is true.
pub fn bisect_right_by<T, F>(v: &[T], target: &T, mut lt: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if lt(target, &v[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}

pub fn bisect_right_with<T, F>(v: &[T], target: &T, options: Options<F>) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    bisect_right_by(v, target, options.lt)
}
