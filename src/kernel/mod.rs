//! Interchangeable implementations of the two bound searches.
//!
//! [`canonical`](self::canonical) is the search the crate exposes. The others exist to cross-check
//! it and to compare it against in benchmarks. All of them must return the same index for a
//! slice sorted under `lt`, and some index in `0..=v.len()` for anything else.

pub trait Bisect {
    fn name() -> String;

    fn bisect_left_by<T, F>(v: &[T], target: &T, lt: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    fn bisect_right_by<T, F>(v: &[T], target: &T, lt: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    #[inline]
    fn bisect_left<T: PartialOrd>(v: &[T], target: &T) -> usize {
        Self::bisect_left_by(v, target, <T as PartialOrd>::lt)
    }

    #[inline]
    fn bisect_right<T: PartialOrd>(v: &[T], target: &T) -> usize {
        Self::bisect_right_by(v, target, <T as PartialOrd>::lt)
    }
}

// Implements `Bisect` on top of a module local `partition_point(v, pred)`, which has to return
// the index of the first element for which `pred` is false, assuming all elements for which it
// is true come first.
macro_rules! bisect_impl {
    ($name:expr) => {
        pub struct BisectImpl;

        impl crate::kernel::Bisect for BisectImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn bisect_left_by<T, F>(v: &[T], target: &T, mut lt: F) -> usize
            where
                F: FnMut(&T, &T) -> bool,
            {
                partition_point(v, |elem| lt(elem, target))
            }

            #[inline]
            fn bisect_right_by<T, F>(v: &[T], target: &T, mut lt: F) -> usize
            where
                F: FnMut(&T, &T) -> bool,
            {
                partition_point(v, |elem| !lt(target, elem))
            }
        }
    };
}

pub mod branchless;
pub mod canonical;
pub mod stdlib;
