use crate::bound;

pub struct BisectImpl;

impl crate::kernel::Bisect for BisectImpl {
    fn name() -> String {
        "canonical".into()
    }

    #[inline]
    fn bisect_left_by<T, F>(v: &[T], target: &T, lt: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        bound::bisect_left_by(v, target, lt)
    }

    #[inline]
    fn bisect_right_by<T, F>(v: &[T], target: &T, lt: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        bound::bisect_right_by(v, target, lt)
    }
}
