use std::fmt;

/// Natural ordering used when no relation is given, `PartialOrd::lt`.
pub type NaturalLt<T> = fn(&T, &T) -> bool;

/// Ordering relation and insertion mode accepted by the `*_with` operations.
///
/// `lt` must be a strict less-than: irreflexive, transitive, and for two distinct elements
/// exactly one of `lt(a, b)` and `lt(b, a)` holds. The slice passed alongside must be sorted
/// under it.
///
/// `in_place` is only read by [`insort_with`](crate::insort_with) and
/// [`insort_left_with`](crate::insort_left_with). It defaults to `false`, callers have to opt
/// in to having their vector mutated.
#[derive(Clone, Copy)]
pub struct Options<F> {
    pub lt: F,
    pub in_place: bool,
}

impl<T: PartialOrd> Options<NaturalLt<T>> {
    /// Natural `<` ordering, inserts produce a new vector.
    pub fn new() -> Self {
        Self {
            lt: <T as PartialOrd>::lt,
            in_place: false,
        }
    }
}

impl<T: PartialOrd> Default for Options<NaturalLt<T>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Options<F> {
    /// Orders elements with `lt` instead of `<`.
    pub fn by(lt: F) -> Self {
        Self {
            lt,
            in_place: false,
        }
    }

    pub fn in_place(mut self, in_place: bool) -> Self {
        self.in_place = in_place;
        self
    }
}

impl Options<()> {
    /// Orders elements by comparing the keys `key` extracts from them.
    ///
    /// The key is computed twice per comparison, keep it cheap.
    pub fn by_key<T, K, G>(mut key: G) -> Options<impl FnMut(&T, &T) -> bool>
    where
        K: PartialOrd,
        G: FnMut(&T) -> K,
    {
        Options::by(move |a: &T, b: &T| key(a) < key(b))
    }
}

impl<F> fmt::Debug for Options<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("in_place", &self.in_place)
            .finish_non_exhaustive()
    }
}
