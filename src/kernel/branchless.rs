bisect_impl!("branchless");

/// Halving search with a fixed number of comparisons for a given length.
///
/// Every iteration halves the candidate range whatever `pred` answers, so the loop runs exactly
/// `ceil(log2(v.len()))` times and the new base can be selected without a branch. One more call
/// to `pred` settles the final index.
pub fn partition_point<T, P>(v: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // Counting the v.len() + 1 outcomes would overflow for a maximal slice of zero-sized
    // elements, so track the inclusive range [base, base + size] instead.
    // Invariant: [base, base + size] contains our desired result and base + size <= v.len().
    let mut size = v.len();
    if size == 0 {
        return 0;
    }
    let mut base = 0;

    while size > 1 {
        let half = size / 2;

        // 1 <= half < size, so base < mid < base + size <= v.len().
        let mid = base + half;

        // pred(v[mid]) being true means the result lies in [mid + 1, base + size], otherwise in
        // [base, mid]. Both fit in a range of length size - half, which is >= half.
        //
        // black_box keeps the select from being turned back into a jump.
        base = std::hint::black_box(if pred(&v[mid]) { mid } else { base });
        size -= half;
    }

    // [base, base + 1] contains our result and base < v.len().
    base + pred(&v[base]) as usize
}
