bisect_impl!("stdlib");

pub fn partition_point<T, P>(v: &[T], pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    v.partition_point(pred)
}
