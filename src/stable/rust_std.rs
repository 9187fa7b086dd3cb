use std::cmp::Ordering;

sort_impl!("rust_std_stable");

#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut sorted = v.to_vec();
    sorted.sort();

    sorted
}

#[inline]
pub fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = v.to_vec();
    sorted.sort_by(compare);

    sorted
}
