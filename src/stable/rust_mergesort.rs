use std::cmp::Ordering;

use crate::mergesort::{mergesort, mergesort_by};

sort_impl!("rust_mergesort_stable");

#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    mergesort(v)
}

#[inline]
pub fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    mergesort_by(v, compare)
}
