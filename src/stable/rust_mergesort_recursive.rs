use std::cmp::Ordering;

use crate::mergesort::{mergesort_with_recursive_merge, mergesort_with_recursive_merge_by};

// The merge step recurses once per element, keep inputs small.
sort_impl!("rust_mergesort_recursive_stable");

#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    mergesort_with_recursive_merge(v)
}

#[inline]
pub fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    mergesort_with_recursive_merge_by(v, compare)
}
