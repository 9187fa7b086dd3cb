use std::cmp::Ordering;

use crate::merge::{merge_impl, merge_recursive_impl};

/// Sorts `v` into a new `Vec` by recursive halving, leaving `v` untouched.
///
/// The left half gets the first `len / 2` elements. Both halves are sorted independently and
/// combined with [`crate::merge::merge`]. Since the left half always holds the earlier
/// elements and merge prefers the left side on ties, the sort is stable.
#[inline]
pub fn mergesort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    mergesort_by(v, |a, b| a.cmp(b))
}

#[inline]
pub fn mergesort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    mergesort_impl::<T, F, TwoPointerMerge>(v, &mut compare)
}

/// Same as [`mergesort`], but combines the halves with
/// [`crate::merge::merge_recursive`]. Only suitable for small inputs.
#[inline]
pub fn mergesort_with_recursive_merge<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    mergesort_with_recursive_merge_by(v, |a, b| a.cmp(b))
}

#[inline]
pub fn mergesort_with_recursive_merge_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    mergesort_impl::<T, F, RecursiveMerge>(v, &mut compare)
}

// --- Private ---

trait MergeStrategy {
    fn merge<T, F>(x: &[T], y: &[T], is_less_or_equal: &mut F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;
}

struct TwoPointerMerge;

impl MergeStrategy for TwoPointerMerge {
    #[inline]
    fn merge<T, F>(x: &[T], y: &[T], is_less_or_equal: &mut F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        merge_impl(x, y, is_less_or_equal)
    }
}

struct RecursiveMerge;

impl MergeStrategy for RecursiveMerge {
    #[inline]
    fn merge<T, F>(x: &[T], y: &[T], is_less_or_equal: &mut F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut out = Vec::with_capacity(x.len() + y.len());
        merge_recursive_impl(x, y, &mut out, is_less_or_equal);

        out
    }
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn mergesort_impl<T, F, M>(v: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    M: MergeStrategy,
{
    let len = v.len();
    if len < 2 {
        return v.to_vec();
    }

    let (left, right) = v.split_at(len / 2);

    let left_sorted = mergesort_impl::<T, F, M>(left, compare);
    let right_sorted = mergesort_impl::<T, F, M>(right, compare);

    M::merge(&left_sorted, &right_sorted, &mut |a: &T, b: &T| {
        compare(a, b) != Ordering::Greater
    })
}
