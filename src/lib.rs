use std::cmp::Ordering;

/// Common interface over the sort implementations, used by the test suite, the benchmarks
/// and the fuzz target.
///
/// Implementations never modify their input, the sorted result is a freshly allocated `Vec`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &[T]) -> Vec<T>
            where
                T: Ord + Clone,
            {
                sort(v)
            }

            #[inline]
            fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(v, compare)
            }
        }
    };
}

pub mod check;
pub mod driver;
pub mod merge;
pub mod mergesort;
pub mod other;
pub mod stable;
pub mod unstable;
