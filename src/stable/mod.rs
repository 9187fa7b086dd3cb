pub mod rust_mergesort;
pub mod rust_mergesort_recursive;
pub mod rust_std;
