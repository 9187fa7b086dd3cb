pub use dpv_mergesort::Sort;

pub mod patterns;
