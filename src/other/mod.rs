//! Integer only sorts. They don't go through a comparison function, so they can't implement
//! [`crate::Sort`].

pub mod rust_counting_sort;
pub mod rust_radix_sort;
