pub mod rust_quicksort;
