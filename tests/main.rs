mod rust_mergesort {
    sort_test_tools::instantiate_sort_tests!(dpv_mergesort::stable::rust_mergesort::SortImpl);
}

mod rust_mergesort_recursive {
    sort_test_tools::instantiate_sort_tests!(
        dpv_mergesort::stable::rust_mergesort_recursive::SortImpl
    );
}

mod rust_std {
    sort_test_tools::instantiate_sort_tests!(dpv_mergesort::stable::rust_std::SortImpl);
}

mod rust_quicksort {
    sort_test_tools::instantiate_sort_tests!(dpv_mergesort::unstable::rust_quicksort::SortImpl);
}
