#![no_main]

use libfuzzer_sys::fuzz_target;

use dpv_mergesort::check::is_sorted;
use dpv_mergesort::merge::merge;
use dpv_mergesort::stable::rust_mergesort as test_sort;

fuzz_target!(|data: &[u8]| {
    let sorted = test_sort::sort(data);

    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(sorted, expected);

    // Splitting anywhere and merging the sorted halves must agree with the full sort.
    let mid = data.first().map_or(0, |&b| b as usize % (data.len() + 1));
    let (left, right) = data.split_at(mid);
    let merged = merge(&test_sort::sort(left), &test_sort::sort(right));
    assert!(is_sorted(&merged));
    assert_eq!(merged, expected);
});
