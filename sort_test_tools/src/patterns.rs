//! Input shapes for the test suite and the benchmarks.
//!
//! Random values are drawn through [`generate_input`], the same seeded generator the command
//! line self-check uses. All of them derive from one seed per process, set `OVERRIDE_SEED` to
//! replay a failure.

use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;

use dpv_mergesort::driver::generate_input;
use once_cell::sync::OnceCell;
use rand::{thread_rng, Rng};

pub fn random(len: usize) -> Vec<i32> {
    random_uniform(len, i32::MIN..=i32::MAX)
}

pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    generate_input(len, *range.start(), *range.end(), random_init_seed())
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `run_count` sorted runs of random values, alternating between ascending and descending.
pub fn saw_mixed(len: usize, run_count: usize) -> Vec<i32> {
    let mut vals = random(len);
    let run_len = len.div_ceil(run_count.max(1)).max(1);

    for (i, run) in vals.chunks_mut(run_len).enumerate() {
        sort_run(run, i % 2 == 1);
    }

    vals
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);

    let (up, down) = vals.split_at_mut(len / 2);
    sort_run(up, false);
    sort_run(down, true);

    vals
}

pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| u64::from_str(&seed).ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn sort_run(run: &mut [i32], descending: bool) {
    run.sort_unstable();
    if descending {
        run.reverse();
    }
}
