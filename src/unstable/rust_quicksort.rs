//! Randomized quicksort producing a new `Vec`.
//!
//! The pivot is picked uniformly at random. Elements are partitioned three ways (less, equal,
//! greater), so inputs with many duplicates only keep partitioning the strictly smaller and
//! strictly greater parts and the expected number of partition levels stays O(log n).

use std::cmp::Ordering;

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

sort_impl!("rust_quicksort_unstable");

#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sort_by(v, |a, b| a.cmp(b))
}

#[inline]
pub fn sort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut rng = thread_rng();
    let mut out = Vec::with_capacity(v.len());
    quicksort(v, &mut out, &mut compare, &mut rng);

    out
}

// --- Private ---

enum Step<T> {
    Sort(Vec<T>),
    Emit(Vec<T>),
}

// Pending work lives on the heap, a comparator that always answers Less would otherwise recurse
// once per element.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn quicksort<T, F>(v: &[T], out: &mut Vec<T>, compare: &mut F, rng: &mut ThreadRng)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut steps = vec![Step::Sort(v.to_vec())];

    while let Some(step) = steps.pop() {
        match step {
            Step::Emit(mut run) => out.append(&mut run),
            Step::Sort(mut part) if part.len() < 2 => out.append(&mut part),
            Step::Sort(part) => {
                let (less, equal, greater) = partition(part, compare, rng);

                // Popped in reverse.
                steps.push(Step::Sort(greater));
                steps.push(Step::Emit(equal));
                steps.push(Step::Sort(less));
            }
        }
    }
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(
    part: Vec<T>,
    compare: &mut F,
    rng: &mut ThreadRng,
) -> (Vec<T>, Vec<T>, Vec<T>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut rest = part;
    let pivot = rest.swap_remove(rng.gen_range(0..rest.len()));

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for elem in rest {
        match compare(&elem, &pivot) {
            Ordering::Less => less.push(elem),
            Ordering::Equal => equal.push(elem),
            Ordering::Greater => greater.push(elem),
        }
    }

    // The pivot is never part of `less` or `greater`, each part is smaller than the input.
    equal.push(pivot);

    (less, equal, greater)
}
