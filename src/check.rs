use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError<T: Debug> {
    #[error("index {index} = {value:?} is out of order, {previous:?} is greater")]
    OutOfOrder { index: usize, value: T, previous: T },
}

/// Scans adjacent pairs once and reports the first element that is strictly less than its
/// predecessor.
pub fn check_sorted<T>(v: &[T]) -> Result<(), CheckError<T>>
where
    T: Ord + Clone + Debug,
{
    match v.windows(2).position(|w| w[1] < w[0]) {
        Some(pos) => Err(CheckError::OutOfOrder {
            index: pos + 1,
            value: v[pos + 1].clone(),
            previous: v[pos].clone(),
        }),
        None => Ok(()),
    }
}

pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
