use std::iter;

use thiserror::Error;

/// Largest `max - min + 1` the count table is allowed to cover.
pub const MAX_KEY_SPAN: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value range {min}..={max} is too wide for counting sort")]
pub struct RangeTooWide {
    pub min: i32,
    pub max: i32,
}

/// Counting sort over the value range `min..=max` of `v`.
///
/// Memory is proportional to `max - min + 1`, ranges above [`MAX_KEY_SPAN`] are rejected.
pub fn sort(v: &[i32]) -> Result<Vec<i32>, RangeTooWide> {
    let (Some(&min), Some(&max)) = (v.iter().min(), v.iter().max()) else {
        return Ok(Vec::new());
    };

    let span = (max as i64 - min as i64) as usize + 1;
    if span > MAX_KEY_SPAN {
        return Err(RangeTooWide { min, max });
    }

    let mut counts = vec![0usize; span];
    for &val in v {
        counts[(val as i64 - min as i64) as usize] += 1;
    }

    let mut out = Vec::with_capacity(v.len());
    for (offset, &count) in counts.iter().enumerate() {
        let val = (min as i64 + offset as i64) as i32;
        out.extend(iter::repeat(val).take(count));
    }

    Ok(out)
}
