use std::mem;

const RADIX_BITS: u32 = 8;
const RADIX: usize = 1 << RADIX_BITS;

/// Least significant digit radix sort, one counting pass per byte.
///
/// Handles the full `i32` range, negative values included.
pub fn sort(v: &[i32]) -> Vec<i32> {
    let mut src = v.to_vec();
    let mut dst = vec![0; v.len()];

    for shift in (0..i32::BITS).step_by(RADIX_BITS as usize) {
        let mut counts = [0usize; RADIX];
        for &val in &src {
            counts[digit(val, shift)] += 1;
        }

        // All values share this digit, the pass would be a plain copy.
        if counts.iter().any(|&count| count == src.len()) {
            continue;
        }

        let mut offsets = [0usize; RADIX];
        let mut sum = 0;
        for (offset, count) in offsets.iter_mut().zip(counts.iter()) {
            *offset = sum;
            sum += count;
        }

        for &val in &src {
            let d = digit(val, shift);
            dst[offsets[d]] = val;
            offsets[d] += 1;
        }

        mem::swap(&mut src, &mut dst);
    }

    src
}

#[inline]
fn digit(val: i32, shift: u32) -> usize {
    // Flipping the sign bit maps i32 order onto u32 order.
    let key = (val as u32) ^ (1 << 31);
    ((key >> shift) as usize) & (RADIX - 1)
}
