use std::cmp::Ordering;

/// Merges two individually sorted slices into a new sorted `Vec`.
///
/// Neither input is checked for sortedness. If either one isn't sorted the output won't be
/// either, but it will still contain every element of `x` and `y` exactly once.
///
/// On equal elements the one from `x` is emitted first.
#[inline]
pub fn merge<T>(x: &[T], y: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_by(x, y, |a, b| a.cmp(b))
}

#[inline]
pub fn merge_by<T, F>(x: &[T], y: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_impl(x, y, &mut |a: &T, b: &T| compare(a, b) != Ordering::Greater)
}

/// Textbook formulation of [`merge`], one call per emitted element.
///
/// Produces exactly the same output as [`merge`], but the recursion depth is `x.len() +
/// y.len()`. Large inputs will exhaust the stack.
#[inline]
pub fn merge_recursive<T>(x: &[T], y: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_recursive_by(x, y, |a, b| a.cmp(b))
}

#[inline]
pub fn merge_recursive_by<T, F>(x: &[T], y: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(x.len() + y.len());
    merge_recursive_impl(x, y, &mut out, &mut |a: &T, b: &T| {
        compare(a, b) != Ordering::Greater
    });

    out
}

// --- Private ---

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_impl<T, F>(x: &[T], y: &[T], is_less_or_equal: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if x.is_empty() {
        return y.to_vec();
    }
    if y.is_empty() {
        return x.to_vec();
    }

    let mut out = Vec::with_capacity(x.len() + y.len());

    let mut left = 0;
    let mut right = 0;

    while left < x.len() && right < y.len() {
        // Ties go to the left side.
        if is_less_or_equal(&x[left], &y[right]) {
            out.push(x[left].clone());
            left += 1;
        } else {
            out.push(y[right].clone());
            right += 1;
        }
    }

    // At most one of these is non-empty.
    out.extend_from_slice(&x[left..]);
    out.extend_from_slice(&y[right..]);

    out
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_recursive_impl<T, F>(
    x: &[T],
    y: &[T],
    out: &mut Vec<T>,
    is_less_or_equal: &mut F,
) where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    match (x.split_first(), y.split_first()) {
        (None, _) => out.extend_from_slice(y),
        (_, None) => out.extend_from_slice(x),
        (Some((x_head, x_tail)), Some((y_head, y_tail))) => {
            if is_less_or_equal(x_head, y_head) {
                out.push(x_head.clone());
                merge_recursive_impl(x_tail, y, out, is_less_or_equal);
            } else {
                out.push(y_head.clone());
                merge_recursive_impl(x, y_tail, out, is_less_or_equal);
            }
        }
    }
}
