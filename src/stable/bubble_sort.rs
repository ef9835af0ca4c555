use std::cmp::Ordering;

sort_impl!("bubble_sort_stable");

/// Sorts the slice in place and returns it.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and *O*(*n*^2) in every
/// case. Pass `i` moves the largest of the first `n - i` elements to index `n - i - 1`. There is
/// no early exit for already sorted input.
///
/// The caller's slice is modified. Sort a copy if the original order is still needed.
#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    bubble_sort(v, |a, b| a.gt(b))
}

/// Sorts the slice in place with a comparator function and returns it.
///
/// Two neighbours are swapped only when `compare` reports [`Ordering::Greater`] for them.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, |a, b| compare(a, b) == Ordering::Greater)
}

fn bubble_sort<T, F>(v: &mut [T], mut is_greater: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        for j in 0..(len - i - 1) {
            if is_greater(&v[j], &v[j + 1]) {
                v.swap(j, j + 1);
            }
        }
    }

    v
}
