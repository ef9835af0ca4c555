use std::cmp::Ordering;

sort_impl!("quick_sort_3way_stable", copying);

/// Returns a sorted copy of `v`, leaving `v` untouched.
///
/// The pivot is the element at `v.len() / 2`. Every element is put into one of three new buckets,
/// less than, equal to or greater than the pivot, keeping input order inside each bucket. The
/// result is `sorted(less) ++ equal ++ sorted(greater)`.
///
/// This sort is stable. It allocates on every level of recursion, is *O*(*n* \* log(*n*)) on
/// average and *O*(*n*^2) in the worst case, with recursion depth up to *O*(*n*).
#[inline]
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    quick_sort(v, &mut |a: &T, b: &T| a.cmp(b))
}

/// Returns a copy of `v` sorted with a comparator function, leaving `v` untouched.
///
/// If `compare` does not implement a total order the resulting order is unspecified, but the
/// result is still a permutation of `v`.
#[inline]
pub fn sorted_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort(v, &mut compare)
}

fn quick_sort<T, F>(v: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return v.to_vec();
    }

    let pivot_pos = len / 2;
    let pivot = &v[pivot_pos];

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for (i, elem) in v.iter().enumerate() {
        // The pivot lands in `equal` without a comparison, so both recursive calls see fewer
        // than `len` elements.
        if i == pivot_pos {
            equal.push(elem.clone());
            continue;
        }

        match compare(elem, pivot) {
            Ordering::Less => less.push(elem.clone()),
            Ordering::Equal => equal.push(elem.clone()),
            Ordering::Greater => greater.push(elem.clone()),
        }
    }

    let mut out = quick_sort(&less, compare);
    out.reserve(len - out.len());
    out.extend(equal);
    out.extend(quick_sort(&greater, compare));

    out
}
