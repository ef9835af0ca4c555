/// Generates a `SortImpl` type for the enclosing module, so the generic test suite and the
/// benchmarks can drive it through [`sort_test_tools::Sort`].
///
/// The module must provide `sort` and `sort_by` that reorder a slice in place, or with the
/// `copying` marker, `sorted` and `sorted_by` that return a new `Vec`. Copying sorts write their
/// result back into the caller's buffer.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
    ($name:expr, copying) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                let out = sorted(arr);
                arr.clone_from_slice(&out);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                let out = sorted_by(arr, compare);
                arr.clone_from_slice(&out);
            }
        }
    };
}

pub mod showcase;
pub mod stable;
