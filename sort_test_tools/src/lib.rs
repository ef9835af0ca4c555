use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;

/// Expands into one `#[test]` per check in [`tests`], and per value type for the pattern checks.
///
/// ```ignore
/// type TestSort = my_crate::my_sort::SortImpl;
/// instantiate_sort_tests!(TestSort);
/// ```
#[macro_export]
macro_rules! instantiate_sort_tests {
    (@untyped $sort_impl:ty, [$($test_fn:ident),*]) => {
        $(
            #[test]
            fn $test_fn() {
                $crate::tests::$test_fn::<$sort_impl>();
            }
        )*
    };
    (@typed $sort_impl:ty, [$($test_fn:ident),*], $types:tt) => {
        $(
            $crate::instantiate_sort_tests!(@typed_one $sort_impl, $test_fn, $types);
        )*
    };
    (@typed_one $sort_impl:ty, $test_fn:ident, [$(($type_name:ident, $type:ty)),*]) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<$test_fn _ $type_name>]() {
                    $crate::tests::$test_fn::<$sort_impl, $type>();
                }
            )*
        }
    };
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @untyped $sort_impl,
            [
                basic,
                fixed_seed,
                int_edge,
                stability,
                sort_by_reverse,
                comp_panic,
                name_is_set
            ]
        );
        $crate::instantiate_sort_tests!(
            @typed $sort_impl,
            [
                random,
                random_d4,
                random_d16,
                random_z1,
                all_equal,
                ascending,
                descending,
                ascending_saw,
                descending_saw,
                pipe_organ
            ],
            [
                (i32, i32),
                (u64, u64),
                (string, String),
                (large_val, $crate::tests::LargeStackVal)
            ]
        );
    };
}
