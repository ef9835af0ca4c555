use basic_sort_rs::showcase::{self, SHOWCASE_INPUT};
use basic_sort_rs::stable::{bubble_sort, quick_sort};

const SHOWCASE_SORTED: [i32; 7] = [11, 12, 22, 25, 34, 64, 90];

#[test]
fn showcase_input() {
    let mut v = SHOWCASE_INPUT;
    assert_eq!(bubble_sort::sort(&mut v), SHOWCASE_SORTED);
    assert_eq!(quick_sort::sorted(&SHOWCASE_INPUT), SHOWCASE_SORTED);
}

#[test]
fn duplicates() {
    let mut v = [5, 3, 3, 1];
    assert_eq!(bubble_sort::sort(&mut v), [1, 3, 3, 5]);
    assert_eq!(quick_sort::sorted(&[5, 3, 3, 1]), [1, 3, 3, 5]);
}

#[test]
fn already_sorted() {
    let mut v = [1, 2, 3];
    assert_eq!(bubble_sort::sort(&mut v), [1, 2, 3]);
    assert_eq!(quick_sort::sorted(&[1, 2, 3]), [1, 2, 3]);
}

#[test]
fn empty_and_single() {
    let mut empty: [i32; 0] = [];
    assert!(bubble_sort::sort(&mut empty).is_empty());
    assert!(quick_sort::sorted::<i32>(&[]).is_empty());

    let mut single = [42];
    assert_eq!(bubble_sort::sort(&mut single), [42]);
    assert_eq!(quick_sort::sorted(&[42]), [42]);
}

#[test]
fn bubble_sort_mutates_caller_slice() {
    let mut v = vec![64, 34, 25, 12, 22, 11, 90];
    let ptr = v.as_ptr();

    let returned = bubble_sort::sort(&mut v);
    assert_eq!(returned.as_ptr(), ptr);

    assert_eq!(v, SHOWCASE_SORTED);
}

#[test]
fn quick_sort_leaves_input_untouched() {
    let v = vec![64, 34, 25, 12, 22, 11, 90];

    let sorted = quick_sort::sorted(&v);

    assert_eq!(sorted, SHOWCASE_SORTED);
    assert_eq!(v, SHOWCASE_INPUT);
    assert_ne!(sorted.as_ptr(), v.as_ptr());
}

#[test]
fn quick_sort_all_equal() {
    let v = vec![7; 9];
    assert_eq!(quick_sort::sorted(&v), v);
}

fn top_level_pivots(v: &[i32]) -> Vec<i32> {
    let mut pivots = Vec::new();
    quick_sort::sorted_by(v, |a: &i32, b: &i32| {
        pivots.push(*b);
        a.cmp(b)
    });

    // The first `len - 1` comparisons partition the whole input against one pivot.
    pivots.truncate(v.len() - 1);
    pivots
}

#[test]
fn quick_sort_pivot_is_middle_element() {
    let odd = [40, 10, 30, 20, 50];
    assert_eq!(top_level_pivots(&odd), [30; 4]);

    let even = [40, 10, 30, 20, 50, 60];
    assert_eq!(top_level_pivots(&even), [20; 5]);

    let showcase = SHOWCASE_INPUT;
    assert_eq!(top_level_pivots(&showcase), [12; 6]);
}

#[test]
fn bubble_sort_has_no_early_exit() {
    let count_comparisons = |v: &mut [i32]| {
        let mut comp_count = 0usize;
        bubble_sort::sort_by(v, |a, b| {
            comp_count += 1;
            a.cmp(b)
        });
        comp_count
    };

    let mut ascending = [1, 2, 3, 4, 5, 6, 7];
    assert_eq!(count_comparisons(&mut ascending), 21);

    let mut descending = [7, 6, 5, 4, 3, 2, 1];
    assert_eq!(count_comparisons(&mut descending), 21);
    assert_eq!(descending, [1, 2, 3, 4, 5, 6, 7]);

    let mut equal = [9; 10];
    assert_eq!(count_comparisons(&mut equal), 45);
}

#[test]
fn sort_by_descending() {
    let mut v = ["dog", "cat", "elephant", "ant", "bear"];
    bubble_sort::sort_by(&mut v, |a, b| b.cmp(a));
    assert_eq!(v, ["elephant", "dog", "cat", "bear", "ant"]);

    let sorted = quick_sort::sorted_by(&["dog", "cat", "elephant", "ant", "bear"], |a, b| {
        b.len().cmp(&a.len()).then(a.cmp(b))
    });
    assert_eq!(sorted, ["elephant", "bear", "ant", "cat", "dog"]);
}

#[test]
fn quick_sort_terminates_with_inconsistent_comparator() {
    use std::cmp::Ordering;

    let v = (0..64).collect::<Vec<i32>>();

    // Never reports equality, not even for an element and itself.
    let sorted = quick_sort::sorted_by(&v, |a, b| {
        if (a ^ b) & 1 == 0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });

    let mut check = sorted.clone();
    check.sort();
    assert_eq!(check, v);
}

#[test]
fn report_output() {
    let mut out = Vec::new();
    showcase::write_report(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Original: [64, 34, 25, 12, 22, 11, 90]\n\
         Bubble sort: [11, 12, 22, 25, 34, 64, 90]\n\
         Quick sort: [11, 12, 22, 25, 34, 64, 90]\n"
    );
}
