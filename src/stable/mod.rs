// Adjacent swaps only, O(n^2) with no early exit.
pub mod bubble_sort;

// Middle pivot, three-way partition into freshly allocated buckets.
// Leaves its input untouched and returns a new Vec.
pub mod quick_sort;
