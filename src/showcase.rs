//! The fixed demonstration printed by the `basic_sort_rs` binary.

use std::io::{self, Write};

use crate::stable::{bubble_sort, quick_sort};

pub const SHOWCASE_INPUT: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Writes the original input followed by the bubble sort and quicksort results, one per line.
///
/// Each sort gets its own copy of [`SHOWCASE_INPUT`].
pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    let original = SHOWCASE_INPUT.to_vec();
    writeln!(out, "Original: {:?}", original)?;

    let mut bubble_input = original.clone();
    writeln!(out, "Bubble sort: {:?}", bubble_sort::sort(&mut bubble_input))?;

    let quick_input = original.clone();
    writeln!(out, "Quick sort: {:?}", quick_sort::sorted(&quick_input))?;

    Ok(())
}
