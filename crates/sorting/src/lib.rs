mod algorithms;
mod bounds;
mod error;

pub mod utility;

use num_traits::PrimInt;

pub use algorithms::comb_sort::{SHRINK_DENOMINATOR, SHRINK_NUMERATOR};
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Comb,
    Quick,
    Merge,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 6] = [
    SortAlgorithm::Bubble,
    SortAlgorithm::Selection,
    SortAlgorithm::Insertion,
    SortAlgorithm::Comb,
    SortAlgorithm::Quick,
    SortAlgorithm::Merge,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Bubble => "bubble_sort",
        SortAlgorithm::Selection => "selection_sort",
        SortAlgorithm::Insertion => "insertion_sort",
        SortAlgorithm::Comb => "comb_sort",
        SortAlgorithm::Quick => "quick_sort",
        SortAlgorithm::Merge => "merge_sort",
    }
}

/// Whether equal elements keep their relative order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge
    )
}

/// Sorts `data[..elements]` with adjacent swaps until a pass makes none. Stable.
///
/// # Panics
///
/// If `elements` is negative or greater than `data.len()`.
#[track_caller]
pub fn bubble_sort<T: Ord, I: PrimInt>(data: &mut [T], elements: I) -> &mut [T] {
    let count = bounds::extent(data.len(), elements);
    algorithms::bubble_sort::sort(&mut data[..count]);
    data
}

/// Sorts `data[..elements]` by repeatedly swapping the first minimum of the
/// unsorted suffix into place. Not stable.
#[track_caller]
pub fn selection_sort<T: Ord, I: PrimInt>(data: &mut [T], elements: I) -> &mut [T] {
    let count = bounds::extent(data.len(), elements);
    algorithms::selection_sort::sort(&mut data[..count]);
    data
}

/// Sorts `data[..elements]` by swapping each element backward past larger
/// neighbours. Stable, linear on sorted input.
#[track_caller]
pub fn insertion_sort<T: Ord, I: PrimInt>(data: &mut [T], elements: I) -> &mut [T] {
    let count = bounds::extent(data.len(), elements);
    algorithms::insertion_sort::sort(&mut data[..count]);
    data
}

/// Sorts `data[..elements]` comparing elements a shrinking gap apart; the
/// gap is divided by 1.3 (truncating) every pass and ends as a bubble pass.
#[track_caller]
pub fn comb_sort<T: Ord, I: PrimInt>(data: &mut [T], elements: I) -> &mut [T] {
    let count = bounds::extent(data.len(), elements);
    algorithms::comb_sort::sort(&mut data[..count]);
    data
}

/// Sorts `data[..elements]` with Hoare partitioning around the middle element.
#[track_caller]
pub fn quick_sort<T: Ord + Clone, I: PrimInt>(data: &mut [T], elements: I) -> &mut [T] {
    let count = bounds::extent(data.len(), elements);
    algorithms::quick_sort::sort(&mut data[..count]);
    data
}

/// Sorts `data[..elements]` with top-down merge sort. Stable.
#[track_caller]
pub fn merge_sort<T: Ord + Clone, I: PrimInt>(data: &mut [T], elements: I) -> &mut [T] {
    let count = bounds::extent(data.len(), elements);
    algorithms::merge_sort::sort(&mut data[..count]);
    data
}

#[track_caller]
pub fn sort<T: Ord + Clone, I: PrimInt>(
    algo: SortAlgorithm,
    data: &mut [T],
    elements: I,
) -> &mut [T] {
    let count = bounds::extent(data.len(), elements);
    sort_prefix(algo, &mut data[..count]);
    data
}

/// Like [`sort`], but reports a bad `elements` instead of panicking.
pub fn try_sort<T: Ord + Clone, I: PrimInt>(
    algo: SortAlgorithm,
    data: &mut [T],
    elements: I,
) -> Result<&mut [T], SortError> {
    let count = bounds::checked_extent(data.len(), elements)?;
    sort_prefix(algo, &mut data[..count]);
    Ok(data)
}

fn sort_prefix<T: Ord + Clone>(algo: SortAlgorithm, data: &mut [T]) {
    match algo {
        SortAlgorithm::Bubble => algorithms::bubble_sort::sort(data),
        SortAlgorithm::Selection => algorithms::selection_sort::sort(data),
        SortAlgorithm::Insertion => algorithms::insertion_sort::sort(data),
        SortAlgorithm::Comb => algorithms::comb_sort::sort(data),
        SortAlgorithm::Quick => algorithms::quick_sort::sort(data),
        SortAlgorithm::Merge => algorithms::merge_sort::sort(data),
    }
}
