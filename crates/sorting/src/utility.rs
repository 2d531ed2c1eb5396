//! Building blocks shared by the sorts, exposed for direct use.
//!
//! Ranges here are inclusive `[lower, upper]`, addressed with the caller's
//! index type. A range with `upper <= lower` holds at most one element and is
//! returned untouched without looking at the bounds, so `inner_quick(data, 0, -1)`
//! is a valid no-op for signed index types.

use num_traits::PrimInt;

use crate::SortError;
use crate::algorithms::{common, merge_sort, quick_sort};
use crate::bounds;

/// Exchanges `data[alpha]` and `data[beta]`.
///
/// # Panics
///
/// If either index is negative or not less than `data.len()`.
#[track_caller]
pub fn swap<T, I: PrimInt>(data: &mut [T], alpha: I, beta: I) {
    let len = data.len();
    data.swap(bounds::index(len, alpha), bounds::index(len, beta));
}

/// Checked form of [`swap`].
pub fn try_swap<T, I: PrimInt>(data: &mut [T], alpha: I, beta: I) -> Result<(), SortError> {
    let len = data.len();
    let alpha = bounds::checked_index(len, alpha)?;
    let beta = bounds::checked_index(len, beta)?;
    data.swap(alpha, beta);
    Ok(())
}

/// Reverses `data[..elements]` in place with `elements / 2` swaps.
#[track_caller]
pub fn reverse<T, I: PrimInt>(data: &mut [T], elements: I) -> &mut [T] {
    let count = bounds::extent(data.len(), elements);
    common::reverse(&mut data[..count]);
    data
}

/// Quick sorts the inclusive range `[lower, upper]`.
#[track_caller]
pub fn inner_quick<T: Ord + Clone, I: PrimInt>(data: &mut [T], lower: I, upper: I) -> &mut [T] {
    if upper <= lower {
        return data;
    }
    let (lower, upper) = inclusive_range(data.len(), lower, upper);
    quick_sort::quick_sort_recursive(&mut data[lower..=upper]);
    data
}

/// Merge sorts the inclusive range `[left, right]`.
#[track_caller]
pub fn inner_merge<T: Ord + Clone, I: PrimInt>(data: &mut [T], left: I, right: I) -> &mut [T] {
    if right <= left {
        return data;
    }
    let (left, right) = inclusive_range(data.len(), left, right);
    merge_sort::merge_sort_recursive(&mut data[left..=right]);
    data
}

/// Merges the sorted runs `[left, middle]` and `[middle + 1, right]`.
///
/// # Panics
///
/// If `middle` is outside `[left, right]` or `right` is out of bounds.
#[track_caller]
pub fn merge<T: Ord + Clone, I: PrimInt>(data: &mut [T], left: I, middle: I, right: I) {
    if right <= left {
        return;
    }
    let (left, right) = inclusive_range(data.len(), left, right);
    let middle = bounds::index(data.len(), middle);
    assert!(
        (left..=right).contains(&middle),
        "merge midpoint {middle} outside [{left}, {right}]"
    );
    common::merge(&mut data[left..=right], middle - left + 1);
}

#[track_caller]
fn inclusive_range<I: PrimInt>(len: usize, lower: I, upper: I) -> (usize, usize) {
    (bounds::index(len, lower), bounds::index(len, upper))
}
