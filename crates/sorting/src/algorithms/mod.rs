pub(crate) mod bubble_sort;
pub(crate) mod comb_sort;
pub(crate) mod common;
pub(crate) mod insertion_sort;
pub(crate) mod merge_sort;
pub(crate) mod quick_sort;
pub(crate) mod selection_sort;
