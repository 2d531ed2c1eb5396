use super::common;

pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    merge_sort_recursive(data);
}

/// Top-down merge sort: split after the midpoint `(len - 1) / 2`, sort both
/// halves, merge through per-step scratch buffers.
pub fn merge_sort_recursive<T: Ord + Clone>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let split = (len - 1) / 2 + 1;
    {
        let (left, right) = data.split_at_mut(split);
        merge_sort_recursive(left);
        merge_sort_recursive(right);
    }
    common::merge(data, split);
}
