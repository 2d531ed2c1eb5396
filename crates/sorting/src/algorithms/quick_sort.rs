pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    quick_sort_recursive(data);
}

/// Hoare partition around the element at `len / 2`, then recursion on both
/// sides. Positional pivot: adversarial inputs take O(n^2) time.
pub fn quick_sort_recursive<T: Ord + Clone>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    // Pivot is held by value; its slot may be overwritten by the swaps below.
    let pivot = data[len / 2].clone();
    let mut first = 0usize;
    // One past `last`, so that `last` stepping below zero is `end == 0`.
    let mut end = len;

    while first < end {
        while data[first] < pivot {
            first += 1;
        }
        while data[end - 1] > pivot {
            end -= 1;
        }
        if first < end {
            data.swap(first, end - 1);
            first += 1;
            end -= 1;
        }
    }

    let (left, right) = data.split_at_mut(first);
    quick_sort_recursive(&mut left[..end]);
    quick_sort_recursive(right);
}
