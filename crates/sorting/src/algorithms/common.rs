/// Reverses the slice by swapping symmetric pairs; the middle element of an
/// odd-length slice stays where it is.
#[inline]
pub fn reverse<T>(data: &mut [T]) {
    let len = data.len();
    let midpoint = len / 2;
    for i in 0..midpoint {
        data.swap(i, len - 1 - i);
    }
}

/// Merges the sorted runs `data[..split]` and `data[split..]` back into `data`.
///
/// Both runs are copied into scratch buffers sized to the run, which are
/// dropped when the merge returns. Ties take the left run first.
pub fn merge<T: Ord + Clone>(data: &mut [T], split: usize) {
    debug_assert!(split <= data.len());

    let left = data[..split].to_vec();
    let right = data[split..].to_vec();

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    if i < left.len() {
        data[k..].clone_from_slice(&left[i..]);
    } else if j < right.len() {
        data[k..].clone_from_slice(&right[j..]);
    }
}
