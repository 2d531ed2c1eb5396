/// Gap shrink factor 1.3, applied as `gap * 10 / 13`.
pub const SHRINK_NUMERATOR: usize = 10;
pub const SHRINK_DENOMINATOR: usize = 13;

pub fn sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    let mut gap = len;
    let mut sorted = false;

    while !sorted {
        gap = shrink_gap(gap);
        if gap > 1 {
            sorted = false;
        } else {
            gap = 1;
            sorted = true;
        }

        for i in 0..len.saturating_sub(gap) {
            if data[i] > data[i + gap] {
                data.swap(i, i + gap);
                sorted = false;
            }
        }
    }
}

/// Truncating `gap / 1.3` without overflowing on large gaps.
#[inline]
pub fn shrink_gap(gap: usize) -> usize {
    gap / SHRINK_DENOMINATOR * SHRINK_NUMERATOR
        + gap % SHRINK_DENOMINATOR * SHRINK_NUMERATOR / SHRINK_DENOMINATOR
}
