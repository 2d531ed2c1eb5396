use num_traits::PrimInt;

use crate::SortError;

/// Converts a caller-supplied element count into the length of the prefix to sort.
#[inline]
pub(crate) fn checked_extent<I: PrimInt>(len: usize, elements: I) -> Result<usize, SortError> {
    let count = elements.to_usize().ok_or(SortError::InvalidCount)?;
    if count > len {
        return Err(SortError::CountExceedsLength { count, len });
    }
    Ok(count)
}

#[inline]
pub(crate) fn checked_index<I: PrimInt>(len: usize, index: I) -> Result<usize, SortError> {
    let index = index.to_usize().ok_or(SortError::InvalidIndex)?;
    if index >= len {
        return Err(SortError::IndexOutOfBounds { index, len });
    }
    Ok(index)
}

#[inline]
#[track_caller]
pub(crate) fn extent<I: PrimInt>(len: usize, elements: I) -> usize {
    match checked_extent(len, elements) {
        Ok(count) => count,
        Err(err) => panic!("{err}"),
    }
}

#[inline]
#[track_caller]
pub(crate) fn index<I: PrimInt>(len: usize, index: I) -> usize {
    match checked_index(len, index) {
        Ok(index) => index,
        Err(err) => panic!("{err}"),
    }
}
