use crate::convention::{Convention, DEFAULT_CONVENTION};
use crate::error::Error;
use crate::weight::Weight;

/// Find the bucket holding `query` under [`DEFAULT_CONVENTION`].
///
/// Queries at or past the last boundary are clamped to the last bucket.
///
/// # Example
///
/// ```
/// use prefix_buckets::search_bucket;
///
/// let boundaries = [15u64, 20, 35, 40, 55, 60, 75];
/// assert_eq!(search_bucket(&boundaries, 14), Ok(0));
/// assert_eq!(search_bucket(&boundaries, 15), Ok(1));
/// assert_eq!(search_bucket(&boundaries, 99), Ok(6));
/// ```
#[inline]
pub fn search_bucket<W: Weight>(boundaries: &[W], query: W) -> Result<usize, Error> {
    search_bucket_with(boundaries, query, DEFAULT_CONVENTION)
}

/// Find the bucket holding `query` under the given convention.
///
/// Fails with [`Error::IndexOutOfRange`] when `boundaries` is empty.
#[inline]
pub fn search_bucket_with<W: Weight>(
    boundaries: &[W],
    query: W,
    convention: Convention,
) -> Result<usize, Error> {
    if boundaries.is_empty() {
        return Err(Error::IndexOutOfRange { index: 0, len: 0 });
    }
    Ok(straddle_search(boundaries, query, convention))
}

/// Binary search for the index whose boundary is above `query` while its
/// predecessor is not. `boundaries` must be non-empty and non-decreasing.
#[inline]
pub(crate) fn straddle_search<W: Weight>(
    boundaries: &[W],
    query: W,
    convention: Convention,
) -> usize {
    debug_assert!(!boundaries.is_empty());

    if query.is_zero() {
        return 0;
    }

    let last = boundaries.len() - 1;
    let mut low = 0usize;
    let mut high = last;

    while low <= high {
        let mid = low + (high - low) / 2;

        if convention.is_above(boundaries[mid], query) {
            // mid == 0 has no predecessor bound
            if mid == 0 || !convention.is_above(boundaries[mid - 1], query) {
                return mid;
            }
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(?query, bucket = last, "query past final boundary, clamped");

    last
}

/// Check that `answer` lies in bucket `bucket_index` under
/// [`DEFAULT_CONVENTION`].
///
/// # Example
///
/// ```
/// use prefix_buckets::{validate, Error};
///
/// let boundaries = [15u64, 20, 35, 40, 55, 60, 75];
/// assert_eq!(validate(&boundaries, 19, 1), Ok(true));
/// assert_eq!(validate(&boundaries, 75, 6), Ok(false));
/// assert_eq!(
///     validate(&boundaries, 0, 7),
///     Err(Error::IndexOutOfRange { index: 7, len: 7 })
/// );
/// ```
#[inline]
pub fn validate<W: Weight>(boundaries: &[W], answer: W, bucket_index: usize) -> Result<bool, Error> {
    validate_with(boundaries, answer, bucket_index, DEFAULT_CONVENTION)
}

/// Check that `answer` lies in bucket `bucket_index` under the given
/// convention.
#[inline]
pub fn validate_with<W: Weight>(
    boundaries: &[W],
    answer: W,
    bucket_index: usize,
    convention: Convention,
) -> Result<bool, Error> {
    let Some(&upper) = boundaries.get(bucket_index) else {
        return Err(Error::IndexOutOfRange {
            index: bucket_index,
            len: boundaries.len(),
        });
    };
    let lower = bucket_index.checked_sub(1).map(|i| boundaries[i]);

    Ok(convention.contains(lower, upper, answer))
}
