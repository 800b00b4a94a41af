use crate::convention::Convention;
use crate::weight::Weight;

/// Values covered by one bucket.
///
/// `start` is always the first covered value. Whether `end` itself is
/// covered depends on the convention the range was produced under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketRange<W> {
    pub index: usize,
    pub start: W,
    pub end: W,
    pub convention: Convention,
}

impl<W: Weight> BucketRange<W> {
    /// Range of bucket `index` given the boundary that closes it and the one
    /// before it (`None` for bucket 0).
    #[inline]
    pub(crate) fn new(index: usize, lower: Option<W>, upper: W, convention: Convention) -> Self {
        let start = match (lower, convention) {
            (None, _) => W::zero(),
            (Some(lower), Convention::UpperExclusive) => lower,
            (Some(lower), Convention::UpperInclusive) => {
                debug_assert!(lower < upper, "boundaries must be strictly increasing");
                lower + W::one()
            }
        };
        Self {
            index,
            start,
            end: upper,
            convention,
        }
    }

    /// Whether `end` belongs to this bucket.
    #[inline]
    pub fn end_inclusive(&self) -> bool {
        self.convention == Convention::UpperInclusive
    }

    #[inline]
    pub fn contains(&self, value: W) -> bool {
        value >= self.start && self.convention.is_above(self.end, value)
    }
}
