//! Owned, immutable boundary table.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::boundary::builder::build_boundaries;
use crate::boundary::range::BucketRange;
use crate::convention::{Convention, DEFAULT_CONVENTION};
use crate::error::Error;
use crate::util::search::{straddle_search, validate_with};
use crate::weight::Weight;

/// Cumulative bucket boundaries bundled with the convention used to read
/// them.
///
/// The table is validated once on construction (non-empty, strictly
/// increasing, positive first bound) and never changes afterwards, so it can
/// be shared by reference across threads.
///
/// # Example
///
/// ```
/// use prefix_buckets::Boundaries;
///
/// let table = Boundaries::from_quantities(&[15u64, 5, 15, 5, 15, 5, 15]).unwrap();
///
/// assert_eq!(table.total(), 75);
/// assert_eq!(table.search(14), 0);
/// assert_eq!(table.search(15), 1);
/// assert_eq!(table.search(76), 6);
/// assert_eq!(table.validate(20, 2), Ok(true));
/// ```
///
/// Deserializing with serde or rkyv goes through [`Boundaries::from_boundaries`],
/// so archived data is held to the same checks as freshly built tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "rkyv", derive(rkyv::Archive, rkyv::Serialize))]
pub struct Boundaries<W> {
    bounds: Vec<W>,
    convention: Convention,
}

impl<W: Weight> Boundaries<W> {
    /// Accumulate `quantities` under [`DEFAULT_CONVENTION`].
    pub fn from_quantities(quantities: &[W]) -> Result<Self, Error> {
        Self::from_quantities_with(quantities, DEFAULT_CONVENTION)
    }

    /// Accumulate `quantities` under the given convention.
    pub fn from_quantities_with(quantities: &[W], convention: Convention) -> Result<Self, Error> {
        let bounds = build_boundaries(quantities)?;
        Ok(Self::new_unchecked(bounds, convention))
    }

    /// Wrap precomputed boundaries after checking they could have come from
    /// positive quantities.
    pub fn from_boundaries(bounds: Vec<W>, convention: Convention) -> Result<Self, Error> {
        let Some(&first) = bounds.first() else {
            return Err(Error::EmptyInput);
        };
        if !first.is_positive() {
            return Err(Error::NonPositiveQuantity { position: 0 });
        }
        if let Some(i) = bounds.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::UnsortedBoundaries { position: i + 1 });
        }

        Ok(Self::new_unchecked(bounds, convention))
    }

    fn new_unchecked(bounds: Vec<W>, convention: Convention) -> Self {
        debug_assert!(!bounds.is_empty());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            buckets = bounds.len(),
            total = ?bounds[bounds.len() - 1],
            ?convention,
            "built bucket boundaries"
        );

        Self { bounds, convention }
    }

    /// Bucket holding `query`. Queries past the last boundary land in the
    /// last bucket.
    #[inline]
    pub fn search(&self, query: W) -> usize {
        straddle_search(&self.bounds, query, self.convention)
    }

    /// Whether `answer` lies in bucket `index`.
    #[inline]
    pub fn validate(&self, answer: W, index: usize) -> Result<bool, Error> {
        validate_with(&self.bounds, answer, index, self.convention)
    }

    /// Values covered by bucket `index`.
    pub fn bucket_range(&self, index: usize) -> Result<BucketRange<W>, Error> {
        let upper = *self.bounds.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.bounds.len(),
        })?;
        let lower = index.checked_sub(1).map(|i| self.bounds[i]);
        Ok(BucketRange::new(index, lower, upper, self.convention))
    }

    /// Size of bucket `index` as originally supplied.
    pub fn quantity(&self, index: usize) -> Result<W, Error> {
        let upper = *self.bounds.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.bounds.len(),
        })?;
        match index.checked_sub(1) {
            Some(prev) => {
                let lower = self.bounds[prev];
                debug_assert!(lower < upper, "boundaries must be strictly increasing");
                Ok(upper - lower)
            }
            None => Ok(upper),
        }
    }

    /// Bucket for every query, in order.
    pub fn search_batch(&self, queries: &[W]) -> Vec<usize> {
        queries.iter().map(|&q| self.search(q)).collect()
    }

    /// Bucket for every query, computed on the rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn par_search_batch(&self, queries: &[W]) -> Vec<usize> {
        use rayon::prelude::*;

        queries.par_iter().map(|&q| self.search(q)).collect()
    }

    /// Sum of all quantities; the last boundary.
    #[inline]
    pub fn total(&self) -> W {
        self.bounds[self.bounds.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    #[inline]
    pub fn convention(&self) -> Convention {
        self.convention
    }

    #[inline]
    pub fn as_slice(&self) -> &[W] {
        &self.bounds
    }

    /// Ranges of all buckets, in order.
    pub fn iter(&self) -> Iter<'_, W> {
        Iter {
            table: self,
            front: 0,
            back: self.bounds.len(),
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.bounds.capacity() * core::mem::size_of::<W>()
    }
}

impl<W> AsRef<[W]> for Boundaries<W> {
    fn as_ref(&self) -> &[W] {
        &self.bounds
    }
}

impl<W: Weight> TryFrom<Vec<W>> for Boundaries<W> {
    type Error = Error;

    /// Treats the vector as precomputed boundaries under
    /// [`DEFAULT_CONVENTION`].
    fn try_from(bounds: Vec<W>) -> Result<Self, Error> {
        Self::from_boundaries(bounds, DEFAULT_CONVENTION)
    }
}

/// Unchecked wire shape of [`Boundaries`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Boundaries")]
struct RawBoundaries<W> {
    bounds: Vec<W>,
    convention: Convention,
}

#[cfg(feature = "serde")]
impl<'de, W> serde::Deserialize<'de> for Boundaries<W>
where
    W: Weight + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <RawBoundaries<W> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_boundaries(raw.bounds, raw.convention).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "rkyv")]
impl<W, D> rkyv::Deserialize<Boundaries<W>, D> for ArchivedBoundaries<W>
where
    W: Weight + rkyv::Archive,
    W::Archived: rkyv::Deserialize<W, D>,
    D: rkyv::rancor::Fallible + ?Sized,
    D::Error: rkyv::rancor::Source,
{
    fn deserialize(&self, deserializer: &mut D) -> Result<Boundaries<W>, D::Error> {
        let bounds: Vec<W> = rkyv::Deserialize::deserialize(&self.bounds, deserializer)?;
        let convention: Convention =
            rkyv::Deserialize::deserialize(&self.convention, deserializer)?;
        Boundaries::from_boundaries(bounds, convention)
            .map_err(<D::Error as rkyv::rancor::Source>::new)
    }
}

impl<'a, W: Weight> IntoIterator for &'a Boundaries<W> {
    type Item = BucketRange<W>;
    type IntoIter = Iter<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the [`BucketRange`]s of a [`Boundaries`] table.
#[derive(Clone, Debug)]
pub struct Iter<'a, W> {
    table: &'a Boundaries<W>,
    front: usize,
    back: usize,
}

impl<W: Weight> Iter<'_, W> {
    fn range_at(&self, index: usize) -> BucketRange<W> {
        let bounds = &self.table.bounds;
        let lower = index.checked_sub(1).map(|i| bounds[i]);
        BucketRange::new(index, lower, bounds[index], self.table.convention)
    }
}

impl<W: Weight> Iterator for Iter<'_, W> {
    type Item = BucketRange<W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let range = self.range_at(self.front);
        self.front += 1;
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<W: Weight> DoubleEndedIterator for Iter<'_, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.range_at(self.back))
    }
}

impl<W: Weight> ExactSizeIterator for Iter<'_, W> {}

impl<W: Weight> FusedIterator for Iter<'_, W> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Boundaries<u64> {
        Boundaries::from_quantities(&[15, 5, 15, 5, 15, 5, 15]).unwrap()
    }

    #[test]
    fn test_from_quantities() {
        let table = sample();
        assert_eq!(table.as_slice(), &[15, 20, 35, 40, 55, 60, 75]);
        assert_eq!(table.len(), 7);
        assert!(!table.is_empty());
        assert_eq!(table.total(), 75);
        assert_eq!(table.convention(), Convention::UpperExclusive);
    }

    #[test]
    fn test_from_quantities_errors() {
        let empty: [u64; 0] = [];
        assert_eq!(Boundaries::from_quantities(&empty), Err(Error::EmptyInput));
        assert_eq!(
            Boundaries::from_quantities(&[4u64, 0]),
            Err(Error::NonPositiveQuantity { position: 1 })
        );
    }

    #[test]
    fn test_from_boundaries_errors() {
        let c = Convention::UpperExclusive;
        assert_eq!(
            Boundaries::<u64>::from_boundaries(vec![], c),
            Err(Error::EmptyInput)
        );
        assert_eq!(
            Boundaries::from_boundaries(vec![0u64, 5], c),
            Err(Error::NonPositiveQuantity { position: 0 })
        );
        assert_eq!(
            Boundaries::from_boundaries(vec![5u64, 9, 9, 12], c),
            Err(Error::UnsortedBoundaries { position: 2 })
        );
        assert_eq!(
            Boundaries::from_boundaries(vec![5i32, 3], c),
            Err(Error::UnsortedBoundaries { position: 1 })
        );
    }

    #[test]
    fn test_try_from_vec() {
        let table = Boundaries::try_from(vec![15u64, 20, 35]).unwrap();
        assert_eq!(table.search(20), 2);
        assert!(Boundaries::try_from(vec![20u64, 15]).is_err());
    }

    #[test]
    fn test_search_and_validate() {
        let table = sample();
        assert_eq!(table.search(0), 0);
        assert_eq!(table.search(14), 0);
        assert_eq!(table.search(15), 1);
        assert_eq!(table.search(20), 2);
        assert_eq!(table.search(75), 6);
        assert_eq!(table.search(76), 6);

        assert_eq!(table.validate(14, 0), Ok(true));
        assert_eq!(table.validate(75, 6), Ok(false));
        assert_eq!(
            table.validate(0, 7),
            Err(Error::IndexOutOfRange { index: 7, len: 7 })
        );
    }

    #[test]
    fn test_failed_call_keeps_table_usable() {
        let table = sample();
        assert!(table.validate(0, 100).is_err());
        assert!(table.bucket_range(100).is_err());
        assert_eq!(table.search(38), 3);
        assert_eq!(table.validate(38, 3), Ok(true));
    }

    #[test]
    fn test_bucket_range() {
        let table = sample();
        let r = table.bucket_range(0).unwrap();
        assert_eq!((r.index, r.start, r.end), (0, 0, 15));
        let r = table.bucket_range(3).unwrap();
        assert_eq!((r.index, r.start, r.end), (3, 35, 40));
        assert!(!r.end_inclusive());
        assert_eq!(
            table.bucket_range(7),
            Err(Error::IndexOutOfRange { index: 7, len: 7 })
        );

        let inclusive =
            Boundaries::from_quantities_with(&[15u64, 5], Convention::UpperInclusive).unwrap();
        let r = inclusive.bucket_range(1).unwrap();
        assert_eq!((r.start, r.end), (16, 20));
        assert!(r.end_inclusive());
    }

    #[test]
    fn test_quantity_recovers_input() {
        let quantities = [15u64, 5, 15, 5, 15, 5, 15];
        let table = Boundaries::from_quantities(&quantities).unwrap();
        for (i, &q) in quantities.iter().enumerate() {
            assert_eq!(table.quantity(i), Ok(q));
        }
        assert_eq!(
            table.quantity(7),
            Err(Error::IndexOutOfRange { index: 7, len: 7 })
        );
    }

    #[test]
    fn test_iter_ranges_round_trip() {
        let table = sample();
        assert_eq!(table.iter().len(), 7);

        for range in &table {
            let mut v = range.start;
            while range.contains(v) {
                assert_eq!(table.search(v), range.index, "value {}", v);
                assert_eq!(table.validate(v, range.index), Ok(true));
                v += 1;
            }
            assert_eq!(v, range.end);
        }
    }

    #[test]
    fn test_iter_double_ended() {
        let table = sample();
        let indices: Vec<usize> = table.iter().rev().map(|r| r.index).collect();
        assert_eq!(indices, vec![6, 5, 4, 3, 2, 1, 0]);

        let mut it = table.iter();
        assert_eq!(it.next().map(|r| r.index), Some(0));
        assert_eq!(it.next_back().map(|r| r.index), Some(6));
        assert_eq!(it.len(), 5);
    }

    #[test]
    fn test_single_bucket_table() {
        let table = Boundaries::from_quantities(&[3u8]).unwrap();
        for q in 0..=u8::MAX {
            assert_eq!(table.search(q), 0);
        }
        assert_eq!(table.validate(2, 0), Ok(true));
        assert_eq!(table.validate(3, 0), Ok(false));
    }

    #[test]
    fn test_search_batch() {
        let table = sample();
        assert_eq!(
            table.search_batch(&[0, 15, 20, 39, 40, 100]),
            vec![0, 1, 2, 3, 4, 6]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_search_batch_matches_sequential() {
        let table = sample();
        let queries: Vec<u64> = (0..1000).collect();
        assert_eq!(table.par_search_batch(&queries), table.search_batch(&queries));
    }

    #[test]
    fn test_quantity_after_try_from() {
        let table = Boundaries::try_from(vec![3u32, 10, 11]).unwrap();
        assert_eq!(table.quantity(0), Ok(3));
        assert_eq!(table.quantity(1), Ok(7));
        assert_eq!(table.quantity(2), Ok(1));
    }

    #[cfg(feature = "rkyv")]
    #[test]
    fn test_rkyv_rejects_invalid_archive() {
        use rkyv::rancor::Error as RkyvError;

        let cases = [
            Boundaries {
                bounds: Vec::<u64>::new(),
                convention: Convention::UpperExclusive,
            },
            Boundaries {
                bounds: vec![50u64, 10, 0],
                convention: Convention::UpperExclusive,
            },
            Boundaries {
                bounds: vec![0u64, 10],
                convention: Convention::UpperInclusive,
            },
        ];

        for table in cases {
            let bytes = rkyv::to_bytes::<RkyvError>(&table).expect("failed to serialize");
            let result = rkyv::from_bytes::<Boundaries<u64>, RkyvError>(&bytes);
            assert!(result.is_err(), "accepted {:?}", table.as_slice());
        }
    }

    #[test]
    fn test_size_in_bytes() {
        let table = sample();
        assert!(table.size_in_bytes() >= 7 * core::mem::size_of::<u64>());
    }
}
