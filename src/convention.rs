//! Inclusive/exclusive policy for bucket edges.
//!
//! A boundary value `boundary[i]` closes bucket `i`. Whether that exact value
//! still belongs to bucket `i` or already opens bucket `i + 1` is a policy
//! choice, and search and validation must agree on it.

use crate::weight::Weight;

/// How a boundary value is assigned to the buckets on either side of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "rkyv",
    derive(rkyv::Archive, rkyv::Serialize, rkyv::Deserialize)
)]
pub enum Convention {
    /// Bucket 0 covers `[0, b[0])`, bucket `i` covers `[b[i-1], b[i])`.
    ///
    /// A boundary value opens the next bucket.
    #[default]
    UpperExclusive,
    /// Bucket 0 covers `[0, b[0]]`, bucket `i` covers `(b[i-1], b[i]]`.
    ///
    /// A boundary value closes its own bucket.
    UpperInclusive,
}

/// Convention used by [`search_bucket`](crate::search_bucket),
/// [`validate`](crate::validate) and a default [`Builder`](crate::Builder).
pub const DEFAULT_CONVENTION: Convention = Convention::UpperExclusive;

impl Convention {
    /// Whether `bound` lies past `query`, i.e. the bucket it closes could
    /// still hold `query`.
    #[inline]
    pub fn is_above<W: Weight>(self, bound: W, query: W) -> bool {
        match self {
            Convention::UpperExclusive => bound > query,
            Convention::UpperInclusive => bound >= query,
        }
    }

    /// Whether `value` falls into the bucket closed by `upper` and opened
    /// after `lower`. `lower` is `None` for bucket 0, which starts at zero.
    #[inline]
    pub fn contains<W: Weight>(self, lower: Option<W>, upper: W, value: W) -> bool {
        if !self.is_above(upper, value) {
            return false;
        }
        match lower {
            Some(lower) => !self.is_above(lower, value),
            None => !value.is_negative(),
        }
    }
}
