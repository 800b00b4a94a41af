use alloc::vec::Vec;

use crate::boundary::Boundaries;
use crate::convention::{Convention, DEFAULT_CONVENTION};
use crate::error::Error;
use crate::weight::Weight;

/// Turn bucket quantities into cumulative upper boundaries.
///
/// `boundary[i]` is the sum of `quantities[..=i]`. Fails on empty input, on
/// any quantity that is not positive and on sums that overflow `W`.
///
/// # Example
///
/// ```
/// use prefix_buckets::build_boundaries;
///
/// let boundaries = build_boundaries(&[15u64, 5, 15, 5, 15, 5, 15]).unwrap();
/// assert_eq!(boundaries, vec![15, 20, 35, 40, 55, 60, 75]);
/// ```
pub fn build_boundaries<W: Weight>(quantities: &[W]) -> Result<Vec<W>, Error> {
    if quantities.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut boundaries = Vec::with_capacity(quantities.len());
    let mut total = W::zero();

    for (position, &quantity) in quantities.iter().enumerate() {
        if !quantity.is_positive() {
            return Err(Error::NonPositiveQuantity { position });
        }
        total = total
            .checked_add(&quantity)
            .ok_or(Error::Overflow { position })?;
        boundaries.push(total);
    }

    Ok(boundaries)
}

/// Builder for [`Boundaries`] tables with a custom convention.
///
/// # Example
///
/// ```
/// use prefix_buckets::{Builder, Convention};
///
/// let table = Builder::new()
///     .convention(Convention::UpperInclusive)
///     .build(&[15u32, 5, 15])
///     .unwrap();
///
/// assert_eq!(table.search(15), 0);
/// assert_eq!(table.search(16), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    convention: Convention,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            convention: DEFAULT_CONVENTION,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how exact boundary values are assigned to buckets.
    pub fn convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    /// Build a table from bucket quantities.
    pub fn build<W: Weight>(&self, quantities: &[W]) -> Result<Boundaries<W>, Error> {
        Boundaries::from_quantities_with(quantities, self.convention)
    }

    /// Build a table from already accumulated boundaries.
    pub fn build_from_boundaries<W: Weight>(&self, bounds: Vec<W>) -> Result<Boundaries<W>, Error> {
        Boundaries::from_boundaries(bounds, self.convention)
    }
}
