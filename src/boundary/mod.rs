//! Cumulative bucket boundaries.
//!
//! - [`build_boundaries`]: prefix sums over bucket quantities
//! - [`Boundaries`]: validated owned table with search and validation
//! - [`Builder`]: configures the [`Convention`](crate::Convention) of a table
//! - [`BucketRange`]: the values covered by one bucket

mod builder;
mod range;
mod table;

pub use builder::{Builder, build_boundaries};
pub use range::BucketRange;
pub use table::{Boundaries, Iter};
