//! # prefix-buckets
//!
//! Bucket lookup over cumulative quantities. A sequence of positive
//! quantities partitions `[0, total)` into consecutive buckets; this crate
//! turns the quantities into prefix-sum boundaries and finds which bucket a
//! position falls into with a binary search for the boundary that straddles
//! the query, rather than for an exact match.
//!
//! ## Quick Start
//!
//! ```rust
//! use prefix_buckets::{build_boundaries, search_bucket, validate};
//!
//! // Buckets: [0, 15) [15, 20) [20, 35) ...
//! let boundaries = build_boundaries(&[15u64, 5, 15, 5, 15, 5, 15]).unwrap();
//! assert_eq!(boundaries, vec![15, 20, 35, 40, 55, 60, 75]);
//!
//! assert_eq!(search_bucket(&boundaries, 14), Ok(0));
//! assert_eq!(search_bucket(&boundaries, 20), Ok(2));
//! assert_eq!(search_bucket(&boundaries, 80), Ok(6)); // clamped to the tail
//!
//! assert_eq!(validate(&boundaries, 34, 2), Ok(true));
//! ```
//!
//! For repeated lookups, [`Boundaries`] owns a validated table and fixes its
//! [`Convention`] once.
//!
//! ## Conventions
//!
//! Whether an exact boundary value closes its bucket or opens the next one is
//! explicit. [`DEFAULT_CONVENTION`] is [`Convention::UpperExclusive`]; use
//! the `_with` functions or [`Builder::convention`] for
//! [`Convention::UpperInclusive`].
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`]
//! - `parallel`: adds `Boundaries::par_search_batch` backed by rayon
//! - `serde`: Enables serialization/deserialization with serde
//! - `rkyv`: Enables zero-copy serialization/deserialization with rkyv
//! - `tracing`: Emits construction and clamping events through `tracing`

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod boundary;
pub mod convention;
pub mod error;
pub mod util;
pub mod weight;

pub use boundary::{Boundaries, BucketRange, Builder, build_boundaries};
pub use convention::{Convention, DEFAULT_CONVENTION};
pub use error::Error;
pub use util::search::{search_bucket, search_bucket_with, validate, validate_with};
pub use weight::Weight;
