use core::fmt;

/// Errors returned when building boundaries or addressing a bucket.
///
/// `EmptyInput`, `NonPositiveQuantity`, `Overflow` and `UnsortedBoundaries`
/// all describe rejected input (see [`Error::is_invalid_input`]). A failed
/// call never invalidates a previously built table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyInput,
    NonPositiveQuantity { position: usize },
    Overflow { position: usize },
    UnsortedBoundaries { position: usize },
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Whether this error rejects the supplied quantities or boundaries.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::IndexOutOfRange { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "input data cannot be empty"),
            Error::NonPositiveQuantity { position } => {
                write!(f, "quantity at position {position} must be greater than 0")
            }
            Error::Overflow { position } => {
                write!(f, "cumulative sum overflows at position {position}")
            }
            Error::UnsortedBoundaries { position } => write!(
                f,
                "boundary at position {position} must be greater than its predecessor"
            ),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "bucket index {index} out of range for {len} buckets")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
