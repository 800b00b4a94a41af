use core::fmt;
use num_traits::{CheckedAdd, CheckedSub, One, Zero};

/// Integer type usable as a bucket quantity, boundary and query value.
///
/// Implemented for every primitive integer. Signed types are accepted so
/// that callers holding signed data get a proper
/// [`Error::NonPositiveQuantity`](crate::Error::NonPositiveQuantity)
/// instead of a cast at the call site.
pub trait Weight:
    Copy
    + Clone
    + Ord
    + Default
    + Send
    + Sync
    + fmt::Debug
    + Zero
    + One
    + CheckedAdd
    + CheckedSub
{
    /// Whether the value is a valid bucket quantity (`> 0`).
    #[inline]
    fn is_positive(self) -> bool {
        self > Self::zero()
    }

    /// Whether the value lies below the start of bucket 0.
    #[inline]
    fn is_negative(self) -> bool {
        self < Self::zero()
    }
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {}
        )*
    };
}

impl_weight!(u8, u16, u32, u64, u128, usize);
impl_weight!(i8, i16, i32, i64, i128, isize);
