use core::fmt::{Binary, Debug};
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer that can hold flag bits.
///
/// Implemented for every primitive integer type and sealed, so the set of
/// widths and signednesses the validator has to reason about is closed.
///
/// Signed storage reserves its sign bit: an `i8` holds flags `0..=6` only.
pub trait Storage:
    sealed::Sealed
    + Copy
    + Eq
    + Hash
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
{
    /// Width of the storage in bits.
    const BITS: u32;
    /// Whether the highest bit is a sign bit.
    const SIGNED: bool;
    /// No bits set.
    const ZERO: Self;
    /// Every bit of the storage set.
    const ALL: Self;

    /// Returns a value with only bit `index` set.
    ///
    /// Callers go through the validator first, `index` is always in range.
    fn bit(index: u32) -> Self;

    /// Two's complement negation, wrapping on overflow.
    fn wrapping_neg(self) -> Self;

    /// Subtraction, wrapping on overflow.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Number of trailing zero bits.
    fn trailing_zeros(self) -> u32;

    /// Number of set bits.
    fn count_ones(self) -> u32;
}

/// Unsigned [`Storage`]. The only kind of storage a
/// [`FlagSet`](crate::FlagSet) accepts.
pub trait Unsigned: Storage {}

macro_rules! impl_storage {
    ($signed:literal => $($ty:ty),+) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Storage for $ty {
                const BITS: u32 = <$ty>::BITS;
                const SIGNED: bool = $signed;
                const ZERO: Self = 0;
                const ALL: Self = !0;

                #[inline]
                fn bit(index: u32) -> Self {
                    1 << index
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }
            }
        )+
    };
}

impl_storage!(false => u8, u16, u32, u64, u128, usize);
impl_storage!(true => i8, i16, i32, i64, i128, isize);

impl Unsigned for u8 {}
impl Unsigned for u16 {}
impl Unsigned for u32 {}
impl Unsigned for u64 {}
impl Unsigned for u128 {}
impl Unsigned for usize {}
