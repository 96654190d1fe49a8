//! Turning flag values into bit masks, and rejecting the ones that don't fit.
//!
//! A value is a valid flag for storage `S` when `0 <= value <= S::BITS - 1`
//! for unsigned storage and `0 <= value <= S::BITS - 2` for signed storage.
//! Checks happen as early as the flag's type allows: declared enums are
//! checked whole at compile time, constants through [`flag_mask!`], and
//! plain integers at conversion time.
//!
//! [`flag_mask!`]: crate::flag_mask

use core::error::Error;
use core::fmt::{Display, Formatter};

use crate::{Flag, Storage};

/// A flag value whose bit index does not fit the chosen storage.
///
/// This is the only error this crate knows. Most of the time it never exists
/// as a value: invalid enum definitions and invalid constants are rejected at
/// compile time, and [`bit_mask_for`] panics with this message. It is
/// returned by [`try_bit_mask_for`] for callers that validate integer flags
/// coming from elsewhere.
///
/// # Examples
/// ```
/// use enum_flagset::try_bit_mask_for;
///
/// let err = try_bit_mask_for::<u8, u32>(8).unwrap_err();
/// assert_eq!(err.index(), 8);
/// assert_eq!(err.to_string(), "flag index 8 does not fit in 8-bit unsigned storage");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidFlag {
    index: i128,
    width: u32,
    signed: bool,
}

impl InvalidFlag {
    /// The rejected index.
    pub const fn index(&self) -> i128 {
        self.index
    }

    /// Width of the storage the index was checked against.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Whether the storage was signed.
    pub const fn is_signed(&self) -> bool {
        self.signed
    }
}

impl Display for InvalidFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "flag index {} does not fit in {}-bit {} storage",
            self.index,
            self.width,
            if self.signed { "signed" } else { "unsigned" }
        )
    }
}

impl Error for InvalidFlag {}

/// Highest usable bit index for storage of the given width and signedness.
///
/// The sign bit of signed storage is never a flag position.
///
/// # Examples
/// ```
/// use enum_flagset::highest_index;
///
/// assert_eq!(highest_index(8, false), 7);
/// assert_eq!(highest_index(8, true), 6);
/// ```
pub const fn highest_index(width: u32, signed: bool) -> i128 {
    width as i128 - 1 - signed as i128
}

/// Returns `true` if `value` is a valid bit index for the given storage.
///
/// # Examples
/// ```
/// use enum_flagset::index_fits;
///
/// assert!(index_fits(63, 64, false));
/// assert!(!index_fits(64, 64, false));
/// assert!(!index_fits(63, 64, true));
/// assert!(!index_fits(-1, 64, false));
/// ```
pub const fn index_fits(value: i128, width: u32, signed: bool) -> bool {
    value >= 0 && value <= highest_index(width, signed)
}

/// Validates `value` as a bit index and returns it.
///
/// Usable in const contexts, where a bad index is a compile error. This is
/// what [`flag_mask!`](crate::flag_mask) builds on.
///
/// # Panics
/// Panics if `value` is negative or beyond [`highest_index`].
///
/// # Examples
/// ```
/// use enum_flagset::checked_index;
///
/// const SEVEN: u32 = checked_index(7, u8::BITS, false);
/// assert_eq!(1u8 << SEVEN, 0b1000_0000);
/// ```
///
/// # Compiler Errors
/// ```compile_fail
/// const SIGN_BIT: u32 = enum_flagset::checked_index(7, i8::BITS, true);
/// ```
pub const fn checked_index(value: i128, width: u32, signed: bool) -> u32 {
    assert!(value >= 0, "flag index must not be negative");
    assert!(
        value <= highest_index(width, signed),
        "flag index does not fit in the storage width"
    );
    value as u32
}

/// Lowest and highest of the given indices, `None` for an empty slice.
///
/// Used by [`flag_enum!`](crate::flag_enum) to compute
/// [`Flag::INDEX_BOUNDS`].
///
/// # Examples
/// ```
/// use enum_flagset::validate::declared_bounds;
///
/// assert_eq!(declared_bounds(&[3, 0, 9]), Some((0, 9)));
/// assert_eq!(declared_bounds(&[]), None);
/// ```
pub const fn declared_bounds(values: &[i128]) -> Option<(i128, i128)> {
    if values.is_empty() {
        return None;
    }
    let mut lowest = values[0];
    let mut highest = values[0];
    let mut i = 1;
    while i < values.len() {
        if values[i] < lowest {
            lowest = values[i];
        }
        if values[i] > highest {
            highest = values[i];
        }
        i += 1;
    }
    Some((lowest, highest))
}

/// Checks declared bounds against a storage, panicking if they don't fit.
///
/// `None` bounds always pass; those values are checked one by one at run
/// time.
pub const fn check_declared_bounds(bounds: Option<(i128, i128)>, width: u32, signed: bool) {
    if let Some((lowest, highest)) = bounds {
        checked_index(lowest, width, signed);
        checked_index(highest, width, signed);
    }
}

// Fails the build when `F`'s declared indices don't fit `S`.
#[inline(always)]
pub(crate) fn assert_definition<S: Storage, F: Flag>() {
    const { check_declared_bounds(F::INDEX_BOUNDS, S::BITS, S::SIGNED) }
}

/// Converts one flag into a single-bit mask, or reports why it can't.
///
/// Enum flags whose declared range doesn't fit `S` still fail to compile; the
/// `Err` case is reachable with integer flags only.
///
/// # Examples
/// ```
/// use enum_flagset::try_bit_mask_for;
///
/// assert_eq!(try_bit_mask_for::<u16, u8>(15), Ok(0x8000));
/// assert!(try_bit_mask_for::<i16, u8>(15).is_err());
/// assert!(try_bit_mask_for::<u64, i32>(-1).is_err());
/// ```
pub fn try_bit_mask_for<S: Storage, F: Flag>(flag: F) -> Result<S, InvalidFlag> {
    assert_definition::<S, F>();
    let index = flag.to_index();
    if index_fits(index, S::BITS, S::SIGNED) {
        Ok(S::bit(index as u32))
    } else {
        Err(InvalidFlag {
            index,
            width: S::BITS,
            signed: S::SIGNED,
        })
    }
}

/// Converts one flag into a single-bit mask of storage type `S`.
///
/// Every flag-to-bit conversion in this crate goes through here.
///
/// # Panics
/// Panics if the flag's index does not fit `S` (see [`InvalidFlag`]). For
/// enums declared with [`flag_enum!`](crate::flag_enum) this cannot happen:
/// an enum that doesn't fit is a compile error instead.
///
/// # Examples
/// ```
/// use enum_flagset::bit_mask_for;
///
/// let mask: u8 = bit_mask_for(7u8);
/// assert_eq!(mask, 0b1000_0000);
/// ```
///
/// # Compiler Errors
/// Raised while generating code for the call, so `cargo check` does not
/// report it:
/// ```compile_fail
/// enum_flagset::flag_enum! {
///     enum Wide: u8 {
///         Low = 0,
///         High = 8,
///     }
/// }
///
/// let mask: u8 = enum_flagset::bit_mask_for(Wide::Low);
/// ```
#[inline]
pub fn bit_mask_for<S: Storage, F: Flag>(flag: F) -> S {
    try_bit_mask_for(flag).unwrap_or_else(|err| panic!("{err}"))
}

/// Bitwise OR of the masks of all `flags`. An empty slice gives zero.
///
/// Duplicates are harmless.
///
/// # Examples
/// ```
/// use enum_flagset::flag_bits;
///
/// assert_eq!(flag_bits::<u8, u8>(&[0, 1, 1, 7]), 0b1000_0011);
/// assert_eq!(flag_bits::<u8, u8>(&[]), 0);
/// ```
pub fn flag_bits<S: Storage, F: Flag>(flags: &[F]) -> S {
    flags
        .iter()
        .fold(S::ZERO, |mask, &flag| mask | bit_mask_for(flag))
}

// Type-checks a `flag_mask!` argument as a `Flag` without evaluating it.
#[doc(hidden)]
pub fn require_flag<F: Flag>(_: F) {}

/// Builds a mask of integer type `ty` from constant flags at compile time.
///
/// Accepts integer constants and variants of enums declared with
/// [`flag_enum!`](crate::flag_enum). The result is a constant; an index that
/// does not fit `ty` is a compile error.
///
/// # Examples
/// ```
/// use enum_flagset::flag_mask;
///
/// const LOW: u8 = flag_mask!(u8; 0, 1);
/// assert_eq!(LOW, 0b11);
/// assert_eq!(flag_mask!(i16; 14), 0x4000);
/// assert_eq!(flag_mask!(u32), 0);
/// ```
///
/// # Compiler Errors
/// ```compile_fail
/// let mask = enum_flagset::flag_mask!(u8; 8);
/// ```
/// ```compile_fail
/// let mask = enum_flagset::flag_mask!(i8; 7);
/// ```
/// ```compile_fail
/// let mask = enum_flagset::flag_mask!(u8; true);
/// ```
#[macro_export]
macro_rules! flag_mask {
    ($ty:ty $(; $($flag:expr),* $(,)?)?) => {{
        let _ = || {
            $($($crate::validate::require_flag($flag);)*)?
        };
        const {
            #[allow(unused_mut)]
            let mut mask: $ty = 0;
            $($(
                mask |= (1 as $ty)
                    << $crate::checked_index($flag as i128, <$ty>::BITS, <$ty>::MIN != 0);
            )*)?
            mask
        }
    }};
}
