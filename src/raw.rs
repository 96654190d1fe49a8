//! Flag operations on plain integers.
//!
//! For code that keeps its flags in a bare integer field (a register image, a
//! wire header, an FFI struct) but still wants every flag checked against the
//! field's width. Signed storage is accepted here; its sign bit is never a
//! flag.

use crate::validate::{bit_mask_for, flag_bits};
use crate::{Flag, Storage};

/// Returns `true` if `flag` is set in `bits`.
///
/// # Examples
/// ```
/// use enum_flagset::raw::is_flag_set;
///
/// assert!(is_flag_set(0b0100_u8, 2u8));
/// assert!(!is_flag_set(0b0100_u8, 1u8));
/// ```
#[inline]
pub fn is_flag_set<S: Storage, F: Flag>(bits: S, flag: F) -> bool {
    bits & bit_mask_for::<S, F>(flag) != S::ZERO
}

/// Returns `true` if at least one of `flags` is set in `bits`. `false` for an
/// empty slice.
///
/// # Examples
/// ```
/// use enum_flagset::raw::are_any_flags_set;
///
/// assert!(are_any_flags_set(0b0010_i32, &[7, 1]));
/// assert!(!are_any_flags_set(0b0010_i32, &[7, 0]));
/// assert!(!are_any_flags_set::<i32, u8>(0b0010, &[]));
/// ```
pub fn are_any_flags_set<S: Storage, F: Flag>(bits: S, flags: &[F]) -> bool {
    flags.iter().any(|&flag| is_flag_set(bits, flag))
}

/// Returns `true` if every one of `flags` is set in `bits`. `true` for an
/// empty slice.
///
/// # Examples
/// ```
/// use enum_flagset::raw::are_all_flags_set;
///
/// assert!(are_all_flags_set(0b1000_0011_u16, &[0, 1, 7]));
/// assert!(!are_all_flags_set(0b1000_0010_u16, &[0, 1, 7]));
/// ```
pub fn are_all_flags_set<S: Storage, F: Flag>(bits: S, flags: &[F]) -> bool {
    flags.iter().all(|&flag| is_flag_set(bits, flag))
}

/// Sets every one of `flags` in `bits`.
///
/// # Examples
/// ```
/// use enum_flagset::raw::set_flags;
///
/// let mut bits = 0b0010_u8;
/// set_flags(&mut bits, &[7u8]);
/// assert_eq!(bits, 0b1000_0010);
/// ```
#[inline]
pub fn set_flags<S: Storage, F: Flag>(bits: &mut S, flags: &[F]) {
    *bits |= flag_bits(flags);
}

/// Clears every one of `flags` in `bits`.
///
/// # Examples
/// ```
/// use enum_flagset::raw::unset_flags;
///
/// let mut bits = 0b1000_0010_u8;
/// unset_flags(&mut bits, &[0u8, 1]);
/// assert_eq!(bits, 0b1000_0000);
/// ```
#[inline]
pub fn unset_flags<S: Storage, F: Flag>(bits: &mut S, flags: &[F]) {
    *bits &= !flag_bits::<S, F>(flags);
}

/// Flips every one of `flags` in `bits`.
///
/// # Examples
/// ```
/// use enum_flagset::raw::toggle_flags;
///
/// let mut bits = 0b1000_0011_u8;
/// toggle_flags(&mut bits, &[0u8, 1]);
/// assert_eq!(bits, 0b1000_0000);
/// ```
#[inline]
pub fn toggle_flags<S: Storage, F: Flag>(bits: &mut S, flags: &[F]) {
    *bits ^= flag_bits(flags);
}

/// Sets `flags` in `bits` if `value` is `true`, clears them otherwise.
///
/// # Examples
/// ```
/// use enum_flagset::raw::set_flags_to;
///
/// let mut bits = 0b1000_0011_u8;
/// set_flags_to(&mut bits, false, &[7u8, 0]);
/// assert_eq!(bits, 0b0010);
/// set_flags_to(&mut bits, true, &[7u8, 0]);
/// assert_eq!(bits, 0b1000_0011);
/// ```
pub fn set_flags_to<S: Storage, F: Flag>(bits: &mut S, value: bool, flags: &[F]) {
    if value {
        set_flags(bits, flags);
    } else {
        unset_flags(bits, flags);
    }
}
