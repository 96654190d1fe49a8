use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{FusedIterator, Iterator};
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, ControlFlow,
    Sub, SubAssign,
};

use crate::raw::{
    are_all_flags_set, are_any_flags_set, is_flag_set, set_flags, set_flags_to, toggle_flags,
    unset_flags,
};
use crate::validate::{bit_mask_for, check_declared_bounds, flag_bits};
use crate::{Flag, Unsigned};

/// A set of flags of type `T`, stored as the bits of one `S` integer.
///
/// `T` is the tag: only its values can be put into the set, so flags of
/// unrelated enums never mix. `S` is the unsigned storage and defaults to
/// `u64`. Every flag passes through [`bit_mask_for`] on its way in, so a set
/// never holds a bit its storage can't represent.
///
/// Sets are plain `Copy` values. Two sets compare equal when their bits are
/// equal.
///
/// # Examples
/// ```
/// use enum_flagset::{FlagSet, flag_enum};
///
/// flag_enum! {
///     #[derive(Debug)]
///     pub enum Sample: u8 {
///         Zero = 0,
///         One = 1,
///         Seven = 7,
///     }
/// }
///
/// let low = FlagSet::<Sample, u8>::from_flags(&[Sample::Zero, Sample::One]);
/// assert_eq!(low.bits(), 0b11);
/// assert_eq!(FlagSet::<Sample, u8>::from_flags(&[Sample::Seven]).bits(), 0b1000_0000);
///
/// let zero = FlagSet::<Sample, u8>::from_flags(&[Sample::Zero]);
/// assert!(low.are_all_set_in(zero));
/// assert!(!zero.are_all_set_in(low));
/// ```
///
/// # Compiler Errors
/// Using an enum whose values don't all fit the storage fails the build. The
/// check runs when the code is monomorphized, so it shows up under
/// `cargo build` or `cargo test` but not under `cargo check`:
/// ```compile_fail
/// use enum_flagset::{FlagSet, flag_enum};
///
/// flag_enum! {
///     enum Wide: u8 {
///         Low = 0,
///         High = 31,
///     }
/// }
///
/// let set = FlagSet::<Wide, u16>::new();
/// ```
///
/// Signed storage is not allowed:
/// ```compile_fail
/// let set = enum_flagset::FlagSet::<u8, i32>::new();
/// ```
pub struct FlagSet<T: Flag, S: Unsigned = u64> {
    bits: S,
    tag: PhantomData<fn() -> T>,
}

impl<T: Flag, S: Unsigned> FlagSet<T, S> {
    const VALID_DEFINITION: () = check_declared_bounds(T::INDEX_BOUNDS, S::BITS, S::SIGNED);

    /// Creates an empty set.
    ///
    /// # Compiler Errors
    /// Prevents compilation if `T` is a declared enum with a value that does
    /// not fit `S`, with `flag index does not fit in the storage width`. The
    /// error is raised during code generation, so `cargo check` alone does
    /// not report it.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// const EMPTY: FlagSet<u8, u32> = FlagSet::new();
    /// assert!(EMPTY.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self::from_bits(S::ZERO)
    }

    /// Same as [`new`](FlagSet::new).
    pub const fn none() -> Self {
        Self::new()
    }

    /// Creates a set from raw bits, without checking individual flags.
    ///
    /// Whether each set bit means something for `T` is up to the caller.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u8>::from_bits(0b1010);
    /// assert!(set.is_set(1));
    /// assert!(set.is_set(3));
    /// assert_eq!(FlagSet::from_bits(set.bits()), set);
    /// ```
    pub const fn from_bits(bits: S) -> Self {
        let () = Self::VALID_DEFINITION;
        Self {
            bits,
            tag: PhantomData,
        }
    }

    /// Creates a set holding every bit of the storage.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// assert_eq!(FlagSet::<u8, u16>::all().bits(), u16::MAX);
    /// ```
    pub const fn all() -> Self {
        Self::from_bits(S::ALL)
    }

    /// Creates a set holding every bit from 0 up to and including `last`.
    ///
    /// Bits in the range that name no value of `T` are set as well, which is
    /// what makes this useful for enums ending in a sentinel.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// assert_eq!(FlagSet::<u8, u8>::all_through(4).bits(), 0b1_1111);
    /// assert_eq!(FlagSet::<u8, u8>::all_through(7).bits(), u8::MAX);
    /// ```
    pub fn all_through(last: T) -> Self {
        let mask: S = bit_mask_for(last);
        Self::from_bits(mask | mask.wrapping_sub(S::bit(0)))
    }

    /// Creates a set holding `flags`. Duplicates are harmless.
    ///
    /// # Panics
    /// Panics if an integer flag does not fit `S`.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u8>::from_flags(&[0, 1, 1]);
    /// assert_eq!(set.bits(), 0b11);
    /// ```
    pub fn from_flags(flags: &[T]) -> Self {
        Self::from_bits(flag_bits(flags))
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(&self) -> S {
        self.bits
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == S::ZERO
    }

    /// Number of set bits.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// assert_eq!(FlagSet::<u8, u32>::from_flags(&[3, 9, 31]).len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if `flag` is in the set.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u8>::from_flags(&[2]);
    /// assert!(set.is_set(2));
    /// assert!(!set.is_set(3));
    /// ```
    #[inline]
    pub fn is_set(&self, flag: T) -> bool {
        is_flag_set(self.bits, flag)
    }

    /// Returns `true` if at least one of `flags` is in the set. `false` for an
    /// empty slice.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u8>::from_flags(&[1]);
    /// assert!(set.are_any_set(&[0, 7, 1]));
    /// assert!(!set.are_any_set(&[0, 7]));
    /// assert!(!set.are_any_set(&[]));
    /// ```
    pub fn are_any_set(&self, flags: &[T]) -> bool {
        are_any_flags_set(self.bits, flags)
    }

    /// Returns `true` if the two sets share a flag, or if `other` is empty.
    ///
    /// An empty `other` counts as satisfied rather than as "nothing in
    /// common". Existing callers rely on this; it differs from calling
    /// [`are_any_set`](FlagSet::are_any_set) with an empty slice.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u8>::from_flags(&[1, 2]);
    /// assert!(set.are_any_set_in(FlagSet::from_flags(&[2, 5])));
    /// assert!(!set.are_any_set_in(FlagSet::from_flags(&[5])));
    /// assert!(set.are_any_set_in(FlagSet::new()));
    /// assert!(FlagSet::<u8, u8>::new().are_any_set_in(FlagSet::new()));
    /// ```
    pub fn are_any_set_in(&self, other: Self) -> bool {
        other.bits == S::ZERO || self.bits & other.bits != S::ZERO
    }

    /// Returns `true` if every one of `flags` is in the set. `true` for an
    /// empty slice.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u8>::from_flags(&[0, 1, 7]);
    /// assert!(set.are_all_set(&[0, 7]));
    /// assert!(!set.are_all_set(&[0, 6]));
    /// ```
    pub fn are_all_set(&self, flags: &[T]) -> bool {
        are_all_flags_set(self.bits, flags)
    }

    /// Returns `true` if `other` is a subset of this set.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u8>::from_flags(&[0, 1]);
    /// assert!(set.are_all_set_in(FlagSet::from_flags(&[0])));
    /// assert!(!set.are_all_set_in(FlagSet::from_flags(&[0, 2])));
    /// assert!(set.are_all_set_in(FlagSet::new()));
    /// ```
    pub fn are_all_set_in(&self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Adds `flags` to the set.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let mut set = FlagSet::<u8, u8>::new();
    /// set.set(&[0]).set(&[3, 4]);
    /// assert_eq!(set.bits(), 0b1_1001);
    /// ```
    pub fn set(&mut self, flags: &[T]) -> &mut Self {
        set_flags(&mut self.bits, flags);
        self
    }

    /// Adds every flag of `other` to the set.
    pub fn set_from(&mut self, other: Self) -> &mut Self {
        self.bits |= other.bits;
        self
    }

    /// Removes `flags` from the set.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let mut set = FlagSet::<u8, u8>::from_flags(&[0, 1, 7]);
    /// set.unset(&[1, 2]);
    /// assert_eq!(set.bits(), 0b1000_0001);
    /// ```
    pub fn unset(&mut self, flags: &[T]) -> &mut Self {
        unset_flags(&mut self.bits, flags);
        self
    }

    /// Removes every flag of `other` from the set.
    pub fn unset_from(&mut self, other: Self) -> &mut Self {
        self.bits &= !other.bits;
        self
    }

    /// Flips `flags`: present ones are removed, missing ones added.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let mut set = FlagSet::<u8, u8>::from_flags(&[0, 1, 7]);
    /// set.toggle(&[0, 1, 2]);
    /// assert_eq!(set.bits(), 0b1000_0100);
    /// ```
    pub fn toggle(&mut self, flags: &[T]) -> &mut Self {
        toggle_flags(&mut self.bits, flags);
        self
    }

    /// Flips every flag of `other`.
    pub fn toggle_from(&mut self, other: Self) -> &mut Self {
        self.bits ^= other.bits;
        self
    }

    /// Adds `flags` if `value` is `true`, removes them otherwise.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let mut set = FlagSet::<u8, u8>::from_flags(&[0, 1, 7]);
    /// set.set_to(false, &[7, 0]);
    /// assert_eq!(set.bits(), 0b10);
    /// set.set_to(true, &[7, 0]);
    /// assert_eq!(set.bits(), 0b1000_0011);
    /// ```
    pub fn set_to(&mut self, value: bool, flags: &[T]) -> &mut Self {
        set_flags_to(&mut self.bits, value, flags);
        self
    }

    /// Adds every flag of `other` if `value` is `true`, removes them
    /// otherwise.
    pub fn set_to_from(&mut self, value: bool, other: Self) -> &mut Self {
        if value {
            self.set_from(other)
        } else {
            self.unset_from(other)
        }
    }

    /// Returns an iterator over the flags in the set, in ascending bit order.
    ///
    /// Bits that name no value of `T` (possible after
    /// [`from_bits`](FlagSet::from_bits), [`all`](FlagSet::all) or
    /// [`all_through`](FlagSet::all_through)) are skipped; see
    /// [`iter_indices`](FlagSet::iter_indices) for those.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    /// use core::array::from_fn;
    ///
    /// let set = FlagSet::<u8, u16>::from_flags(&[7, 1, 3]);
    /// let mut iter = set.iter();
    /// assert_eq!(from_fn(|_| iter.next().unwrap()), [1, 3, 7]);
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T, S> {
        Iter {
            indices: self.iter_indices(),
            tag: PhantomData,
        }
    }

    /// Returns an iterator over the positions of all set bits, in ascending
    /// order.
    ///
    /// Runs in O(k) where k is the number of set bits, independent of the
    /// storage width.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u128>::from_bits(1 << 127 | 1);
    /// let mut indices = set.iter_indices();
    /// assert_eq!(indices.next(), Some(0));
    /// assert_eq!(indices.next(), Some(127));
    /// assert_eq!(indices.next(), None);
    /// ```
    #[inline]
    pub fn iter_indices(&self) -> Indices<S> {
        Indices {
            remaining: self.bits,
        }
    }

    /// The flag at the lowest set bit, if any.
    pub fn first(&self) -> Option<T> {
        self.iter().next()
    }

    /// The only flag in the set, if exactly one bit is set and it names a
    /// value of `T`.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// assert_eq!(FlagSet::<u8, u8>::from_flags(&[5]).single(), Some(5));
    /// assert_eq!(FlagSet::<u8, u8>::from_flags(&[5, 6]).single(), None);
    /// assert_eq!(FlagSet::<u8, u8>::new().single(), None);
    /// ```
    pub fn single(&self) -> Option<T> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        T::from_index(self.bits.trailing_zeros())
    }

    /// Calls `f` with every flag in the set, in ascending bit order.
    ///
    /// Set bits that name no value of `T` are skipped; use
    /// [`iter_indices`](FlagSet::iter_indices) to see every set bit.
    ///
    /// # Examples
    /// ```
    /// use enum_flagset::FlagSet;
    ///
    /// let mut sum = 0;
    /// FlagSet::<u8, u8>::from_flags(&[1, 3, 7]).for_each(|flag| sum += flag);
    /// assert_eq!(sum, 11);
    /// ```
    pub fn for_each<F: FnMut(T)>(&self, mut f: F) {
        for flag in self.iter() {
            f(flag);
        }
    }

    /// Calls `f` with the flags in ascending bit order until it returns
    /// [`ControlFlow::Break`], and returns that payload.
    ///
    /// Returns `None` if every flag was visited. Like
    /// [`for_each`](FlagSet::for_each), this skips bits that name no value of
    /// `T`.
    ///
    /// # Examples
    /// ```
    /// use core::ops::ControlFlow;
    /// use enum_flagset::FlagSet;
    ///
    /// let set = FlagSet::<u8, u8>::from_flags(&[1, 3, 7]);
    /// let above_two = set.try_for_each(|flag| {
    ///     if flag > 2 { ControlFlow::Break(flag) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(above_two, Some(3));
    /// assert_eq!(set.try_for_each(|_| ControlFlow::<u8>::Continue(())), None);
    /// ```
    pub fn try_for_each<B, F: FnMut(T) -> ControlFlow<B>>(&self, mut f: F) -> Option<B> {
        for flag in self.iter() {
            if let ControlFlow::Break(value) = f(flag) {
                return Some(value);
            }
        }
        None
    }
}

impl<T: Flag, S: Unsigned> Clone for FlagSet<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Flag, S: Unsigned> Copy for FlagSet<T, S> {}

impl<T: Flag, S: Unsigned> PartialEq for FlagSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: Flag, S: Unsigned> Eq for FlagSet<T, S> {}

impl<T: Flag, S: Unsigned> Hash for FlagSet<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T: Flag, S: Unsigned> Default for FlagSet<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Flag + Debug, S: Unsigned> Debug for FlagSet<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "FlagSet(")?;
        for (i, index) in self.iter_indices().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            match T::from_index(index) {
                Some(flag) => write!(f, "{flag:?}")?,
                None => write!(f, "#{index}")?,
            }
        }
        if !self.is_empty() {
            write!(f, "; ")?;
        }
        write!(f, "{:#b})", self.bits)
    }
}

/// `true` if any bit is set.
impl<T: Flag, S: Unsigned> From<FlagSet<T, S>> for bool {
    fn from(set: FlagSet<T, S>) -> Self {
        !set.is_empty()
    }
}

impl<T: Flag, S: Unsigned> FromIterator<T> for FlagSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Flag, S: Unsigned> Extend<T> for FlagSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for flag in iter {
            *self += flag;
        }
    }
}

impl<T: Flag, S: Unsigned> IntoIterator for &FlagSet<T, S> {
    type Item = T;
    type IntoIter = Iter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Flag, S: Unsigned> Add<T> for FlagSet<T, S> {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        Self::from_bits(self.bits | bit_mask_for(rhs))
    }
}

impl<T: Flag, S: Unsigned> Sub<T> for FlagSet<T, S> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        Self::from_bits(self.bits & !bit_mask_for::<S, T>(rhs))
    }
}

impl<T: Flag, S: Unsigned> AddAssign<T> for FlagSet<T, S> {
    fn add_assign(&mut self, rhs: T) {
        self.bits |= bit_mask_for(rhs);
    }
}

impl<T: Flag, S: Unsigned> SubAssign<T> for FlagSet<T, S> {
    fn sub_assign(&mut self, rhs: T) {
        self.bits &= !bit_mask_for::<S, T>(rhs);
    }
}

impl<T: Flag, S: Unsigned> AddAssign for FlagSet<T, S> {
    fn add_assign(&mut self, rhs: Self) {
        self.set_from(rhs);
    }
}

impl<T: Flag, S: Unsigned> SubAssign for FlagSet<T, S> {
    fn sub_assign(&mut self, rhs: Self) {
        self.unset_from(rhs);
    }
}

impl<T: Flag, S: Unsigned> BitAnd for FlagSet<T, S> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl<T: Flag, S: Unsigned> BitAndAssign for FlagSet<T, S> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl<T: Flag, S: Unsigned> BitOr for FlagSet<T, S> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl<T: Flag, S: Unsigned> BitOrAssign for FlagSet<T, S> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl<T: Flag, S: Unsigned> BitXor for FlagSet<T, S> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits ^ rhs.bits)
    }
}

impl<T: Flag, S: Unsigned> BitXorAssign for FlagSet<T, S> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}

/// Iterator over the positions of set bits.
///
/// Yields ascending positions and never revisits one. Each step isolates the
/// lowest set bit with `x & -x` and clears it.
///
/// Returned by [`FlagSet::iter_indices()`].
#[derive(Clone, Copy, Debug)]
pub struct Indices<S: Unsigned> {
    remaining: S,
}

impl<S: Unsigned> Iterator for Indices<S> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == S::ZERO {
            return None;
        }
        let lowest = self.remaining & self.remaining.wrapping_neg();
        self.remaining ^= lowest;
        Some(lowest.trailing_zeros())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl<S: Unsigned> ExactSizeIterator for Indices<S> {}

impl<S: Unsigned> FusedIterator for Indices<S> {}

/// Iterator over the flags of a [`FlagSet`].
///
/// Yields flags in ascending bit order, skipping bits that name no value.
///
/// Returned by [`FlagSet::iter()`].
pub struct Iter<T: Flag, S: Unsigned> {
    indices: Indices<S>,
    tag: PhantomData<fn() -> T>,
}

impl<T: Flag, S: Unsigned> Clone for Iter<T, S> {
    fn clone(&self) -> Self {
        Self {
            indices: self.indices,
            tag: PhantomData,
        }
    }
}

impl<T: Flag, S: Unsigned> Iterator for Iter<T, S> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.by_ref().find_map(T::from_index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.indices.size_hint().1)
    }
}

impl<T: Flag, S: Unsigned> FusedIterator for Iter<T, S> {}
