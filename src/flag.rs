/// A type whose values name bit positions.
///
/// Each value maps to exactly one bit: its underlying integer used directly
/// as the shift amount. Implemented for all primitive integers and for every
/// enum declared with [`flag_enum!`](crate::flag_enum). Types that are not
/// integer-backed (`bool`, `char`, floats, pointers, ...) deliberately do not
/// implement it, so they cannot be used as flags.
///
/// # Examples
/// ```
/// use enum_flagset::Flag;
///
/// enum_flagset::flag_enum! {
///     #[derive(Debug)]
///     pub enum Color: u8 {
///         Red = 0,
///         Green = 1,
///         Blue = 4,
///     }
/// }
///
/// assert_eq!(Color::Blue.to_index(), 4);
/// assert_eq!(Color::from_index(1), Some(Color::Green));
/// assert_eq!(Color::from_index(2), None);
/// assert_eq!(Color::INDEX_BOUNDS, Some((0, 4)));
/// ```
///
/// Booleans are not flags:
/// ```compile_fail
/// let mask: u8 = enum_flagset::bit_mask_for(true);
/// ```
pub trait Flag: Copy {
    /// Lowest and highest index any value of this type can produce, when that
    /// is known at compile time.
    ///
    /// `Some` for declared enums, which lets the validator reject a whole
    /// enum against a storage type before the program runs. `None` for plain
    /// integers, whose values are checked one by one instead.
    const INDEX_BOUNDS: Option<(i128, i128)>;

    /// The underlying integer value, used as the bit index.
    fn to_index(self) -> i128;

    /// The value at bit `index`, or `None` if no value maps to it.
    fn from_index(index: u32) -> Option<Self>;
}

macro_rules! impl_flag_for_int {
    ($($ty:ty),+) => {
        $(
            impl Flag for $ty {
                const INDEX_BOUNDS: Option<(i128, i128)> = None;

                #[inline]
                fn to_index(self) -> i128 {
                    // u128 values past i128::MAX wrap negative and are rejected
                    self as i128
                }

                #[inline]
                fn from_index(index: u32) -> Option<Self> {
                    <$ty>::try_from(index).ok()
                }
            }
        )+
    };
}

impl_flag_for_int!(u8, u16, u32, u64, u128, usize);
impl_flag_for_int!(i8, i16, i32, i64, i128, isize);

/// Declares a fieldless enum usable as a [`Flag`].
///
/// The enum gets `#[repr]` of the given integer type, derives `Clone`, `Copy`,
/// `PartialEq`, `Eq` and `Hash`, and implements [`Flag`] with bounds computed
/// from all variants. Discriminants are optional and follow the usual enum
/// rules.
///
/// Two names for the same bit are not possible as variants; declare the alias
/// as an associated const instead. [`Flag::from_index`] returns the variant.
///
/// # Examples
/// ```
/// use enum_flagset::{FlagSet, flag_enum};
///
/// flag_enum! {
///     #[derive(Debug)]
///     pub enum Access: u8 {
///         Read,
///         Write,
///         Execute = 7,
///     }
/// }
///
/// impl Access {
///     pub const R: Access = Access::Read;
/// }
///
/// let set = FlagSet::<Access, u8>::from_flags(&[Access::R, Access::Execute]);
/// assert_eq!(set.bits(), 0b1000_0001);
/// ```
///
/// # Compiler Errors
/// A negative discriminant, or one that does not fit even the widest storage
/// (`u128`), stops compilation where the enum is declared:
/// ```compile_fail
/// enum_flagset::flag_enum! {
///     enum Bad: i8 {
///         Negative = -1,
///         Zero = 0,
///     }
/// }
/// ```
/// ```compile_fail
/// enum_flagset::flag_enum! {
///     enum Bad: u16 {
///         Zero = 0,
///         TooFar = 128,
///     }
/// }
/// ```
#[macro_export]
macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $discriminant:expr)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $discriminant)?,
            )+
        }

        impl $crate::Flag for $name {
            const INDEX_BOUNDS: ::core::option::Option<(i128, i128)> =
                $crate::validate::declared_bounds(&[$($name::$variant as i128),+]);

            #[inline]
            fn to_index(self) -> i128 {
                self as i128
            }

            fn from_index(index: u32) -> ::core::option::Option<Self> {
                $(
                    if $name::$variant as i128 == index as i128 {
                        return ::core::option::Option::Some($name::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }

        const _: () = $crate::validate::check_declared_bounds(
            <$name as $crate::Flag>::INDEX_BOUNDS,
            u128::BITS,
            false,
        );
    };
}
