//! Type-safe enum flag sets over a single fixed-width integer, written in pure
//! Rust. `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! Raw integer flag code has two classic bugs: a bit from one enum ends up in
//! a field meant for another, and a flag's bit position doesn't fit the field,
//! so it is silently dropped or corrupts a neighbour. [`FlagSet`] rules out the
//! first through its tag type and the second through the validator, which
//! rejects out-of-range flags at compile time wherever it can.
//!
//! # Examples
//! ```
//! use enum_flagset::{FlagSet, flag_enum};
//!
//! flag_enum! {
//!     #[derive(Debug)]
//!     pub enum Access: u8 {
//!         Read = 0,
//!         Write = 1,
//!         Execute = 2,
//!     }
//! }
//!
//! let mut access = FlagSet::<Access, u8>::from_flags(&[Access::Read]);
//! assert!(access.is_set(Access::Read));
//! access.set(&[Access::Write]);
//! assert!(access.are_all_set(&[Access::Read, Access::Write]));
//! assert_eq!(access.bits(), 0b011);
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible, no heap allocations
//! - Generic API: `FlagSet<T: Flag, S: Unsigned = u64>` where `T` is the tag and
//!   `S` the storage integer
//! - Tags are enums declared with [`flag_enum!`] or plain integers
//! - Compile-time rejection of:
//!   - enums with negative discriminants ([`flag_enum!`])
//!   - enums with a value that doesn't fit the storage ([`FlagSet`],
//!     [`bit_mask_for`])
//!   - constants that don't fit ([`flag_mask!`], [`checked_index`])
//!   - non-integer flag sources (`bool`, floats, ...), which don't implement
//!     [`Flag`]
//! - Set algebra: `set`, `unset`, `toggle`, `set_to`, plus `+`, `-`, `+=`,
//!   `-=`, `|`, `&`, `^` and their assign forms
//! - Queries: `is_set`, `are_any_set`, `are_all_set`, `is_empty`, `len`
//! - Iteration over set bits in ascending order in O(set bits): `iter()`,
//!   `iter_indices()`, `for_each()`, short-circuiting `try_for_each()`
//! - The same checked operations on plain integers, signed included: [`raw`]

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod flag;
mod flag_set;
pub mod raw;
mod storage;
pub mod validate;

pub use flag::Flag;
pub use flag_set::{FlagSet, Indices, Iter};
pub use storage::{Storage, Unsigned};
pub use validate::{
    InvalidFlag, bit_mask_for, checked_index, flag_bits, highest_index, index_fits,
    try_bit_mask_for,
};
