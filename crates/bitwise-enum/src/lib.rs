// SPDX-License-Identifier: MPL-2.0

//! Type-safe bitwise operators for enums.
//!
//! A type gains `|`, `&`, `^`, `!`, `|=`, `&=` and `^=` only by opting in, either with the
//! [`bitmask`] attribute or with [`enable_bitwise_operators!`]. Every other type keeps rejecting
//! those operators at compile time. See the [`guide`] module for a walkthrough.

#![no_std]

pub mod guide;

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

pub use bitwise_enum_internals::bitmask;

mod private {
    pub trait Sealed {}
}

/// An unsigned integer primitive that can represent a flag type in-memory.
///
/// This trait is sealed. It is implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait Bits:
    Copy
    + Eq
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + private::Sealed
{
    /// The value with no bits set.
    const ZERO: Self;

    /// The bit-width of this type.
    const WIDTH: usize;
}

macro_rules! impl_bits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Bits for $ty {
                const ZERO: Self = 0;
                const WIDTH: usize = <$ty>::BITS as usize;
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64, u128, usize);

/// A flag type backed by an unsigned integer.
///
/// Implementing this trait does not, by itself, provide any operators. Those are added by
/// [`enable_bitwise_operators!`], which the [`bitmask`] attribute invokes on your behalf.
pub trait Bitmask: Copy {
    /// The unsigned integer primitive that represents this type in-memory.
    type Repr: Bits;

    /// The union of every named flag.
    const ALL: Self;

    /// Reinterprets an integer as flags.
    ///
    /// Every bit is kept, named or not.
    fn from_repr(repr: Self::Repr) -> Self;

    fn into_repr(self) -> Self::Repr;
}

/// Queries available to every [`Bitmask`], whether or not its operators are enabled.
pub trait BitmaskExt: Bitmask {
    /// The bit-width of this type in memory.
    const REPR_WIDTH: usize;

    /// Flags with no bits set.
    fn empty() -> Self;

    fn is_empty(self) -> bool;

    /// Whether every named flag is set.
    fn is_all(self) -> bool;

    /// Whether every bit set in `other` is also set in `self`.
    fn contains(self, other: Self) -> bool;

    /// Whether `self` and `other` share at least one set bit.
    fn intersects(self, other: Self) -> bool;

    /// Clears every bit that does not belong to a named flag.
    ///
    /// Operators never do this on their own; in particular, `!` sets unnamed bits.
    fn truncate(self) -> Self;
}

impl<T: Bitmask> BitmaskExt for T {
    const REPR_WIDTH: usize = <T::Repr as Bits>::WIDTH;

    fn empty() -> Self {
        Self::from_repr(<T::Repr as Bits>::ZERO)
    }

    fn is_empty(self) -> bool {
        self.into_repr() == <T::Repr as Bits>::ZERO
    }

    fn is_all(self) -> bool {
        self.contains(Self::ALL)
    }

    fn contains(self, other: Self) -> bool {
        self.into_repr() & other.into_repr() == other.into_repr()
    }

    fn intersects(self, other: Self) -> bool {
        self.into_repr() & other.into_repr() != <T::Repr as Bits>::ZERO
    }

    fn truncate(self) -> Self {
        Self::from_repr(self.into_repr() & Self::ALL.into_repr())
    }
}

/// A [`Bitmask`] whose bitwise operators are enabled.
///
/// This trait is implemented for exactly those types registered with
/// [`enable_bitwise_operators!`] (directly or through [`bitmask`]). Bound generic code on it to
/// require the operators.
pub trait Flags:
    Bitmask
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitOrAssign
    + BitAndAssign
    + BitXorAssign
{
    /// Performs `*self |= rhs` and returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitwise_enum::Flags as _;
    ///
    /// #[bitwise_enum::bitmask]
    /// enum Alignment { None = 0, Top = 1, Bottom = 2, Left = 4, Right = 8 }
    ///
    /// let mut align = Alignment::None;
    /// align.or_assign(Alignment::Top).or_assign(Alignment::Left);
    /// assert_eq!(align.bits(), 5);
    /// ```
    fn or_assign(&mut self, rhs: Self) -> &mut Self;

    /// Performs `*self &= rhs` and returns `self` for chaining.
    fn and_assign(&mut self, rhs: Self) -> &mut Self;

    /// Performs `*self ^= rhs` and returns `self` for chaining.
    fn xor_assign(&mut self, rhs: Self) -> &mut Self;

    /// Like `!self`, but only named flags can end up set.
    fn complement(self) -> Self;
}

impl<T> Flags for T
where
    T: Bitmask
        + BitOr<Output = T>
        + BitAnd<Output = T>
        + BitXor<Output = T>
        + Not<Output = T>
        + BitOrAssign
        + BitAndAssign
        + BitXorAssign,
{
    fn or_assign(&mut self, rhs: Self) -> &mut Self {
        *self |= rhs;

        self
    }

    fn and_assign(&mut self, rhs: Self) -> &mut Self {
        *self &= rhs;

        self
    }

    fn xor_assign(&mut self, rhs: Self) -> &mut Self {
        *self ^= rhs;

        self
    }

    fn complement(self) -> Self {
        !self & Self::ALL
    }
}

/// Enables the bitwise operators for one or more [`Bitmask`] implementors.
///
/// Each operator converts its operands to [`Bitmask::Repr`], applies the integer operator, and
/// converts the result back without any masking. Registering the same type twice is a
/// conflicting-implementation error.
///
/// # Examples
///
/// ```
/// use bitwise_enum::{Bitmask, enable_bitwise_operators};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Mode(u8);
///
/// impl Bitmask for Mode {
///     type Repr = u8;
///     const ALL: Self = Mode(0b111);
///
///     fn from_repr(repr: u8) -> Self {
///         Mode(repr)
///     }
///
///     fn into_repr(self) -> u8 {
///         self.0
///     }
/// }
///
/// enable_bitwise_operators!(Mode);
///
/// assert_eq!(Mode(0b001) | Mode(0b100), Mode(0b101));
/// assert_eq!(!Mode(0b001), Mode(0b1111_1110));
/// ```
#[macro_export]
macro_rules! enable_bitwise_operators {
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::__impl_bin_op!($ty, BitOr, bitor, BitOrAssign, bitor_assign, |);
            $crate::__impl_bin_op!($ty, BitAnd, bitand, BitAndAssign, bitand_assign, &);
            $crate::__impl_bin_op!($ty, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

            impl ::core::ops::Not for $ty {
                type Output = Self;

                #[inline]
                fn not(self) -> Self {
                    <Self as $crate::Bitmask>::from_repr(!<Self as $crate::Bitmask>::into_repr(self))
                }
            }
        )+
    };
}

/// Implements one binary operator and its compound assignment for a [`Bitmask`].
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_bin_op {
    ($ty:ty, $op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl ::core::ops::$op_trait for $ty {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                <Self as $crate::Bitmask>::from_repr(
                    <Self as $crate::Bitmask>::into_repr(self)
                        $op <Self as $crate::Bitmask>::into_repr(rhs),
                )
            }
        }

        impl ::core::ops::$assign_trait for $ty {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = ::core::ops::$op_trait::$op_fn(*self, rhs);
            }
        }
    };
}
