// SPDX-License-Identifier: MPL-2.0

//! A documentation-only module that explains how to use [`bitmask`] and
//! [`enable_bitwise_operators!`].
//!
//! [`bitmask`]: crate::bitmask
//! [`enable_bitwise_operators!`]: crate::enable_bitwise_operators
//!
//! ## Opting in
//!
//! The bitwise operators `|`, `&`, `^`, `!`, `|=`, `&=` and `^=` exist for a type only after it is
//! registered. There are two ways to register a type.
//!
//! The `bitmask` attribute takes an enum declaration and emits a flag type with the same name and
//! visibility. Each variant becomes an associated constant, so call sites read like they would
//! for an enum:
//!
//! ```
//! #[bitwise_enum::bitmask]
//! #[derive(Debug)]
//! pub enum Alignment {
//!     None = 0,
//!     Top = 1,
//!     Bottom = 2,
//!     Left = 4,
//!     Right = 8,
//! }
//!
//! let mut align = Alignment::None;
//! align |= Alignment::Top;
//! align |= Alignment::Left;
//!
//! assert!(bool::from(align & Alignment::Top));
//! assert!(bool::from(align & Alignment::Left));
//! assert!(!bool::from(align & Alignment::Bottom));
//! assert!(!bool::from(align & Alignment::Right));
//! assert_eq!(align.bits(), 5);
//! ```
//!
//! [`enable_bitwise_operators!`] registers a type that already implements [`Bitmask`], such as a
//! hand-written newtype.
//!
//! [`Bitmask`]: crate::Bitmask
//!
//! ## The emitted type
//!
//! For an enum `E`, `#[bitmask]` emits:
//!
//! - `struct E(Repr)`, `#[repr(transparent)]`, deriving `Clone`, `Copy`, `PartialEq` and `Eq`
//!   alongside any derives written on the enum;
//! - an associated constant per variant, and the `const fn`s `bits` and `from_bits`;
//! - an implementation of [`Bitmask`];
//! - `From<E> for bool` (whether any bit is set), `From<E> for Repr` and `From<Repr> for E`; and
//! - an `enable_bitwise_operators!(E)` invocation.
//!
//! Because the constants are structural, they can be used as patterns:
//!
//! ```
//! #[bitwise_enum::bitmask]
//! enum Side { Left = 1, Right = 2 }
//!
//! let name = match Side::Left | Side::Right {
//!     Side::Left => "left",
//!     Side::Right => "right",
//!     _ => "both",
//! };
//! assert_eq!(name, "both");
//! ```
//!
//! ## Representation
//!
//! `Repr` is, in order of precedence,
//!
//! 1. the argument of a `#[repr]` attribute on the enum, which must be `u8`, `u16`, `u32`, `u64`,
//!    or `u128`;
//! 2. the type named by `#[bitmask(width = N)]` (bits) or `#[bitmask(size = N)]` (bytes); or
//! 3. the narrowest of those primitives that holds every discriminant.
//!
//! A `#[repr]` attribute and a `width`/`size` argument may both be given only if they agree.
//! Discriminants may be any constant expression, but the third rule can only be applied when
//! every discriminant is an integer literal or omitted (in which case it is one greater than the
//! previous discriminant, or zero for the first variant).
//!
//! ```
//! use bitwise_enum::BitmaskExt;
//!
//! #[bitwise_enum::bitmask(width = 16)]
//! enum Permission {
//!     Read = 1 << 0,
//!     Write = 1 << 1,
//!     Execute = 1 << 2,
//! }
//!
//! assert_eq!(Permission::REPR_WIDTH, 16);
//! ```
//!
//! ## Unnamed bits
//!
//! No operator checks that its result is a combination of named flags. In particular, `!` flips
//! every bit of the representation, including bits no variant uses. Mask results with
//! [`BitmaskExt::truncate`] or use [`Flags::complement`] when that matters:
//!
//! [`BitmaskExt::truncate`]: crate::BitmaskExt::truncate
//! [`Flags::complement`]: crate::Flags::complement
//!
//! ```
//! use bitwise_enum::{BitmaskExt, Flags};
//!
//! #[bitwise_enum::bitmask]
//! enum Alignment { None = 0, Top = 1, Bottom = 2, Left = 4, Right = 8 }
//!
//! assert_eq!((!Alignment::Top).bits(), 0b1111_1110);
//! assert_eq!((!Alignment::Top).truncate().bits(), 0b0000_1110);
//! assert_eq!(Alignment::Top.complement().bits(), 0b0000_1110);
//! assert!(!!Alignment::Top == Alignment::Top);
//! ```
//!
//! ## Compound assignment
//!
//! Rust's `|=`, `&=` and `^=` evaluate to `()`. To chain assignments, use [`Flags::or_assign`],
//! [`Flags::and_assign`] and [`Flags::xor_assign`], which return the mutated operand.
//!
//! [`Flags::or_assign`]: crate::Flags::or_assign
//! [`Flags::and_assign`]: crate::Flags::and_assign
//! [`Flags::xor_assign`]: crate::Flags::xor_assign
//!
//! ## Unregistered types
//!
//! Without registration, none of the operators exist. Implementing [`Bitmask`] is not enough:
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! let _ = Mode(1) | Mode(2);
//! ```
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! let _ = Mode(1) & Mode(2);
//! ```
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! let _ = Mode(1) ^ Mode(2);
//! ```
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! let _ = !Mode(1);
//! ```
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! let mut mode = Mode(1);
//! mode |= Mode(2);
//! ```
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! let mut mode = Mode(1);
//! mode &= Mode(2);
//! ```
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! let mut mode = Mode(1);
//! mode ^= Mode(2);
//! ```
//!
//! Nor does such a type satisfy a [`Flags`] bound:
//!
//! [`Flags`]: crate::Flags
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! fn requires_operators<F: bitwise_enum::Flags>(_: F) {}
//!
//! requires_operators(Mode(1));
//! ```
//!
//! A plain enum is likewise left alone:
//!
//! ```compile_fail
//! #[derive(Clone, Copy)]
//! enum Alignment { Top = 1, Left = 4 }
//!
//! let _ = Alignment::Top | Alignment::Left;
//! ```
//!
//! ## Registering twice
//!
//! A type can be registered only once. Both of these fail with conflicting implementations:
//!
//! ```compile_fail
//! #[bitwise_enum::bitmask]
//! enum Alignment { Top = 1, Left = 4 }
//!
//! bitwise_enum::enable_bitwise_operators!(Alignment);
//! ```
//!
//! ```compile_fail
//! # use bitwise_enum::Bitmask;
//! # #[derive(Clone, Copy)]
//! # struct Mode(u8);
//! # impl Bitmask for Mode {
//! #     type Repr = u8;
//! #     const ALL: Self = Mode(0b11);
//! #     fn from_repr(repr: u8) -> Self { Mode(repr) }
//! #     fn into_repr(self) -> u8 { self.0 }
//! # }
//! bitwise_enum::enable_bitwise_operators!(Mode);
//! bitwise_enum::enable_bitwise_operators!(Mode);
//! ```
//!
//! Applying `bitmask` twice is rejected too, since the second application sees a struct:
//!
//! ```compile_fail
//! #[bitwise_enum::bitmask]
//! #[bitwise_enum::bitmask]
//! enum Alignment { Top = 1, Left = 4 }
//! ```
//!
//! ## Rejected input
//!
//! `bitmask` accepts only field-less, non-generic enums. Variants may carry doc comments and lint
//! attributes, nothing else.
//!
//! ```compile_fail
//! #[bitwise_enum::bitmask]
//! enum Shape { Circle(u32), Square }
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitmask]
//! struct Alignment(u8);
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitmask(size = 1, width = 8)]
//! enum Alignment { Top = 1 }
//! ```
//!
//! ```compile_fail
//! #[bitwise_enum::bitmask]
//! #[repr(u8)]
//! enum Wide { High = 0x100 }
//! ```
//!
//! ```compile_fail
//! // Without a representation, `1 << 8` cannot be evaluated by the macro.
//! #[bitwise_enum::bitmask]
//! enum Shifted { High = 1 << 8 }
//! ```
