// SPDX-License-Identifier: MPL-2.0

//! Types modeling unsigned integer primitives.

use super::*;

/// Implements [`fmt::Display`] for the given unsigned integer model.
macro_rules! impl_display {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "u{}", self.width)
            }
        }
    };
}

/// Models a (possibly imaginary) unsigned integer type of arbitrary bit-width:
/// <code>u&#8239;<em>width</em></code>.
///
/// This type is not [spanned].
///
/// [spanned]: Span2
#[derive(Clone, Copy)]
pub(crate) struct PseudoType {
    width: usize,
}

impl PseudoType {
    /// Attempts to parse a `PseudoType` from a [`syn::Ident`].
    ///
    /// This returns `None` if `ident` is not an unsigned integer (i.e., not of the form
    /// <code>u&#8239;<em>width</em></code>), `Some(Err(_))` if `ident` appears to be an unsigned
    /// integer but the *width* suffix fails to parse or is zero, and `Some(Ok(_))` otherwise.
    pub(crate) fn parse(ident: &syn::Ident) -> Option<Result<Self>> {
        let (span, ident) = (ident.span(), ident.to_string());
        let Some(("", width)) = ident.split_once('u') else {
            // This is not even an unsigned integer!
            return None;
        };
        let Ok(width) = width.parse() else {
            return Some(Err(err!(span; "integer has invalid width suffix")));
        };
        if width == 0 {
            return Some(Err(err!(span; "this cannot be zero-sized")));
        }

        Some(Ok(Self { width }))
    }

    /// Rounds [the width] of this type up to the next smallest power of two that is at least 8.
    ///
    /// This type is not guaranteed to [exist] after calling this method.
    ///
    /// [the width]: Self::width
    /// [exist]: Self::exists
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut ty = PseudoType { width: 37 };
    /// ty.round_up();
    /// assert_eq!(ty.width, 64);
    /// ty.round_up();
    /// // 64 is already a power of two, so the width is unchanged.
    /// assert_eq!(ty.width, 64);
    /// ```
    pub(crate) fn round_up(&mut self) {
        if self.width <= 8 {
            self.width = 8;
            return;
        }

        let exp = self.width.ilog2() as usize;
        let rem = self.width & ((1 << exp) - 1);

        if rem > 0 {
            self.width = 1 << (exp + 1);
        }
    }

    /// Determines if this pseudo-type models an unsigned integer primitive that exists in Rust.
    ///
    /// This method returns `true` only if the width of this type is a power of two between 8 and
    /// 128, inclusive.
    pub(crate) fn exists(&self) -> bool {
        matches!(self.width, 8 | 16 | 32 | 64 | 128)
    }

    /// Attempts to convert this `PseudoType` into a [`RustType`].
    ///
    /// This method returns `None` if this pseudo-type does not [exist].
    ///
    /// [exist]: Self::exists
    pub(crate) fn try_into_rust_type(self) -> Option<RustType> {
        self.exists().then_some(RustType { width: self.width })
    }
}

impl_display!(PseudoType);

/// Models an unsigned integer primitive that exists in Rust: `u8`, `u16`, `u32`, `u64`, or `u128`.
///
/// This type is not [spanned].
///
/// [spanned]: Span2
#[derive(Clone, Copy)]
pub(crate) struct RustType {
    width: usize,
}

impl RustType {
    /// Determines the representation, or storage type, for a flag set.
    ///
    /// An explicit representation comes from a `#[repr]` attribute in `item_attrs` (which is
    /// removed) or from `arg_width`, the bit-width given to the `#[bitmask]` attribute. Without
    /// either, the narrowest primitive that holds `item_width` bits is chosen.
    ///
    /// # Errors
    ///
    /// An error is returned
    ///
    /// 1. if `item_attrs` contains the `#[repr]` attribute and the argument cannot
    ///    [be parsed] as a [`PseudoType`] or cannot [be converted] into a `RustType`;
    /// 2. if `arg_width` is not the width of any `RustType`;
    /// 3. if both are present and disagree;
    /// 4. if the explicit representation is narrower than `item_width`; or
    /// 5. if there is no explicit representation and `item_width` depends on compile-time
    ///    information.
    ///
    /// [be parsed]: PseudoType::parse
    /// [be converted]: PseudoType::try_into_rust_type
    pub(crate) fn repr_for_item(
        item_span: Span2,
        item_width: &Width,
        item_attrs: &mut Vec<syn::Attribute>,
        arg_width: Option<(Span2, usize)>,
    ) -> Result<Self> {
        let from_attr = match item_attrs.iter().position(|attr| attr.path().is_ident("repr")) {
            Some(i) => {
                // The `#[repr]` attribute is replaced by `#[repr(transparent)]` later on.
                let attr = item_attrs.remove(i);
                let ident = attr.parse_args::<syn::Ident>().map_err(Error)?;
                let span = ident.span();
                let repr = match PseudoType::parse(&ident) {
                    Some(Ok(ty)) => ty
                        .try_into_rust_type()
                        .ok_or_else(|| err!(span; "argument must be an existing Rust primitive")),
                    Some(Err(e)) => Err(e),
                    None => Err(err!(span; "argument must be an unsigned integer primitive")),
                }?;

                Some((span, repr))
            }
            None => None,
        };
        let from_arg = match arg_width {
            Some((span, width)) => {
                let repr = PseudoType { width }
                    .try_into_rust_type()
                    .ok_or_else(|| err!(span; "width must be 8, 16, 32, 64, or 128 bits"))?;

                Some((span, repr))
            }
            None => None,
        };

        let explicit = match (from_attr, from_arg) {
            (Some((span, attr)), Some((_, arg))) if attr.width != arg.width => {
                return Err(err!(
                    span;
                    "`repr({attr})` conflicts with the `{arg}` width given to `bitmask`",
                ));
            }
            (Some(it), _) | (None, Some(it)) => Some(it),
            (None, None) => None,
        };

        if let Some((span, repr)) = explicit {
            // A CT width is left to rustc, which rejects out-of-range constants on its own.
            if let Width::Met(_, item_width) = item_width {
                let item_width = *item_width;
                if repr.width < item_width {
                    return Err(err!(
                        span;
                        "type `{repr}` is too small to represent item of {item_width} bits",
                    ));
                }
            }

            return Ok(repr);
        }

        let mut pseudo_type = match item_width {
            Width::Met(_, width) => PseudoType { width: *width },
            Width::Ct(_) => {
                return Err(err!(
                    item_width.span();
                    "discriminant cannot be evaluated at macro evaluation time; add a `#[repr]` \
                     attribute or a `width` argument",
                ));
            }
        };
        pseudo_type.round_up();

        pseudo_type.try_into_rust_type().ok_or_else(
            || err!(item_span; "item cannot be represented by any unsigned integer primitive"),
        )
    }

    /// Converts this into a [`syn::Type`] with the given span.
    pub(crate) fn into_syn_type(self, span: Span2) -> syn::Type {
        ty_path!(syn::Ident::new(&self.to_string(), span))
    }
}

impl_display!(RustType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_up_reaches_next_primitive() {
        let cases = [(1, 8), (8, 8), (9, 16), (16, 16), (17, 32), (33, 64), (65, 128), (129, 256)];

        for (width, expected) in cases {
            let mut ty = PseudoType { width };
            ty.round_up();
            assert_eq!(ty.width, expected, "rounding up u{width}");
        }
    }

    #[test]
    fn only_real_primitives_exist() {
        for width in [8, 16, 32, 64, 128] {
            assert!(PseudoType { width }.exists());
        }
        for width in [1, 7, 12, 24, 256] {
            assert!(!PseudoType { width }.exists());
        }
    }

    #[test]
    fn parse_recognizes_unsigned_integers() {
        let parse = |name: &str| PseudoType::parse(&syn::Ident::new(name, Span2::call_site()));

        assert!(parse("i32").is_none());
        assert!(parse("C").is_none());
        assert!(matches!(parse("u0"), Some(Err(_))));
        assert!(matches!(parse("usize"), Some(Err(_))));
        assert!(matches!(parse("u37"), Some(Ok(PseudoType { width: 37 }))));
    }
}
