// SPDX-License-Identifier: MPL-2.0

//! The bit-width of a flag set.

use super::*;

/// The bit-width of a flag set: the number of bits needed to hold its widest enumerator.
///
/// If every discriminant is an integer literal, or the implicit successor of one, the width can be
/// calculated exactly at macro evaluation time (MET). Otherwise, it depends on information only
/// rustc has at compile-time (CT) of the crate invoking `#[bitmask]`.
///
/// This type is [spanned]. The associated span can be obtained from the [`span`] method.
///
/// [spanned]: Span2
/// [`span`]: Self::span
#[derive(Clone)]
pub(crate) enum Width {
    /// A width known at macro evaluation time (MET).
    Met(Span2, usize),
    /// A width that depends on compile-time (CT) information.
    ///
    /// The expression is the first discriminant that could not be evaluated.
    Ct(syn::Expr),
}

impl Width {
    /// The width of a discriminant with the given value.
    ///
    /// This is never less than one, so that a flag set holding only zero still occupies a bit.
    pub(crate) fn of_value(span: Span2, value: u128) -> Self {
        let bits = u128::BITS - value.leading_zeros();

        Self::Met(span, bits.max(1) as usize)
    }

    /// The associated span.
    pub(crate) fn span(&self) -> Span2 {
        match self {
            Self::Met(span, _) => *span,
            Self::Ct(expr) => expr.span(),
        }
    }

    /// The wider of two `Width`s.
    ///
    /// The span of the wider operand is kept. A CT width absorbs any other width; if both are CT,
    /// `lhs` wins.
    pub(crate) fn max(lhs: Self, rhs: Self) -> Self {
        match (lhs, rhs) {
            (Self::Met(lhs_span, lhs), Self::Met(rhs_span, rhs)) => {
                if rhs > lhs {
                    Self::Met(rhs_span, rhs)
                } else {
                    Self::Met(lhs_span, lhs)
                }
            }
            (it @ Self::Ct(_), _) | (_, it @ Self::Ct(_)) => it,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn met(width: Width) -> Option<usize> {
        match width {
            Width::Met(_, it) => Some(it),
            Width::Ct(_) => None,
        }
    }

    #[test]
    fn of_value_counts_significant_bits() {
        let span = Span2::call_site();

        assert_eq!(met(Width::of_value(span, 0)), Some(1));
        assert_eq!(met(Width::of_value(span, 1)), Some(1));
        assert_eq!(met(Width::of_value(span, 8)), Some(4));
        assert_eq!(met(Width::of_value(span, 0xff)), Some(8));
        assert_eq!(met(Width::of_value(span, 0x100)), Some(9));
        assert_eq!(met(Width::of_value(span, u128::MAX)), Some(128));
    }

    #[test]
    fn max_prefers_compile_time_widths() {
        let span = Span2::call_site();
        let ct = || Width::Ct(lit_int(span, 1));

        assert_eq!(met(Width::max(Width::Met(span, 3), Width::Met(span, 7))), Some(7));
        assert_eq!(met(Width::max(Width::Met(span, 7), Width::Met(span, 3))), Some(7));
        assert_eq!(met(Width::max(Width::Met(span, 7), ct())), None);
        assert_eq!(met(Width::max(ct(), Width::Met(span, 7))), None);
    }
}
