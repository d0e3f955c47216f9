// SPDX-License-Identifier: MPL-2.0

#![deny(missing_docs)]

//! Documented flags.

/// Which borders to draw.
#[bitwise_enum::bitmask]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Border {
    /// No border.
    #[allow(dead_code)]
    None = 0,
    /// The top border.
    Top = 1,
    /// The bottom border.
    Bottom = 2,
}

mod inner {
    #[bitwise_enum::bitmask]
    pub(crate) enum Visible {
        A = 1,
    }
}

fn main() {
    let border = Border::default();
    assert_eq!(border, Border::None);
    assert!(Border::None < Border::Top);
    assert!(bool::from(Border::Top));
    assert!(!bool::from(Border::None));

    let _ = inner::Visible::A | inner::Visible::A;
}
