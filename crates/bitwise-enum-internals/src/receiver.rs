// SPDX-License-Identifier: MPL-2.0

//! Models a by-value receiver function argument: `self`.

use super::*;

/// Models a by-value receiver function argument: `self`.
///
/// Flag types are `Copy`, so every generated method takes its receiver by value.
pub(crate) struct Receiver;

impl Receiver {
    /// Creates a `Receiver` of the form `self`.
    pub(crate) fn new_self() -> Self {
        Self
    }

    /// Converts this into a [`syn::FnArg`] with the given span.
    pub(crate) fn into_arg(self, span: Span2) -> syn::FnArg {
        syn::FnArg::Receiver(syn::Receiver {
            attrs: vec![],
            reference: None,
            mutability: None,
            self_token: syn::Token![self](span),
            colon_token: None,
            ty: Box::new(ty_path!(span; Self)),
        })
    }
}
