// SPDX-License-Identifier: MPL-2.0

//! Implementation details for *bitwise-enum*.
//!
//! This crate provides the [`bitmask!`] attribute macro that is re-exported by the main
//! *bitwise-enum* crate.

#![deny(rustdoc::broken_intra_doc_links, rustdoc::private_intra_doc_links)]

/// A type alias for [`Result<T, E>`] where `E` is [`Error`].
///
/// [`Result<T, E>`]: std::result::Result
type Result<T> = std::result::Result<T, Error>;

/// The error type returned by fallible functions in *bitwise-enum-internals*.
///
/// This is a wrapper over [`syn::Error`] and is convertible into [`TokenStream2`] via a [`From`]
/// implementation.
struct Error(syn::Error);

impl From<Error> for TokenStream2 {
    fn from(e: Error) -> Self {
        e.0.into_compile_error()
    }
}

/// Creates an [`Error`] with the given message and, optionally, span.
///
/// The syntax of this macro is similar to that of [`format!`] except that the format string may be
/// preceded by a span expression and semicolon (e.g., `span;`). The span of the error message is
/// the span expression, if present, or [`Span2::call_site`] otherwise.
///
/// # Examples
///
/// ```ignore
/// # fn main() -> Result<(), Error> {
/// let ident: syn::Ident;
/// # ident = syn::Ident::new("_", Span2::call_site());
/// return Err(err!(ident.span(); "variant `{ident}` cannot have fields"));
/// # }
/// ```
macro_rules! err {
    ($fmt:expr $(, $fmt_arg:expr)* $(,)?) => {
        err!(Span2::call_site(); $fmt $(, $fmt_arg)*)
    };
    ($span:expr ; $fmt:expr $(, $fmt_arg:expr)* $(,)?) => {
        Error(syn::Error::new($span, format!($fmt $(, $fmt_arg)*)))
    };
}

/// Creates a [`syn::Path`] from the given path and span.
///
/// This macro accepts a span expression, semicolon ';', and path, in that order.
///
/// # Examples
///
/// ```ignore
/// let span: Span2;
/// # span = Span2::call_site();
/// let paths: [syn::Path; 3] = [
///     path!(span; bool),
///     path!(span; Self::Repr),
///     path!(span; ::core::convert::From),
/// ];
/// ```
macro_rules! path {
    // Case for identifiers and paths without leading colons.
    ($span:expr ; $head_seg:ident $(:: $tail_seg:ident)*) => {
        path!(@internal => {
            span: $span,
            leading_colon: None,
            segments: $head_seg $($tail_seg)*,
        })
    };
    // Case for paths with leading colons `::`.
    ($span:expr ; :: $head_seg:ident $(:: $tail_seg:ident)*) => {
        path!(@internal => {
            span: $span,
            leading_colon: Some(syn::Token![::]($span)),
            segments: $head_seg $($tail_seg)*,
        })
    };
    // Implementation detail.
    (@internal => {
        span: $span:expr,
        leading_colon: $leading_colon:expr,
        segments: $($seg:ident)* $(,)?
    }) => {
        syn::Path {
            leading_colon: $leading_colon,
            segments: [$(stringify!($seg)),*]
                .into_iter()
                .map(|seg| syn::PathSegment::from(syn::Ident::new(seg, $span)))
                .collect(),
        }
    };
}

/// Creates an implementor of `From<syn::ExprPath>`.
///
/// This macro offers two syntaxes: one equivalent to [`path!`], and one that accepts an expression
/// implementing `Into<syn::Path>`.
macro_rules! expr_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::ExprPath { attrs: vec![], qself: None, path: path!($span; $($path_piece)*) }.into()
    };
    ($path:expr $(,)?) => {
        syn::ExprPath { attrs: vec![], qself: None, path: $path.into() }.into()
    }
}

/// Creates an implementor of `From<syn::PatPath>`.
///
/// This macro is equivalent to [`path!`] except for the output type.
macro_rules! pat_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::PatPath { attrs: vec![], qself: None, path: path!($span; $($path_piece)*) }.into()
    };
}

/// Creates an implementor of `From<syn::TypePath>`.
///
/// This macro offers two syntaxes: one equivalent to [`path!`], and one that accepts an expression
/// implementing `Into<syn::Path>`.
macro_rules! ty_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::TypePath { qself: None, path: path!($span; $($path_piece)*) }.into()
    };
    ($path:expr $(,)?) => {
        syn::TypePath { qself: None, path: $path.into() }.into()
    }
}

/// Wraps an expression in a [`syn::Block`].
///
/// # Examples
///
/// ```ignore
/// let span: Span2;
/// # span = Span2::call_site();
/// // Rendered:
/// //   { Self::Repr }
/// let repr_block: syn::Block = blockify::<syn::Expr>(expr_path!(span; Self::Repr));
/// ```
fn blockify<E: Into<syn::Expr>>(expr: E) -> syn::Block {
    let expr = expr.into();

    syn::Block {
        brace_token: syn::token::Brace(expr.span()),
        stmts: vec![syn::Stmt::Expr(expr, None)],
    }
}

/// Creates an unsuffixed integer literal expression.
fn lit_int(span: Span2, value: impl fmt::Display) -> syn::Expr {
    syn::ExprLit { attrs: vec![], lit: syn::LitInt::new(&value.to_string(), span).into() }.into()
}

/// Creates an expression of the form `Self(#inner)`.
fn new_self(span: Span2, inner: syn::Expr) -> syn::Expr {
    syn::ExprCall {
        attrs: vec![],
        func: Box::new(expr_path!(span; Self)),
        paren_token: syn::token::Paren(span),
        args: once(inner).collect(),
    }
    .into()
}

/// Creates an expression of the form `#base.0`.
fn field_zero(span: Span2, base: syn::Expr) -> syn::Expr {
    syn::ExprField {
        attrs: vec![],
        base: Box::new(base),
        dot_token: syn::Token![.](span),
        member: syn::Member::Unnamed(syn::Index { index: 0, span }),
    }
    .into()
}

/// Creates an expression of the form `Self::#ident`.
fn self_variant(span: Span2, ident: &syn::Ident) -> syn::Expr {
    expr_path!(syn::Path {
        leading_colon: None,
        segments: [syn::Ident::new("Self", span), ident.clone()]
            .into_iter()
            .map(syn::PathSegment::from)
            .collect(),
    })
}

/// Creates an outer attribute of the form `#[#name(#tokens)]`.
fn list_attr(span: Span2, name: &str, tokens: TokenStream2) -> syn::Attribute {
    syn::Attribute {
        pound_token: syn::Token![#](span),
        style: syn::AttrStyle::Outer,
        bracket_token: syn::token::Bracket(span),
        meta: syn::MetaList {
            path: syn::Ident::new(name, span).into(),
            delimiter: syn::MacroDelimiter::Paren(syn::token::Paren(span)),
            tokens,
        }
        .into(),
    }
}

/// Creates an outer attribute of the form `#[doc = #text]`.
fn doc_attr(span: Span2, text: &str) -> syn::Attribute {
    syn::Attribute {
        pound_token: syn::Token![#](span),
        style: syn::AttrStyle::Outer,
        bracket_token: syn::token::Bracket(span),
        meta: syn::MetaNameValue {
            path: path!(span; doc),
            eq_token: syn::Token![=](span),
            value: syn::ExprLit { attrs: vec![], lit: syn::LitStr::new(text, span).into() }.into(),
        }
        .into(),
    }
}

mod flags;
mod receiver;
mod sig;
mod uint;
mod width;

use std::{fmt, iter::once};

use proc_macro::TokenStream;
use proc_macro2::{Span as Span2, TokenStream as TokenStream2};
use quote::ToTokens;
use receiver::Receiver;
use syn::{parse::Parser as _, punctuated::Punctuated, spanned::Spanned as _};
use width::Width;

/// Turns an enum declaration into a flag type with bitwise operators.
///
/// Refer to the `guide` module in the *bitwise-enum* crate root for usage information.
#[proc_macro_attribute]
pub fn bitmask(args: TokenStream, item: TokenStream) -> TokenStream {
    match expand(args.into(), item.into()) {
        Ok(it) => it.into(),
        Err(e) => TokenStream2::from(e).into(),
    }
}

/// The body of [`bitmask!`], operating on [`proc_macro2`] tokens.
fn expand(args: TokenStream2, item: TokenStream2) -> Result<TokenStream2> {
    let args = Args::parse(args)?;
    let item = match syn::parse2::<syn::Item>(item).map_err(Error)? {
        syn::Item::Enum(item) => item,
        item => {
            return Err(err!(item.span(); "item must be an enum"));
        }
    };

    flags::bitmask(&args, item).map(Output::into_tokens)
}

/// Models acceptable arguments to the `#[bitmask]` attribute.
#[derive(Default)]
struct Args {
    /// The `size` argument and its span, if present.
    ///
    /// This determines the size, in bytes, of the representation of the emitted item. This
    /// argument is mutually-exclusive with the [`width`] argument.
    ///
    /// [`width`]: Self::width
    size: Option<(Span2, usize)>,
    /// The `width` argument and its span, if present.
    ///
    /// This determines the width, in bits, of the representation of the emitted item. This
    /// argument is mutually-exclusive with the [`size`] argument.
    ///
    /// [`size`]: Self::size
    width: Option<(Span2, usize)>,
}

impl Args {
    /// Parses comma-separated arguments to the `#[bitmask]` attribute from the given
    /// [`TokenStream2`].
    ///
    /// # Errors
    ///
    /// An error is returned if any argument
    ///
    /// - is not of the form `"name" "=" "value"` (ABNF);
    /// - has a name other than `size` or `width`;
    /// - has the same name as a previous argument; or
    /// - has a value that is not an integer literal.
    ///
    /// Also, an error is returned if both the `size` and `width` arguments are present.
    fn parse(args: TokenStream2) -> Result<Self> {
        let mut output = Self::default();

        if args.is_empty() {
            return Ok(output);
        }

        syn::meta::parser(|meta| {
            let ident = meta.path.get_ident().ok_or_else(|| -> syn::Error {
                syn::Error::new(meta.path.span(), "argument path must be an identifier")
            })?;
            let arg = if ident == "size" {
                &mut output.size
            } else if ident == "width" {
                &mut output.width
            } else {
                return Err(meta.error("argument is not supported"));
            };
            if arg.is_some() {
                return Err(meta.error("argument is a duplicate"));
            }
            let lit = meta.value()?.parse::<syn::LitInt>()?;
            *arg = Some((lit.span(), lit.base10_parse()?));

            Ok(())
        })
        .parse2(args)
        .map_err(Error)?;

        if output.size.is_some() && output.width.is_some() {
            return Err(err!("`size` and `width` arguments are mutually exclusive"));
        }

        Ok(output)
    }

    /// The bit-width, if any, the user requested for the representation of the emitted item.
    fn repr_width(&self) -> Option<(Span2, usize)> {
        self.width.or(self.size.map(|(span, size)| (span, size.saturating_mul(8))))
    }
}

/// The output of [`flags::bitmask`].
struct Output {
    /// The emitted flag type.
    item: syn::ItemStruct,
    /// The <code>impl&nbsp;<em>item</em></code> [impl block] holding one associated constant per
    /// enumerator.
    ///
    /// [impl block]: syn::ItemImpl
    impl_item: syn::ItemImpl,
    /// The implementation of the `Bitmask` trait for [the emitted item].
    ///
    /// [the emitted item]: Self::item
    impl_bitmask_for_item: BitmaskImpl,
    /// `From` implementations between the emitted item, its representation, and `bool`.
    conversions: Vec<syn::ItemImpl>,
    /// The `enable_bitwise_operators!` invocation for the emitted item.
    registration: syn::ItemMacro,
}

impl Output {
    /// Converts this into a [`TokenStream2`].
    fn into_tokens(self) -> TokenStream2 {
        let item_span = self.item.span();
        let impl_bitmask_for_item = self.impl_bitmask_for_item.into_item_impl(item_span);

        let mut tokens = self.item.into_token_stream();
        self.impl_item.to_tokens(&mut tokens);
        impl_bitmask_for_item.to_tokens(&mut tokens);
        for conversion in self.conversions {
            conversion.to_tokens(&mut tokens);
        }
        self.registration.to_tokens(&mut tokens);

        tokens
    }
}

/// An implementation of the `Bitmask` trait.
struct BitmaskImpl {
    /// The name of the implementor.
    ident: syn::Ident,
    /// The [representation], or storage type, of the implementor.
    ///
    /// [representation]: uint::RustType::repr_for_item
    repr: uint::RustType,
    /// The value of `Bitmask::ALL`: the union of every enumerator.
    all: syn::Expr,
    /// The block for the `from_repr` function.
    from_repr: syn::Block,
    /// The block for the `into_repr` function.
    into_repr: syn::Block,
}

impl BitmaskImpl {
    /// Converts this into a [`syn::ItemImpl`] with the given span.
    fn into_item_impl(self, span: Span2) -> syn::ItemImpl {
        let colon_token = syn::Token![:](span);
        let eq_token = syn::Token![=](span);
        let semi_token = syn::Token![;](span);

        // Rendered:
        //   type Repr = /* self.repr */;
        let repr_item = syn::ImplItemType {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            defaultness: None,
            type_token: syn::Token![type](span),
            ident: syn::Ident::new("Repr", span),
            generics: Default::default(),
            eq_token,
            ty: self.repr.into_syn_type(span),
            semi_token,
        }
        .into();
        // Rendered:
        //   const ALL: Self = /* self.all */;
        let all_item = syn::ImplItemConst {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            defaultness: None,
            const_token: syn::Token![const](span),
            ident: syn::Ident::new("ALL", span),
            generics: Default::default(),
            colon_token,
            ty: ty_path!(span; Self),
            eq_token,
            expr: self.all,
            semi_token,
        }
        .into();

        // Rendered:
        //   fn from_repr(repr: Self::Repr) -> Self
        let from_repr_sig = sig::Builder::new().build(
            span,
            syn::Ident::new("from_repr", span),
            |span| {
                [syn::PatType {
                    attrs: vec![],
                    pat: Box::new(pat_path!(span; repr)),
                    colon_token: syn::Token![:](span),
                    ty: Box::new(ty_path!(span; Self::Repr)),
                }]
            },
            |span| Some(ty_path!(span; Self)),
        );
        // Rendered:
        //   fn into_repr(self) -> Self::Repr
        let into_repr_sig = sig::Builder::new().with_receiver(Receiver::new_self()).build(
            span,
            syn::Ident::new("into_repr", span),
            |_| [],
            |span| Some(ty_path!(span; Self::Repr)),
        );

        let funcs = [(from_repr_sig, self.from_repr), (into_repr_sig, self.into_repr)]
            .into_iter()
            .map(|(sig, block)| {
                syn::ImplItem::Fn(syn::ImplItemFn {
                    attrs: vec![],
                    vis: syn::Visibility::Inherited,
                    defaultness: None,
                    sig,
                    block,
                })
            });

        // Rendered:
        //   impl ::bitwise_enum::Bitmask for /* self.ident */ {
        //       #repr_item
        //       #all_item
        //       /* funcs */
        //   }
        syn::ItemImpl {
            attrs: vec![],
            defaultness: None,
            unsafety: None,
            impl_token: syn::Token![impl](span),
            generics: Default::default(),
            trait_: Some((None, path!(span; ::bitwise_enum::Bitmask), syn::Token![for](span))),
            self_ty: Box::new(ty_path!(self.ident)),
            brace_token: syn::token::Brace(span),
            items: [repr_item, all_item].into_iter().chain(funcs).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand_ok(args: TokenStream2, item: TokenStream2) -> syn::File {
        match expand(args, item) {
            Ok(tokens) => syn::parse2(tokens).expect("expansion should be valid Rust"),
            Err(e) => panic!("unexpected error: {}", e.0),
        }
    }

    fn expand_err(args: TokenStream2, item: TokenStream2) -> String {
        match expand(args, item) {
            Ok(tokens) => panic!("expected an error, got `{tokens}`"),
            Err(e) => e.0.to_string(),
        }
    }

    fn emitted_struct(file: &syn::File) -> &syn::ItemStruct {
        file.items
            .iter()
            .find_map(|item| match item {
                syn::Item::Struct(it) => Some(it),
                _ => None,
            })
            .expect("a struct should be emitted")
    }

    fn emitted_repr(file: &syn::File) -> String {
        let field = emitted_struct(file).fields.iter().next().expect("one field");

        field.ty.to_token_stream().to_string()
    }

    fn trait_impls(file: &syn::File) -> Vec<String> {
        file.items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Impl(syn::ItemImpl { trait_: Some((_, path, _)), .. }) => {
                    Some(path.segments.last().unwrap().ident.to_string())
                }
                _ => None,
            })
            .collect()
    }

    fn inherent_consts(file: &syn::File) -> Vec<(String, syn::Expr)> {
        file.items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Impl(it @ syn::ItemImpl { trait_: None, .. }) => Some(it),
                _ => None,
            })
            .flat_map(|it| it.items.iter())
            .filter_map(|item| match item {
                syn::ImplItem::Const(it) => Some((it.ident.to_string(), it.expr.clone())),
                _ => None,
            })
            .collect()
    }

    /// Extracts `N` from an expression of the form `Self(N)`.
    fn literal_value(expr: &syn::Expr) -> Option<u128> {
        let syn::Expr::Call(call) = expr else {
            return None;
        };
        match call.args.first()? {
            syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(lit), .. }) => lit.base10_parse().ok(),
            _ => None,
        }
    }

    #[test]
    fn alignment_expands_to_flag_type() {
        let file = expand_ok(
            quote!(),
            quote! {
                pub enum Alignment { None = 0, Top = 1, Bottom = 2, Left = 4, Right = 8 }
            },
        );

        let item = emitted_struct(&file);
        assert_eq!(item.ident, "Alignment");
        assert!(matches!(item.vis, syn::Visibility::Public(_)));
        assert_eq!(emitted_repr(&file), "u8");

        let consts = inherent_consts(&file);
        let names: Vec<_> = consts.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["None", "Top", "Bottom", "Left", "Right"]);
        let values: Vec<_> = consts.iter().map(|(_, expr)| literal_value(expr)).collect();
        assert_eq!(values, [Some(0), Some(1), Some(2), Some(4), Some(8)]);

        assert_eq!(trait_impls(&file), ["Bitmask", "From", "From", "From"]);

        let registration = file.items.iter().find_map(|item| match item {
            syn::Item::Macro(it) => Some(it),
            _ => None,
        });
        let registration = registration.expect("operators should be registered");
        assert_eq!(
            registration.mac.path.segments.last().unwrap().ident,
            "enable_bitwise_operators",
        );
    }

    #[test]
    fn implicit_discriminants_follow_previous_value() {
        let file = expand_ok(quote!(), quote!(enum E { A, B, C = 8, D }));
        let values: Vec<_> =
            inherent_consts(&file).iter().map(|(_, expr)| literal_value(expr)).collect();

        assert_eq!(values, [Some(0), Some(1), Some(8), Some(9)]);
    }

    #[test]
    fn implicit_discriminant_after_expression_is_computed_by_rustc() {
        let file = expand_ok(quote!(width = 32), quote!(enum E { A = 1 << 4, B }));
        let consts = inherent_consts(&file);

        assert_eq!(literal_value(&consts[1].1), None);
        assert_eq!(
            consts[1].1.to_token_stream().to_string(),
            quote!(Self(Self::A.0 + 1)).to_string(),
        );
    }

    #[test]
    fn repr_is_narrowest_primitive_holding_every_discriminant() {
        let cases = [
            (quote!(enum E {}), "u8"),
            (quote!(enum E { A = 0 }), "u8"),
            (quote!(enum E { A = 255 }), "u8"),
            (quote!(enum E { A = 256 }), "u16"),
            (quote!(enum E { A = 0x8000_0000 }), "u32"),
            (quote!(enum E { A = 0x1_0000_0000 }), "u64"),
            (quote!(enum E { A = 1, B = 0x1_0000_0000_0000_0000 }), "u128"),
        ];

        for (item, repr) in cases {
            assert_eq!(emitted_repr(&expand_ok(quote!(), item)), repr);
        }
    }

    #[test]
    fn repr_can_be_chosen_explicitly() {
        let cases = [
            (quote!(), quote!(#[repr(u32)] enum E { A = 1 }), "u32"),
            (quote!(width = 64), quote!(enum E { A = 1 }), "u64"),
            (quote!(size = 2), quote!(enum E { A = 1 }), "u16"),
            (quote!(width = 8), quote!(#[repr(u8)] enum E { A = 1 }), "u8"),
            (quote!(), quote!(#[repr(u16)] enum E { A = 1 << 9 }), "u16"),
        ];

        for (args, item, repr) in cases {
            let file = expand_ok(args, item);
            assert_eq!(emitted_repr(&file), repr);

            // The user's `#[repr]` is replaced by `#[repr(transparent)]`.
            let reprs: Vec<_> = emitted_struct(&file)
                .attrs
                .iter()
                .filter(|attr| attr.path().is_ident("repr"))
                .map(|attr| attr.parse_args::<syn::Ident>().unwrap().to_string())
                .collect();
            assert_eq!(reprs, ["transparent"]);
        }
    }

    #[test]
    fn derives_of_builtin_traits_are_not_duplicated() {
        let file = expand_ok(
            quote!(),
            quote! {
                #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
                #[derive(core::clone::Clone)]
                enum E { A = 1 }
            },
        );
        let derived: Vec<_> = emitted_struct(&file)
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("derive"))
            .flat_map(|attr| {
                attr.parse_args_with(Punctuated::<syn::Path, syn::Token![,]>::parse_terminated)
                    .unwrap()
            })
            .map(|path| path.segments.last().unwrap().ident.to_string())
            .collect();

        assert_eq!(derived, ["Debug", "Hash", "Clone", "Copy", "PartialEq", "Eq"]);
    }

    #[test]
    fn doc_comments_are_forwarded() {
        let file = expand_ok(
            quote!(),
            quote! {
                /// Where to put things.
                enum E {
                    /// Up.
                    A = 1,
                }
            },
        );

        assert!(emitted_struct(&file).attrs.iter().any(|attr| attr.path().is_ident("doc")));
        let inherent = file.items.iter().find_map(|item| match item {
            syn::Item::Impl(it @ syn::ItemImpl { trait_: None, .. }) => Some(it),
            _ => None,
        });
        let has_doc = inherent.unwrap().items.iter().any(|item| match item {
            syn::ImplItem::Const(it) => it.attrs.iter().any(|attr| attr.path().is_ident("doc")),
            _ => false,
        });
        assert!(has_doc);
    }

    #[test]
    fn malformed_arguments_are_rejected() {
        let item = quote!(enum E { A = 1 });
        let cases = [
            (quote!(size = 1, size = 1), "argument is a duplicate"),
            (quote!(width = 8, width = 16), "argument is a duplicate"),
            (quote!(size = 1, width = 8), "`size` and `width` arguments are mutually exclusive"),
            (quote!(bits = 8), "argument is not supported"),
            (quote!(a::b = 8), "argument path must be an identifier"),
            (quote!(width = 12), "width must be 8, 16, 32, 64, or 128 bits"),
        ];

        for (args, message) in cases {
            assert_eq!(expand_err(args, item.clone()), message);
        }
    }

    #[test]
    fn unsupported_items_are_rejected() {
        let cases = [
            quote!(struct S;),
            quote!(mod module {}),
            quote!(fn function() {}),
            quote!(union U { a: u8 }),
            quote!(type T = ();),
        ];

        for item in cases {
            assert_eq!(expand_err(quote!(), item), "item must be an enum");
        }
    }

    #[test]
    fn unsupported_enums_are_rejected() {
        let cases = [
            (quote!(enum E<T> { A = 1 }), "generic parameters are not supported in this context"),
            (quote!(enum E { A(u32) }), "variant fields are not supported"),
            (quote!(enum E { A { a: u32 } }), "variant fields are not supported"),
            (quote!(enum E { #[default] A }), "variant attribute is not supported"),
            (quote!(#[repr(i32)] enum E { A = 1 }), "argument must be an unsigned integer primitive"),
            (quote!(#[repr(u7)] enum E { A = 1 }), "argument must be an existing Rust primitive"),
            (quote!(#[repr(u8)] enum E { A = 256 }), "type `u8` is too small to represent item of 9 bits"),
        ];

        for (item, message) in cases {
            assert_eq!(expand_err(quote!(), item), message);
        }
    }

    #[test]
    fn conflicting_repr_and_width_are_rejected() {
        let message = expand_err(quote!(width = 16), quote!(#[repr(u8)] enum E { A = 1 }));

        assert_eq!(message, "`repr(u8)` conflicts with the `u16` width given to `bitmask`");
    }

    #[test]
    fn non_literal_discriminant_needs_explicit_repr() {
        let message = expand_err(quote!(), quote!(enum E { A = 1 << 3 }));

        assert!(message.starts_with("discriminant cannot be evaluated at macro evaluation time"));
        expand_ok(quote!(size = 1), quote!(enum E { A = 1 << 3 }));
    }
}
