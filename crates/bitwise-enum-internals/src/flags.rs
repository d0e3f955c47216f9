// SPDX-License-Identifier: MPL-2.0

//! The `bitmask` macro for enums.

use super::*;

/// The traits every emitted flag type derives.
///
/// User-written derives of these traits are dropped so that they are not implemented twice.
const DERIVED_TRAITS: [&str; 4] = ["Clone", "Copy", "PartialEq", "Eq"];

/// The variant attributes that may be forwarded to the associated constant of a variant.
const VARIANT_ATTRS: [&str; 6] = ["doc", "allow", "warn", "deny", "forbid", "expect"];

/// The `bitmask` macro for enums.
///
/// The enum is replaced by a `#[repr(transparent)]` tuple struct over its representation, because
/// an `enum` may only hold its declared discriminants while a flag set may hold any combination of
/// them. Each variant becomes an associated constant of the same name.
pub(crate) fn bitmask(args: &Args, item: syn::ItemEnum) -> Result<Output> {
    check_generics(&item.generics)?;

    let item_span = item.span();
    let syn::ItemEnum { mut attrs, vis, ident, variants, .. } = item;

    // These are the associated constants, one per variant.
    let mut consts: Vec<syn::ImplItem> = Vec::with_capacity(variants.len());
    // This is the width of the widest discriminant seen so far.
    let mut item_width = Width::Met(ident.span(), 1);
    // This is the previous variant and, if it is known at macro evaluation time, its value.
    let mut prev: Option<(&syn::Ident, Option<u128>)> = None;

    for variant in variants.iter() {
        if !variant.fields.is_empty() {
            return Err(err!(variant.fields.span(); "variant fields are not supported"));
        }
        let unsupported_attr = variant
            .attrs
            .iter()
            .find(|attr| !VARIANT_ATTRS.iter().any(|name| attr.path().is_ident(name)));
        if let Some(attr) = unsupported_attr {
            return Err(err!(attr.span(); "variant attribute is not supported"));
        }

        let span = variant.ident.span();

        // `discrim` is the discriminant expression, and `value` is its value if it can be computed
        // here.
        //
        // If the user explicitly specifies a discriminant, we will use that. Otherwise, the
        // discriminant will be one greater than the last (or zero if this is the first variant).
        let (discrim, value) = match (&variant.discriminant, prev) {
            (Some((_, expr)), _) => {
                let value = match expr {
                    syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(lit), .. }) => {
                        Some(lit.base10_parse::<u128>().map_err(Error)?)
                    }
                    _ => None,
                };

                (expr.clone(), value)
            }
            (None, None) => (lit_int(span, 0), Some(0)),
            (None, Some((prev_ident, prev_value))) => {
                match prev_value.and_then(|it| it.checked_add(1)) {
                    Some(value) => (lit_int(span, value), Some(value)),
                    None => {
                        // Rendered:
                        //   Self::#prev_ident.0 + 1
                        let expr: syn::Expr = syn::ExprBinary {
                            attrs: vec![],
                            left: Box::new(field_zero(span, self_variant(span, prev_ident))),
                            op: syn::BinOp::Add(syn::Token![+](span)),
                            right: Box::new(lit_int(span, 1)),
                        }
                        .into();

                        (expr, None)
                    }
                }
            }
        };
        let discrim_width = match value {
            Some(value) => Width::of_value(discrim.span(), value),
            None => Width::Ct(discrim.clone()),
        };
        item_width = Width::max(item_width, discrim_width);

        // Rendered:
        //   #(#variant.attrs)* #vis const #variant.ident: Self = Self(#discrim);
        consts.push(
            syn::ImplItemConst {
                attrs: variant.attrs.clone(),
                vis: vis.clone(),
                defaultness: None,
                const_token: syn::Token![const](span),
                ident: variant.ident.clone(),
                generics: Default::default(),
                colon_token: syn::Token![:](span),
                ty: ty_path!(span; Self),
                eq_token: syn::Token![=](span),
                expr: new_self(span, discrim),
                semi_token: syn::Token![;](span),
            }
            .into(),
        );

        prev = Some((&variant.ident, value));
    }

    // This is the representation, or storage type, of the emitted item.
    let repr = uint::RustType::repr_for_item(item_span, &item_width, &mut attrs, args.repr_width())?;

    strip_derives(&mut attrs)?;
    let derives: Punctuated<syn::Path, syn::Token![,]> = Punctuated::from_iter([
        path!(item_span; ::core::clone::Clone),
        path!(item_span; ::core::marker::Copy),
        path!(item_span; ::core::cmp::PartialEq),
        path!(item_span; ::core::cmp::Eq),
    ]);
    attrs.push(list_attr(item_span, "derive", derives.into_token_stream()));
    attrs.push(list_attr(
        item_span,
        "repr",
        syn::Ident::new("transparent", item_span).into_token_stream(),
    ));

    // This is the value of `Bitmask::ALL`.
    //
    // This looks like:
    //   Self(Self::A.0 | Self::B.0 | /* ... */)
    let all = variants
        .iter()
        .map(|variant| field_zero(item_span, self_variant(item_span, &variant.ident)))
        .reduce(|lhs, rhs| {
            syn::ExprBinary {
                attrs: vec![],
                left: Box::new(lhs),
                op: syn::BinOp::BitOr(syn::Token![|](item_span)),
                right: Box::new(rhs),
            }
            .into()
        })
        .unwrap_or_else(|| lit_int(item_span, 0));
    let all = new_self(item_span, all);

    let allow_dead_code =
        list_attr(item_span, "allow", syn::Ident::new("dead_code", item_span).into_token_stream());
    // Rendered:
    //   #vis const fn bits(self) -> #repr { self.0 }
    let bits_fn = syn::ImplItemFn {
        attrs: vec![
            doc_attr(item_span, " Returns the underlying representation of these flags."),
            allow_dead_code.clone(),
        ],
        vis: vis.clone(),
        defaultness: None,
        sig: sig::Builder::new().with_const().with_receiver(Receiver::new_self()).build(
            item_span,
            syn::Ident::new("bits", item_span),
            |_| [],
            |span| Some(repr.into_syn_type(span)),
        ),
        block: blockify(field_zero(item_span, expr_path!(item_span; self))),
    };
    // Rendered:
    //   #vis const fn from_bits(bits: #repr) -> Self { Self(bits) }
    let from_bits_fn = syn::ImplItemFn {
        attrs: vec![
            doc_attr(item_span, " Creates flags from a raw representation, keeping every bit."),
            allow_dead_code,
        ],
        vis: vis.clone(),
        defaultness: None,
        sig: sig::Builder::new().with_const().build(
            item_span,
            syn::Ident::new("from_bits", item_span),
            |span| {
                [syn::PatType {
                    attrs: vec![],
                    pat: Box::new(pat_path!(span; bits)),
                    colon_token: syn::Token![:](span),
                    ty: Box::new(repr.into_syn_type(span)),
                }]
            },
            |span| Some(ty_path!(span; Self)),
        ),
        block: blockify(new_self(item_span, expr_path!(item_span; bits))),
    };

    let impl_item = syn::ItemImpl {
        attrs: vec![list_attr(
            item_span,
            "allow",
            syn::Ident::new("non_upper_case_globals", item_span).into_token_stream(),
        )],
        defaultness: None,
        unsafety: None,
        impl_token: syn::Token![impl](item_span),
        generics: Default::default(),
        trait_: None,
        self_ty: Box::new(ty_path!(ident.clone())),
        brace_token: syn::token::Brace(item_span),
        items: consts.into_iter().chain([bits_fn, from_bits_fn].map(syn::ImplItem::Fn)).collect(),
    };

    let self_ty: syn::Type = ty_path!(ident.clone());
    let repr_ty = repr.into_syn_type(item_span);
    let it = || -> syn::Expr { expr_path!(item_span; it) };
    // Rendered:
    //   it.0 != 0
    let is_set: syn::Expr = syn::ExprBinary {
        attrs: vec![],
        left: Box::new(field_zero(item_span, it())),
        op: syn::BinOp::Ne(syn::Token![!=](item_span)),
        right: Box::new(lit_int(item_span, 0)),
    }
    .into();
    let conversions = vec![
        conversion(item_span, self_ty.clone(), ty_path!(item_span; bool), is_set),
        conversion(item_span, self_ty.clone(), repr_ty.clone(), field_zero(item_span, it())),
        conversion(item_span, repr_ty, self_ty, new_self(item_span, it())),
    ];

    // Rendered:
    //   ::bitwise_enum::enable_bitwise_operators!(#ident);
    let registration = syn::ItemMacro {
        attrs: vec![],
        ident: None,
        mac: syn::Macro {
            path: path!(item_span; ::bitwise_enum::enable_bitwise_operators),
            bang_token: syn::Token![!](item_span),
            delimiter: syn::MacroDelimiter::Paren(syn::token::Paren(item_span)),
            tokens: ident.to_token_stream(),
        },
        semi_token: Some(syn::Token![;](item_span)),
    };

    let impl_bitmask_for_item = BitmaskImpl {
        ident: ident.clone(),
        repr,
        all,
        from_repr: blockify(new_self(item_span, expr_path!(item_span; repr))),
        into_repr: blockify(field_zero(item_span, expr_path!(item_span; self))),
    };

    // Rendered:
    //   #(#attrs)* #vis struct #ident(#repr);
    let item = syn::ItemStruct {
        attrs,
        vis,
        struct_token: syn::Token![struct](item_span),
        ident,
        generics: Default::default(),
        fields: syn::FieldsUnnamed {
            paren_token: syn::token::Paren(item_span),
            unnamed: once(syn::Field {
                attrs: vec![],
                vis: syn::Visibility::Inherited,
                mutability: syn::FieldMutability::None,
                ident: None,
                colon_token: None,
                ty: repr.into_syn_type(item_span),
            })
            .collect(),
        }
        .into(),
        semi_token: Some(syn::Token![;](item_span)),
    };

    Ok(Output { item, impl_item, impl_bitmask_for_item, conversions, registration })
}

/// Returns an [`Error`] if the given [`syn::Generics`] is non-empty.
///
/// The `bitmask` macro does not support generic items.
fn check_generics(generics: &syn::Generics) -> Result<()> {
    let syn::Generics { params, where_clause, .. } = generics;
    if !params.is_empty() {
        return Err(err!(params.span(); "generic parameters are not supported in this context"));
    }
    if let Some(clause) = where_clause {
        return Err(err!(clause.span(); "`where` clauses are not supported in this context"));
    }

    Ok(())
}

/// Removes the traits in [`DERIVED_TRAITS`] from every `#[derive]` attribute, dropping attributes
/// that end up empty.
fn strip_derives(attrs: &mut Vec<syn::Attribute>) -> Result<()> {
    let mut kept = Vec::with_capacity(attrs.len());
    for mut attr in std::mem::take(attrs) {
        if !attr.path().is_ident("derive") {
            kept.push(attr);
            continue;
        }

        let paths = attr
            .parse_args_with(Punctuated::<syn::Path, syn::Token![,]>::parse_terminated)
            .map_err(Error)?;
        let paths: Punctuated<syn::Path, syn::Token![,]> = paths
            .into_iter()
            .filter(|path| {
                !path
                    .segments
                    .last()
                    .is_some_and(|seg| DERIVED_TRAITS.iter().any(|name| seg.ident == name))
            })
            .collect();
        if paths.is_empty() {
            continue;
        }
        if let syn::Meta::List(list) = &mut attr.meta {
            list.tokens = paths.into_token_stream();
        }
        kept.push(attr);
    }
    *attrs = kept;

    Ok(())
}

/// Creates a `From` implementation.
///
/// This looks like:
///
/// ```ignore
/// impl ::core::convert::From<#from> for #to {
///     fn from(it: #from) -> Self { #body }
/// }
/// ```
fn conversion(span: Span2, from: syn::Type, to: syn::Type, body: syn::Expr) -> syn::ItemImpl {
    let mut trait_path = path!(span; ::core::convert::From);
    if let Some(seg) = trait_path.segments.last_mut() {
        seg.arguments = syn::PathArguments::AngleBracketed(syn::AngleBracketedGenericArguments {
            colon2_token: None,
            lt_token: syn::Token![<](span),
            args: once(syn::GenericArgument::Type(from.clone())).collect(),
            gt_token: syn::Token![>](span),
        });
    }

    let sig = sig::Builder::new().build(
        span,
        syn::Ident::new("from", span),
        |span| {
            [syn::PatType {
                attrs: vec![],
                pat: Box::new(pat_path!(span; it)),
                colon_token: syn::Token![:](span),
                ty: Box::new(from),
            }]
        },
        |span| Some(ty_path!(span; Self)),
    );

    syn::ItemImpl {
        attrs: vec![],
        defaultness: None,
        unsafety: None,
        impl_token: syn::Token![impl](span),
        generics: Default::default(),
        trait_: Some((None, trait_path, syn::Token![for](span))),
        self_ty: Box::new(to),
        brace_token: syn::token::Brace(span),
        items: vec![syn::ImplItem::Fn(syn::ImplItemFn {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            defaultness: None,
            sig,
            block: blockify(body),
        })],
    }
}
