use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Field, Fields, Ident, ItemStruct, LitStr};

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutletKind {
    Singular,
    Plural,
}

struct OutletDecl {
    property: String,
    kind: OutletKind,
}

/// Expands the `#[controller]` attribute macro.
///
/// Implements the `Controller` trait for the struct and generates a
/// `wire_outlets` method from its `#[outlet]` / `#[outlets]` field markers.
pub fn expand_controller(args: TokenStream, mut input: ItemStruct) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new_spanned(&input.ident, "controller takes no arguments")
            .to_compile_error();
    }

    let Fields::Named(fields) = &mut input.fields else {
        return syn::Error::new_spanned(
            &input.ident,
            "controller requires a struct with named fields",
        )
        .to_compile_error();
    };

    let mut declared = Vec::new();
    for field in &mut fields.named {
        let Some(ident) = field.ident.clone() else { continue };
        match take_outlet_marker(&ident, field) {
            Ok(Some(decl)) => declared.push(decl),
            Ok(None) => {},
            Err(err) => return err.to_compile_error(),
        }
    }

    let name = &input.ident;
    let injected = injected_derives(&input.attrs);
    let calls = declared.iter().map(|decl| {
        let property = &decl.property;
        match decl.kind {
            OutletKind::Singular => quote! { registry.register_outlet(self, #property)?; },
            OutletKind::Plural => quote! { registry.register_outlets(self, #property)?; },
        }
    });

    quote! {
        #injected
        #input

        #[automatically_derived]
        impl ::wirehub_outlets::Controller for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl #name {
            /// Registers every declared outlet with `registry`, in declaration order.
            ///
            /// # Errors
            /// Returns the registrar's naming-convention error for the first
            /// declared property that violates the outlet suffix rule.
            pub fn wire_outlets(
                &self,
                registry: &::wirehub_outlets::OutletRegistry,
            ) -> ::std::result::Result<(), ::wirehub_outlets::OutletError> {
                #( #calls )*
                Ok(())
            }
        }
    }
}

/// Extracts at most one outlet marker from the field, stripping it from the
/// emitted struct so the compiler never sees the helper attribute.
fn take_outlet_marker(ident: &Ident, field: &mut Field) -> syn::Result<Option<OutletDecl>> {
    let mut marker: Option<OutletDecl> = None;
    let mut keep = Vec::with_capacity(field.attrs.len());

    for attr in field.attrs.drain(..) {
        let kind = if attr.path().is_ident("outlet") {
            OutletKind::Singular
        } else if attr.path().is_ident("outlets") {
            OutletKind::Plural
        } else {
            keep.push(attr);
            continue;
        };

        if marker.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "Duplicate outlet marker; a field declares at most one outlet",
            ));
        }

        let property = match parse_marker_name(&attr)? {
            Some(lit) => lit.value(),
            None => camel_case(ident),
        };
        marker = Some(OutletDecl { property, kind });
    }

    field.attrs = keep;
    Ok(marker)
}

fn parse_marker_name(attr: &Attribute) -> syn::Result<Option<LitStr>> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(None),
        syn::Meta::List(_) => {
            let mut name = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    let lit: LitStr = value.parse()?;
                    if name.replace(lit).is_some() {
                        return Err(meta.error("Duplicate argument"));
                    }
                    return Ok(());
                }
                Err(meta.error("Unsupported argument; expected name = \"...\""))
            })?;
            Ok(name)
        },
        syn::Meta::NameValue(nv) => Err(syn::Error::new_spanned(
            nv,
            "Expected #[outlet] or #[outlet(name = \"...\")]",
        )),
    }
}

/// Maps a snake_case field name onto the host framework's camelCase property
/// convention (`results_outlet` → `resultsOutlet`).
fn camel_case(ident: &Ident) -> String {
    let raw = ident.to_string();
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = false;
    for ch in raw.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn injected_derives(attrs: &[Attribute]) -> TokenStream {
    if derived_trait_names(attrs).contains("Debug") {
        quote! {}
    } else {
        quote! { #[derive(Debug)] }
    }
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                traits.insert(ident.to_string());
            } else if let Some(ident) = meta.path.segments.last().map(|seg| seg.ident.to_string()) {
                traits.insert(ident);
            }
            Ok(())
        });
    }

    traits
}
