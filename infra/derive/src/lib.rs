#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the WireHub workspace.
//! This crate provides attribute macros to remove the boilerplate around
//! controller outlet declarations and domain error enums.
//!
//! ## Usage
//! Consumers inside the workspace depend on the crate directly:
//! ```toml
//! [dependencies]
//! wirehub-derive = { path = "../infra/derive" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests/examples as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro to declare a UI controller with outlet markers.
///
/// Applied to a named-field struct, this macro implements the
/// `wirehub_outlets::Controller` trait and generates a `wire_outlets` method
/// that registers every marked field with an outlet registry, in declaration
/// order. Fields are marked with `#[outlet]` (singular, property must end in
/// `Outlet`) or `#[outlets]` (plural, property must end in `Outlets`).
///
/// Property names default to the camelCased field name, matching the host
/// framework's naming convention (`results_outlet` → `resultsOutlet`). An
/// explicit name overrides the mapping.
///
/// # Arguments
///
/// * `#[outlet]` / `#[outlets]` - field markers selecting the declaration kind.
/// * `#[outlet(name = "...")]` - overrides the derived property name.
///
/// # Injected Behaviors
///
/// * **Derives**: Automatically adds `Debug` if missing (required by the
///   `Controller` bound).
/// * **Wiring**: `wire_outlets(&self, &OutletRegistry)` propagating the first
///   naming-convention violation.
///
/// # Example
///
/// ```rust,ignore
/// use wirehub_outlets::prelude::*;
///
/// #[controller]
/// pub struct ModalController {
///     #[outlet]
///     confirm_outlet: Option<String>,
///     #[outlets]
///     item_outlets: Vec<String>,
/// }
///
/// let registry = OutletRegistry::new();
/// let modal = ModalController { confirm_outlet: None, item_outlets: vec![] };
/// modal.wire_outlets(&registry)?;
/// assert_eq!(registry.outlets(&modal), ["confirm", "item"]);
/// ```
#[proc_macro_attribute]
pub fn controller(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::controller::expand_controller(args.into(), input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// This macro reduces boilerplate by transforming a standard enum into a
/// fully-featured error type integrated with the WireHub infrastructure.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides specialized `From<&str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`).
/// 4. Tuple or unit variants are rejected to keep error wiring explicit and reliable.
///
/// # Example
///
/// ```rust,ignore
/// use wirehub_derive::wirehub_error;
/// use std::borrow::Cow;
///
/// #[wirehub_error]
/// pub enum WiringError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io {
///         #[source]
///         source: std::io::Error,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn wirehub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
