#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the `SellIt` infrastructure crates.
//!
//! Consumers still need `thiserror` in their own dependency list: the expansion
//! derives `::thiserror::Error` on the annotated enum.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a crate error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `Result<T, E = Name>` alias in the calling module.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant carrying a source.
/// * `From<Source>` for variants with a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, .. }`
///   variant is present.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Only enums with named-field variants are accepted. A variant with a source
/// must also have `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use sellit_derive::sellit_error;
/// use std::borrow::Cow;
///
/// #[sellit_error]
/// pub enum SettingsError {
///     #[error("Settings error{}: {source}", format_context(.context))]
///     Load { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<Settings> {
///     builder.build().context("Reading settings file")?.try_deserialize().map_err(Into::into)
/// }
/// ```
#[proc_macro_attribute]
pub fn sellit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
