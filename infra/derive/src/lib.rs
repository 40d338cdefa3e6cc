#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used across the Weave workspace.
//!
//! Currently this is the [`weave_error`] attribute, which turns a plain enum into
//! the error type shape every crate in the workspace shares.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for workspace error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait adding `.context(..)` to `Result<T, ErrorName>` and to
///   `Result<T, Source>` for every variant that wraps a source error.
/// * `From<Source>` for each variant with a `source` field (or a `#[source]`/`#[from]` field).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper used by `#[error(..)]` format strings.
///
/// # Requirements
///
/// * Only enums are accepted, and every variant must use named fields.
/// * A `context` field must be `Option<Cow<'static, str>>`.
/// * Variants carrying a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[weave_derive::weave_error]
/// pub enum RegistryError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<(), RegistryError> {
///     read_source().context("Reading host manifest")?;
///     Err("manifest is empty".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn weave_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
