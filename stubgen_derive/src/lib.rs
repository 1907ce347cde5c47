//! Procedural macro generating implementations of `stubgen::Stub`.

mod structs_and_enums;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

use crate::structs_and_enums::impl_stub_for_input;

/// Derive `Stub` for a struct or an enum.
///
/// A struct has a single constructor. Each variant of an enum is a
/// constructor, in declaration order, and at most one of them may be marked
/// as the primary constructor with `#[stub(primary)]`.
///
/// Every type parameter of the type must itself implement `Stub`. Types with
/// lifetime parameters and unions are not supported.
#[proc_macro_derive(Stub, attributes(stub))]
pub fn derive_stub(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match impl_stub_for_input(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
