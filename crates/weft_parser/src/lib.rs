//! weft_parser: Precedence-climbing parser for binding expressions.
//!
//! Parses token streams from the scanner into an arena-allocated AST.
//! One parser instance performs one top-level parse; the scan cursor is
//! threaded by `&mut self` through every recursive call and there is no
//! shared mutable state between parses.

mod access;
mod parser;

pub use parser::Parser;

use bumpalo::Bump;
use weft_ast::{BindingType, Parsed};
use weft_diagnostics::ParseError;

/// Parse an attribute source string according to the given binding type.
///
/// Returns `Ok(None)` only in interpolation mode when the text contains no
/// substitutions, signaling the caller to treat it as static text.
pub fn parse<'a>(
    arena: &'a Bump,
    input: &str,
    binding_type: BindingType,
) -> Result<Option<Parsed<'a>>, ParseError> {
    Parser::new(arena, input).parse(binding_type)
}
