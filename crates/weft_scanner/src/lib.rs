//! weft_scanner: Tokenizer for binding expressions.
//!
//! Converts attribute source text into tokens, one at a time, via
//! character-code dispatch. Produces:
//! - identifiers and the fixed keyword set (`$this`, `$parent`, `of`, ...)
//! - string, numeric and template literals with inline escape decoding
//! - the full multi-character operator set, longest match first
//!
//! The scanner has no recovery mode: any lexical violation aborts the scan
//! with a positioned `ParseError`.

mod char_codes;
mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Precedence, TokenFlags, TokenKind, TokenValue};
