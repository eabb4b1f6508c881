//! weft_diagnostics: Error codes and reporting for the expression compiler.
//!
//! Every failure the scanner or parser can raise is one entry in a fixed,
//! numeric-coded taxonomy. There is no recovery mode: the first error aborts
//! the whole parse and surfaces to the caller as "this binding is invalid".
//! Syntax errors occupy the 101 range, semantic errors the 201 range.

use std::fmt;

use weft_core::text::{SourcePosition, TextPos};

/// The kind of a parse failure.
///
/// Each variant carries its numeric code as the enum discriminant, so
/// `kind as u16` is the wire code used in formatted messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[repr(u16)]
pub enum ParseErrorKind {
    // ========================================================================
    // Syntax errors (101-199)
    // ========================================================================
    #[error("invalid start of expression")]
    InvalidExpressionStart = 101,
    #[error("unconsumed token after end of expression")]
    UnconsumedToken = 102,
    #[error("expected identifier or '$parent' after '.'")]
    DoubleDot = 103,
    #[error("invalid member access continuation")]
    InvalidMemberExpression = 104,
    #[error("unexpected end of expression")]
    UnexpectedEndOfExpression = 105,
    #[error("expected identifier")]
    ExpectedIdentifier = 106,
    #[error("invalid declaration in for-of binding")]
    InvalidForDeclaration = 107,
    #[error("invalid object literal property definition")]
    InvalidObjectLiteralPropertyDefinition = 108,
    #[error("unterminated string literal")]
    UnterminatedQuote = 109,
    #[error("unterminated template literal")]
    UnterminatedTemplate = 110,
    #[error("missing expected token")]
    MissingExpectedToken = 111,
    #[error("unexpected character")]
    UnexpectedCharacter = 112,
    #[error("expected value converter name after '|'")]
    MissingValueConverterName = 113,
    #[error("expected binding behavior name after '&'")]
    MissingBindingBehaviorName = 114,

    // ========================================================================
    // Semantic errors (201-299)
    // ========================================================================
    #[error("left-hand side of assignment is not assignable")]
    NotAssignable = 201,
    #[error("unexpected keyword 'of' outside a for-of binding")]
    UnexpectedForOf = 202,
}

impl ParseErrorKind {
    /// The numeric error code.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Whether this is a semantic (as opposed to syntax) error.
    #[inline]
    pub fn is_semantic(self) -> bool {
        self.code() >= 200
    }
}

/// A parse failure with the cursor index at the point of detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Character offset of the failure in the source expression.
    pub pos: TextPos,
}

impl ParseError {
    /// Create a new error at the given cursor index.
    pub fn new(kind: ParseErrorKind, pos: TextPos) -> Self {
        Self { kind, pos }
    }

    /// The numeric error code.
    #[inline]
    pub fn code(&self) -> u16 {
        self.kind.code()
    }

    /// The 1-based column of the failure, assuming a single-line source.
    #[inline]
    pub fn column(&self) -> u32 {
        self.pos + 1
    }

    /// Resolve the full line/column position against the source text.
    /// Interpolated attribute values can span multiple lines.
    pub fn position_in(&self, source: &str) -> SourcePosition {
        SourcePosition::of(source, self.pos)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WEFT{:04}: {} at column {}",
            self.code(),
            self.kind,
            self.column()
        )
    }
}

impl std::error::Error for ParseError {}

/// Format an error against its source text, quoting the offending input.
/// This is what template-compile failures surface to the user.
pub fn format_with_source(error: &ParseError, source: &str) -> String {
    format!("{} in '{}'", error, source)
}
