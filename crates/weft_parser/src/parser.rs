//! The binding-expression parser.
//!
//! A recursive precedence-climbing parser: the core `parse_at` method takes
//! the minimum precedence it may consume and recurses with each consumed
//! binary operator's precedence as the new floor. Left-hand-side chains,
//! the `$parent` ancestor walk, value converters and binding behaviors are
//! handled in dedicated steps around the climb.
//!
//! Every violation raises immediately and unwinds the whole parse; there is
//! no partial result and no recovery.

use bumpalo::Bump;

use weft_ast::*;
use weft_diagnostics::{ParseError, ParseErrorKind};
use weft_scanner::{Precedence, Scanner, TokenFlags, TokenKind};

use crate::access::{promote, Access};

/// The parser produces one AST root per instance. Create a fresh parser for
/// each top-level parse; the instance is consumed by the entry points.
pub struct Parser<'a> {
    arena: &'a Bump,
    scanner: Scanner,
    /// The full source text, arena-allocated for custom passthrough.
    source: &'a str,
    /// Whether the expression parsed so far may be assigned to.
    assignable: bool,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, input: &str) -> Self {
        Self {
            arena,
            scanner: Scanner::new(input),
            source: arena.alloc_str(input),
            assignable: false,
        }
    }

    /// Parse according to the binding type. `Ok(None)` occurs only in
    /// interpolation mode with zero substitutions: the caller must fall
    /// back to static text.
    pub fn parse(mut self, binding_type: BindingType) -> Result<Option<Parsed<'a>>, ParseError> {
        match binding_type {
            BindingType::Expression => {
                let expr = self.expression_root()?;
                Ok(Some(Parsed::Expression(expr)))
            }
            BindingType::Interpolation => {
                Ok(self.interpolation_root()?.map(Parsed::Interpolation))
            }
            BindingType::ForOf => {
                let stmt = self.for_of_root()?;
                Ok(Some(Parsed::ForOf(stmt)))
            }
            BindingType::Custom => {
                let custom = CustomExpression { value: self.source };
                Ok(Some(Parsed::Custom(self.arena.alloc(custom))))
            }
        }
    }

    /// Parse a plain binding expression.
    pub fn parse_expression(mut self) -> Result<&'a Expr<'a>, ParseError> {
        self.expression_root()
    }

    /// Parse an interpolated attribute value. `Ok(None)` means the text has
    /// no substitutions and should be treated as static.
    pub fn parse_interpolation(mut self) -> Result<Option<&'a Interpolation<'a>>, ParseError> {
        self.interpolation_root()
    }

    /// Parse a for-of iteration declaration: `item of items`.
    pub fn parse_for_of(mut self) -> Result<&'a ForOfStatement<'a>, ParseError> {
        self.for_of_root()
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn token(&self) -> TokenKind {
        self.scanner.token()
    }

    #[inline]
    fn next_token(&mut self) -> Result<(), ParseError> {
        self.scanner.scan()?;
        Ok(())
    }

    fn consume_opt(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.token() == kind {
            self.next_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.token() == kind {
            self.next_token()
        } else {
            Err(self.error(ParseErrorKind::MissingExpectedToken))
        }
    }

    /// Raise an error at the start of the current token.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.scanner.token_start() as u32)
    }

    /// The current token's text, copied into the arena.
    #[inline]
    fn token_str(&self) -> &'a str {
        self.arena.alloc_str(self.scanner.token_text())
    }

    /// The current template chunk's raw text, copied into the arena.
    #[inline]
    fn token_raw(&self) -> &'a str {
        self.arena.alloc_str(self.scanner.token_raw())
    }

    // ========================================================================
    // Arena helpers
    // ========================================================================

    #[inline]
    fn alloc(&self, expr: Expr<'a>) -> &'a Expr<'a> {
        self.arena.alloc(expr)
    }

    fn alloc_exprs(&self, exprs: Vec<Expr<'a>>) -> ExprList<'a> {
        self.arena.alloc_slice_fill_iter(exprs)
    }

    fn alloc_strs(&self, strs: Vec<&'a str>) -> StrList<'a> {
        self.arena.alloc_slice_fill_iter(strs)
    }

    fn alloc_keys(&self, keys: Vec<PropertyKey<'a>>) -> &'a [PropertyKey<'a>] {
        self.arena.alloc_slice_fill_iter(keys)
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    fn expression_root(&mut self) -> Result<&'a Expr<'a>, ParseError> {
        self.next_token()?;
        let result = self.parse_at(Access::empty(), Precedence::Variadic, false)?;
        self.expect_end()?;
        Ok(self.alloc(result))
    }

    fn for_of_root(&mut self) -> Result<&'a ForOfStatement<'a>, ParseError> {
        self.next_token()?;
        let declaration = self.parse_at(Access::empty(), Precedence::Variadic, true)?;
        if !declaration.is_binding_declaration() {
            return Err(self.error(ParseErrorKind::InvalidForDeclaration));
        }
        if self.token() != TokenKind::OfKeyword {
            return Err(self.error(ParseErrorKind::InvalidForDeclaration));
        }
        self.next_token()?;
        let iterable = self.parse_at(Access::empty(), Precedence::Variadic, false)?;
        self.expect_end()?;
        let stmt = ForOfStatement {
            declaration: self.alloc(declaration),
            iterable: self.alloc(iterable),
        };
        Ok(self.arena.alloc(stmt))
    }

    /// After a complete parse the only legal leftover is end of input.
    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.token() {
            TokenKind::EndOfInput => Ok(()),
            TokenKind::OfKeyword => Err(self.error(ParseErrorKind::UnexpectedForOf)),
            _ => Err(self.error(ParseErrorKind::UnconsumedToken)),
        }
    }

    // ========================================================================
    // The precedence climb
    // ========================================================================

    /// Parse one expression no looser than `min_precedence`.
    ///
    /// `pattern` is true only while parsing the declaration of a for-of
    /// binding: a bare identifier becomes a `BindingIdentifier`, array and
    /// object literals become binding patterns, and the declaration primary
    /// is returned as-is without member/binary continuation. Nested
    /// element and value parses always run with `pattern` false.
    fn parse_at(
        &mut self,
        mut access: Access,
        min_precedence: Precedence,
        pattern: bool,
    ) -> Result<Expr<'a>, ParseError> {
        self.assignable = min_precedence < Precedence::Binary;
        let mut ancestor: u8 = 0;
        let mut name: &'a str = "";
        let mut result: Expr<'a>;

        if self.token().flags().contains(TokenFlags::UNARY_OP) {
            let op = match self.token() {
                TokenKind::Exclamation => UnaryOp::LogicalNot,
                TokenKind::Minus => UnaryOp::Negative,
                TokenKind::Plus => UnaryOp::Positive,
                TokenKind::TypeOfKeyword => UnaryOp::TypeOf,
                // VoidKeyword is the only other token carrying UNARY_OP
                _ => UnaryOp::Void,
            };
            self.next_token()?;
            let operand = self.parse_at(Access::empty(), Precedence::LeftHandSide, false)?;
            result = Expr::Unary(Unary {
                op,
                expr: self.alloc(operand),
            });
            self.assignable = false;
        } else {
            result = match self.token() {
                TokenKind::ParentScope => {
                    // Each `$parent` hop bumps the ancestor count; hitting a
                    // terminator collapses the chain to an ancestor access.
                    self.assignable = false;
                    let mut collapsed: Option<Expr<'a>> = None;
                    loop {
                        ancestor = ancestor.saturating_add(1);
                        self.next_token()?;
                        if self.consume_opt(TokenKind::Dot)? {
                            match self.token() {
                                TokenKind::Dot => {
                                    return Err(self.error(ParseErrorKind::DoubleDot))
                                }
                                TokenKind::ParentScope => continue,
                                TokenKind::EndOfInput => {
                                    return Err(self.error(ParseErrorKind::ExpectedIdentifier))
                                }
                                kind if kind.flags().contains(TokenFlags::IDENTIFIER_NAME) => {
                                    break
                                }
                                _ => return Err(self.error(ParseErrorKind::ExpectedIdentifier)),
                            }
                        } else if self
                            .token()
                            .flags()
                            .contains(TokenFlags::ACCESS_SCOPE_TERMINAL)
                        {
                            collapsed = Some(Expr::AccessThis(AccessThis { ancestor }));
                            break;
                        } else {
                            return Err(self.error(ParseErrorKind::InvalidMemberExpression));
                        }
                    }
                    match collapsed {
                        Some(this) => {
                            access = Access::THIS;
                            this
                        }
                        None => {
                            name = self.token_str();
                            self.next_token()?;
                            access = Access::SCOPE;
                            self.assignable = true;
                            Expr::AccessScope(AccessScope { name, ancestor })
                        }
                    }
                }
                TokenKind::ThisScope => {
                    self.assignable = false;
                    self.next_token()?;
                    access = Access::THIS;
                    Expr::AccessThis(AccessThis { ancestor: 0 })
                }
                TokenKind::Identifier => {
                    name = self.token_str();
                    self.next_token()?;
                    if pattern {
                        Expr::BindingIdentifier(BindingIdentifier { name })
                    } else {
                        access = Access::SCOPE;
                        self.assignable = true;
                        Expr::AccessScope(AccessScope { name, ancestor: 0 })
                    }
                }
                TokenKind::OpenParen => {
                    self.next_token()?;
                    let inner = self.parse_at(Access::empty(), Precedence::Assign, false)?;
                    self.expect(TokenKind::CloseParen)?;
                    // `(a).b` is member access on the result, not scope access
                    access = Access::empty();
                    inner
                }
                TokenKind::OpenBracket => {
                    let array = self.parse_array_literal(pattern)?;
                    access = Access::empty();
                    array
                }
                TokenKind::OpenBrace => {
                    let object = self.parse_object_literal(pattern)?;
                    access = Access::empty();
                    object
                }
                TokenKind::StringLiteral => {
                    let value = PrimitiveValue::String(self.token_str());
                    self.next_token()?;
                    self.assignable = false;
                    access = Access::empty();
                    Expr::PrimitiveLiteral(PrimitiveLiteral { value })
                }
                TokenKind::NumericLiteral => {
                    let value = PrimitiveValue::Number(self.scanner.token_number());
                    self.next_token()?;
                    self.assignable = false;
                    access = Access::empty();
                    Expr::PrimitiveLiteral(PrimitiveLiteral { value })
                }
                TokenKind::TrueKeyword | TokenKind::FalseKeyword => {
                    let value = PrimitiveValue::Boolean(self.token() == TokenKind::TrueKeyword);
                    self.next_token()?;
                    self.assignable = false;
                    access = Access::empty();
                    Expr::PrimitiveLiteral(PrimitiveLiteral { value })
                }
                TokenKind::NullKeyword => {
                    self.next_token()?;
                    self.assignable = false;
                    access = Access::empty();
                    Expr::PrimitiveLiteral(PrimitiveLiteral {
                        value: PrimitiveValue::Null,
                    })
                }
                TokenKind::UndefinedKeyword => {
                    self.next_token()?;
                    self.assignable = false;
                    access = Access::empty();
                    Expr::PrimitiveLiteral(PrimitiveLiteral {
                        value: PrimitiveValue::Undefined,
                    })
                }
                TokenKind::TemplateTail => {
                    let cooked = self.alloc_strs(vec![self.token_str()]);
                    self.next_token()?;
                    self.assignable = false;
                    access = Access::empty();
                    Expr::Template(Template {
                        cooked,
                        expressions: &[],
                    })
                }
                TokenKind::TemplateContinuation => {
                    let template = self.parse_template(None)?;
                    access = Access::empty();
                    template
                }
                TokenKind::EndOfInput => {
                    return Err(self.error(ParseErrorKind::UnexpectedEndOfExpression))
                }
                _ => return Err(self.error(ParseErrorKind::InvalidExpressionStart)),
            };
        }

        // A for-of declaration is exactly one primary; the caller checks it
        // and consumes the `of` keyword.
        if pattern {
            return Ok(result);
        }

        if Precedence::LeftHandSide < min_precedence {
            return Ok(result);
        }

        // ====================================================================
        // Left-hand-side continuation: `.name`, `[key]`, `(args)`, templates
        // ====================================================================

        while self.token().flags().contains(TokenFlags::LEFT_HAND_SIDE) {
            match self.token() {
                TokenKind::Dot => {
                    self.assignable = true;
                    self.next_token()?;
                    if !self.token().flags().contains(TokenFlags::IDENTIFIER_NAME) {
                        return Err(self.error(ParseErrorKind::ExpectedIdentifier));
                    }
                    name = self.token_str();
                    self.next_token()?;
                    access = promote(access);
                    if self.token() == TokenKind::OpenParen {
                        if access.is_empty() {
                            // member call on a non-scope result: `foo().bar()`
                            access = Access::MEMBER;
                        }
                        continue;
                    }
                    if access.contains(Access::SCOPE) {
                        result = Expr::AccessScope(AccessScope { name, ancestor });
                    } else {
                        result = Expr::AccessMember(AccessMember {
                            object: self.alloc(result),
                            name,
                        });
                    }
                }
                TokenKind::OpenBracket => {
                    self.next_token()?;
                    let key = self.parse_at(Access::empty(), Precedence::Assign, false)?;
                    self.expect(TokenKind::CloseBracket)?;
                    result = Expr::AccessKeyed(AccessKeyed {
                        object: self.alloc(result),
                        key: self.alloc(key),
                    });
                    access = Access::KEYED;
                    self.assignable = true;
                }
                TokenKind::OpenParen => {
                    let args = self.parse_arguments()?;
                    result = if access.contains(Access::SCOPE) {
                        Expr::CallScope(CallScope {
                            name,
                            args,
                            ancestor,
                        })
                    } else if access.contains(Access::MEMBER) {
                        Expr::CallMember(CallMember {
                            object: self.alloc(result),
                            name,
                            args,
                        })
                    } else {
                        Expr::CallFunction(CallFunction {
                            func: self.alloc(result),
                            args,
                        })
                    };
                    access = Access::empty();
                    self.assignable = false;
                }
                TokenKind::TemplateTail => {
                    let cooked = self.alloc_strs(vec![self.token_str()]);
                    let raw = self.alloc_strs(vec![self.token_raw()]);
                    self.next_token()?;
                    self.assignable = false;
                    result = Expr::TaggedTemplate(TaggedTemplate {
                        cooked,
                        raw,
                        func: self.alloc(result),
                        expressions: &[],
                    });
                    access = Access::empty();
                }
                TokenKind::TemplateContinuation => {
                    result = self.parse_template(Some(result))?;
                    access = Access::empty();
                }
                _ => break,
            }
        }

        // ====================================================================
        // Binary operators, climbing by packed precedence
        // ====================================================================

        if Precedence::Binary < min_precedence {
            return Ok(result);
        }
        while self.token().flags().contains(TokenFlags::BINARY_OP) {
            let op_kind = self.token();
            let precedence = op_kind.precedence();
            if precedence <= min_precedence {
                break;
            }
            let Some(op) = binary_op_for(op_kind) else {
                break;
            };
            self.next_token()?;
            let right = self.parse_at(Access::empty(), precedence, false)?;
            result = Expr::Binary(Binary {
                op,
                left: self.alloc(result),
                right: self.alloc(right),
            });
            self.assignable = false;
        }

        // ====================================================================
        // Conditional
        // ====================================================================

        if Precedence::Conditional < min_precedence {
            return Ok(result);
        }
        if self.consume_opt(TokenKind::Question)? {
            let yes = self.parse_at(Access::empty(), Precedence::Assign, false)?;
            self.expect(TokenKind::Colon)?;
            let no = self.parse_at(Access::empty(), Precedence::Assign, false)?;
            result = Expr::Conditional(Conditional {
                condition: self.alloc(result),
                yes: self.alloc(yes),
                no: self.alloc(no),
            });
            self.assignable = false;
        }

        // ====================================================================
        // Assignment
        // ====================================================================

        if Precedence::Assign < min_precedence {
            return Ok(result);
        }
        if self.token() == TokenKind::Equals {
            if !self.assignable {
                return Err(self.error(ParseErrorKind::NotAssignable));
            }
            self.next_token()?;
            let value = self.parse_at(Access::empty(), Precedence::Assign, false)?;
            result = Expr::Assign(Assign {
                target: self.alloc(result),
                value: self.alloc(value),
            });
        }

        // ====================================================================
        // Variadic tail: value converters, then binding behaviors
        // ====================================================================

        if Precedence::Variadic < min_precedence {
            return Ok(result);
        }
        while self.consume_opt(TokenKind::Bar)? {
            if !self.token().flags().contains(TokenFlags::IDENTIFIER) {
                return Err(self.error(ParseErrorKind::MissingValueConverterName));
            }
            let converter = self.token_str();
            self.next_token()?;
            let args = self.parse_variadic_args()?;
            result = Expr::ValueConverter(ValueConverter {
                expr: self.alloc(result),
                name: converter,
                args,
            });
        }
        while self.consume_opt(TokenKind::Ampersand)? {
            if !self.token().flags().contains(TokenFlags::IDENTIFIER) {
                return Err(self.error(ParseErrorKind::MissingBindingBehaviorName));
            }
            let behavior = self.token_str();
            self.next_token()?;
            let args = self.parse_variadic_args()?;
            result = Expr::BindingBehavior(BindingBehavior {
                expr: self.alloc(result),
                name: behavior,
                args,
            });
        }

        Ok(result)
    }

    /// Colon-separated arguments of a value converter or binding behavior.
    fn parse_variadic_args(&mut self) -> Result<ExprList<'a>, ParseError> {
        let mut args = Vec::new();
        while self.consume_opt(TokenKind::Colon)? {
            args.push(self.parse_at(Access::empty(), Precedence::Assign, false)?);
        }
        Ok(self.alloc_exprs(args))
    }

    /// Comma-separated call arguments. The current token is `(`.
    fn parse_arguments(&mut self) -> Result<ExprList<'a>, ParseError> {
        self.next_token()?;
        let mut args = Vec::new();
        while self.token() != TokenKind::CloseParen {
            args.push(self.parse_at(Access::empty(), Precedence::Assign, false)?);
            if !self.consume_opt(TokenKind::Comma)? {
                break;
            }
        }
        self.expect(TokenKind::CloseParen)?;
        Ok(self.alloc_exprs(args))
    }

    /// Array literal or array binding pattern. The current token is `[`.
    /// An elision produces an `undefined` element.
    fn parse_array_literal(&mut self, pattern: bool) -> Result<Expr<'a>, ParseError> {
        self.next_token()?;
        let mut elements = Vec::new();
        while self.token() != TokenKind::CloseBracket {
            if self.consume_opt(TokenKind::Comma)? {
                elements.push(Expr::PrimitiveLiteral(PrimitiveLiteral {
                    value: PrimitiveValue::Undefined,
                }));
            } else {
                elements.push(self.parse_at(Access::empty(), Precedence::Assign, false)?);
                if !self.consume_opt(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::CloseBracket)?;
        self.assignable = false;
        let elements = self.alloc_exprs(elements);
        Ok(if pattern {
            Expr::ArrayBindingPattern(ArrayBindingPattern { elements })
        } else {
            Expr::ArrayLiteral(ArrayLiteral { elements })
        })
    }

    /// Object literal or object binding pattern. The current token is `{`.
    /// `{a}` is shorthand for `{a: a}` with the value read from the scope.
    fn parse_object_literal(&mut self, pattern: bool) -> Result<Expr<'a>, ParseError> {
        self.next_token()?;
        let mut keys = Vec::new();
        let mut values = Vec::new();
        while self.token() != TokenKind::CloseBrace {
            let flags = self.token().flags();
            if flags.contains(TokenFlags::STRING_LITERAL) {
                keys.push(PropertyKey::String(self.token_str()));
                self.next_token()?;
                self.expect(TokenKind::Colon)?;
                values.push(self.parse_at(Access::empty(), Precedence::Assign, false)?);
            } else if flags.contains(TokenFlags::NUMERIC_LITERAL) {
                keys.push(PropertyKey::Number(self.scanner.token_number()));
                self.next_token()?;
                self.expect(TokenKind::Colon)?;
                values.push(self.parse_at(Access::empty(), Precedence::Assign, false)?);
            } else if flags.contains(TokenFlags::IDENTIFIER_NAME) {
                let key = self.token_str();
                keys.push(PropertyKey::Identifier(key));
                self.next_token()?;
                if self.consume_opt(TokenKind::Colon)? {
                    values.push(self.parse_at(Access::empty(), Precedence::Assign, false)?);
                } else {
                    values.push(Expr::AccessScope(AccessScope {
                        name: key,
                        ancestor: 0,
                    }));
                }
            } else {
                return Err(self.error(ParseErrorKind::InvalidObjectLiteralPropertyDefinition));
            }
            if !self.consume_opt(TokenKind::Comma)? {
                break;
            }
        }
        self.expect(TokenKind::CloseBrace)?;
        self.assignable = false;
        let keys = self.alloc_keys(keys);
        let values = self.alloc_exprs(values);
        Ok(if pattern {
            Expr::ObjectBindingPattern(ObjectBindingPattern { keys, values })
        } else {
            Expr::ObjectLiteral(ObjectLiteral { keys, values })
        })
    }

    /// Template literal with substitutions. The current token is a
    /// `TemplateContinuation`; with `func` set the result is a tagged
    /// template on that function expression.
    fn parse_template(&mut self, func: Option<Expr<'a>>) -> Result<Expr<'a>, ParseError> {
        let mut cooked = vec![self.token_str()];
        let mut raw = vec![self.token_raw()];
        let mut expressions = Vec::new();
        loop {
            self.next_token()?;
            expressions.push(self.parse_at(Access::empty(), Precedence::Assign, false)?);
            if self.token() != TokenKind::CloseBrace {
                return Err(self.error(ParseErrorKind::MissingExpectedToken));
            }
            // Resume template scanning from just after the `}`.
            let kind = self.scanner.rescan_template_token()?;
            cooked.push(self.token_str());
            raw.push(self.token_raw());
            if kind == TokenKind::TemplateTail {
                break;
            }
        }
        self.next_token()?;
        self.assignable = false;
        let cooked = self.alloc_strs(cooked);
        let expressions = self.alloc_exprs(expressions);
        Ok(match func {
            Some(func) => Expr::TaggedTemplate(TaggedTemplate {
                cooked,
                raw: self.alloc_strs(raw),
                func: self.alloc(func),
                expressions,
            }),
            None => Expr::Template(Template {
                cooked,
                expressions,
            }),
        })
    }

    // ========================================================================
    // Interpolation
    // ========================================================================

    /// Scan literal text, handing each unescaped `${` over to the normal
    /// expression parser until its matching `}`. Zero substitutions yield
    /// `None`: the attribute is static text, not a one-part interpolation.
    fn interpolation_root(&mut self) -> Result<Option<&'a Interpolation<'a>>, ParseError> {
        let len = self.scanner.text_len();
        let mut parts: Vec<&'a str> = Vec::new();
        let mut expressions = Vec::new();
        let mut current = String::new();
        let mut i = 0usize;
        while i < len {
            match self.scanner.char_at(i) {
                Some('\\')
                    if self.scanner.char_at(i + 1) == Some('$')
                        && self.scanner.char_at(i + 2) == Some('{') =>
                {
                    current.push_str("${");
                    i += 3;
                }
                Some('$') if self.scanner.char_at(i + 1) == Some('{') => {
                    parts.push(self.arena.alloc_str(&current));
                    current.clear();
                    self.scanner.set_pos(i + 2);
                    self.next_token()?;
                    let expr = self.parse_at(Access::empty(), Precedence::Variadic, false)?;
                    if self.token() != TokenKind::CloseBrace {
                        return Err(self.error(ParseErrorKind::MissingExpectedToken));
                    }
                    expressions.push(expr);
                    i = self.scanner.pos();
                }
                Some(ch) => {
                    current.push(ch);
                    i += 1;
                }
                None => break,
            }
        }
        if expressions.is_empty() {
            return Ok(None);
        }
        parts.push(self.arena.alloc_str(&current));
        let interpolation = Interpolation {
            parts: self.alloc_strs(parts),
            expressions: self.alloc_exprs(expressions),
        };
        Ok(Some(self.arena.alloc(interpolation)))
    }
}

/// The AST operator for a binary-operator token.
fn binary_op_for(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::BarBar => Some(BinaryOp::LogicalOr),
        TokenKind::AmpersandAmpersand => Some(BinaryOp::LogicalAnd),
        TokenKind::EqualsEquals => Some(BinaryOp::Equal),
        TokenKind::ExclamationEquals => Some(BinaryOp::NotEqual),
        TokenKind::EqualsEqualsEquals => Some(BinaryOp::StrictEqual),
        TokenKind::ExclamationEqualsEquals => Some(BinaryOp::StrictNotEqual),
        TokenKind::LessThan => Some(BinaryOp::LessThan),
        TokenKind::GreaterThan => Some(BinaryOp::GreaterThan),
        TokenKind::LessThanEquals => Some(BinaryOp::LessThanOrEqual),
        TokenKind::GreaterThanEquals => Some(BinaryOp::GreaterThanOrEqual),
        TokenKind::InKeyword => Some(BinaryOp::In),
        TokenKind::InstanceOfKeyword => Some(BinaryOp::InstanceOf),
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Subtract),
        TokenKind::Asterisk => Some(BinaryOp::Multiply),
        TokenKind::Slash => Some(BinaryOp::Divide),
        TokenKind::Percent => Some(BinaryOp::Modulo),
        _ => None,
    }
}
