//! AST node definitions for the binding-expression language.
//!
//! One struct per node kind, wrapped in the `Expr` enum. Child nodes are
//! arena references (`&'a`), identifier text is arena-allocated `&'a str`,
//! and lists are arena slices. Nodes hold no reference to parser state and
//! are owned by the caller for the lifetime of the binding.

use std::fmt;

/// A list of expressions, allocated in the arena.
pub type ExprList<'a> = &'a [Expr<'a>];

/// A list of string slices, allocated in the arena.
pub type StrList<'a> = &'a [&'a str];

// ============================================================================
// Entry-point types
// ============================================================================

/// Selects how an attribute value is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingType {
    /// A plain binding expression: `items | sort:'asc'`.
    Expression,
    /// Literal text with `${...}` substitutions: `Hello ${name}!`.
    Interpolation,
    /// A for-of iteration declaration: `item of items`.
    ForOf,
    /// Opaque passthrough; the raw attribute text is kept unparsed.
    Custom,
}

/// The root of a successful parse, tagged by binding type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<'a> {
    Expression(&'a Expr<'a>),
    Interpolation(&'a Interpolation<'a>),
    ForOf(&'a ForOfStatement<'a>),
    Custom(&'a CustomExpression<'a>),
}

// ============================================================================
// Expressions
// ============================================================================

/// A binding expression.
#[derive(Debug, PartialEq)]
pub enum Expr<'a> {
    PrimitiveLiteral(PrimitiveLiteral<'a>),
    AccessThis(AccessThis),
    AccessScope(AccessScope<'a>),
    AccessMember(AccessMember<'a>),
    AccessKeyed(AccessKeyed<'a>),
    CallScope(CallScope<'a>),
    CallMember(CallMember<'a>),
    CallFunction(CallFunction<'a>),
    ArrayLiteral(ArrayLiteral<'a>),
    ObjectLiteral(ObjectLiteral<'a>),
    Template(Template<'a>),
    TaggedTemplate(TaggedTemplate<'a>),
    Unary(Unary<'a>),
    Binary(Binary<'a>),
    Conditional(Conditional<'a>),
    Assign(Assign<'a>),
    ValueConverter(ValueConverter<'a>),
    BindingBehavior(BindingBehavior<'a>),
    BindingIdentifier(BindingIdentifier<'a>),
    ArrayBindingPattern(ArrayBindingPattern<'a>),
    ObjectBindingPattern(ObjectBindingPattern<'a>),
}

impl<'a> Expr<'a> {
    /// Whether this node is a valid left-hand side of a for-of declaration.
    pub fn is_binding_declaration(&self) -> bool {
        matches!(
            self,
            Expr::BindingIdentifier(_)
                | Expr::ArrayBindingPattern(_)
                | Expr::ObjectBindingPattern(_)
        )
    }
}

/// A primitive literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveValue<'a> {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(&'a str),
}

#[derive(Debug, PartialEq)]
pub struct PrimitiveLiteral<'a> {
    pub value: PrimitiveValue<'a>,
}

/// `$this`, or `$parent` repeated `ancestor` times.
///
/// `ancestor` is the number of binding-context levels to walk up;
/// zero means the current scope.
#[derive(Debug, PartialEq)]
pub struct AccessThis {
    pub ancestor: u8,
}

/// A bare identifier resolved against the scope, optionally after walking
/// up `ancestor` levels: `foo`, `$parent.foo`.
#[derive(Debug, PartialEq)]
pub struct AccessScope<'a> {
    pub name: &'a str,
    pub ancestor: u8,
}

/// `object.name`
#[derive(Debug, PartialEq)]
pub struct AccessMember<'a> {
    pub object: &'a Expr<'a>,
    pub name: &'a str,
}

/// `object[key]`
#[derive(Debug, PartialEq)]
pub struct AccessKeyed<'a> {
    pub object: &'a Expr<'a>,
    pub key: &'a Expr<'a>,
}

/// `name(args)` where `name` resolves against the scope: `doThing(x)`.
#[derive(Debug, PartialEq)]
pub struct CallScope<'a> {
    pub name: &'a str,
    pub args: ExprList<'a>,
    pub ancestor: u8,
}

/// `object.name(args)`
#[derive(Debug, PartialEq)]
pub struct CallMember<'a> {
    pub object: &'a Expr<'a>,
    pub name: &'a str,
    pub args: ExprList<'a>,
}

/// `func(args)` where `func` is an arbitrary expression: `foo()()`,
/// `items[i](x)`.
#[derive(Debug, PartialEq)]
pub struct CallFunction<'a> {
    pub func: &'a Expr<'a>,
    pub args: ExprList<'a>,
}

#[derive(Debug, PartialEq)]
pub struct ArrayLiteral<'a> {
    pub elements: ExprList<'a>,
}

/// `{ key: value, shorthand }`. Keys and values are parallel lists.
#[derive(Debug, PartialEq)]
pub struct ObjectLiteral<'a> {
    pub keys: &'a [PropertyKey<'a>],
    pub values: ExprList<'a>,
}

/// An object literal property key: a plain name or a literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKey<'a> {
    Identifier(&'a str),
    String(&'a str),
    Number(f64),
}

/// A template literal: cooked text chunks interleaved with expressions.
/// `cooked.len() == expressions.len() + 1`.
#[derive(Debug, PartialEq)]
pub struct Template<'a> {
    pub cooked: StrList<'a>,
    pub expressions: ExprList<'a>,
}

/// A tagged template: `` func`a${b}c` ``. Carries both the cooked and the
/// raw (undecoded) text chunks, since tag functions receive both.
#[derive(Debug, PartialEq)]
pub struct TaggedTemplate<'a> {
    pub cooked: StrList<'a>,
    pub raw: StrList<'a>,
    pub func: &'a Expr<'a>,
    pub expressions: ExprList<'a>,
}

#[derive(Debug, PartialEq)]
pub struct Unary<'a> {
    pub op: UnaryOp,
    pub expr: &'a Expr<'a>,
}

#[derive(Debug, PartialEq)]
pub struct Binary<'a> {
    pub op: BinaryOp,
    pub left: &'a Expr<'a>,
    pub right: &'a Expr<'a>,
}

/// `condition ? yes : no`
#[derive(Debug, PartialEq)]
pub struct Conditional<'a> {
    pub condition: &'a Expr<'a>,
    pub yes: &'a Expr<'a>,
    pub no: &'a Expr<'a>,
}

/// `target = value`
#[derive(Debug, PartialEq)]
pub struct Assign<'a> {
    pub target: &'a Expr<'a>,
    pub value: &'a Expr<'a>,
}

/// `expr | name:arg0:arg1`
#[derive(Debug, PartialEq)]
pub struct ValueConverter<'a> {
    pub expr: &'a Expr<'a>,
    pub name: &'a str,
    pub args: ExprList<'a>,
}

/// `expr & name:arg0:arg1`
#[derive(Debug, PartialEq)]
pub struct BindingBehavior<'a> {
    pub expr: &'a Expr<'a>,
    pub name: &'a str,
    pub args: ExprList<'a>,
}

// ============================================================================
// Iteration declarations
// ============================================================================

/// The declared name on the left of a for-of binding: `item of items`.
#[derive(Debug, PartialEq)]
pub struct BindingIdentifier<'a> {
    pub name: &'a str,
}

/// `[a, b] of pairs`; elements are ordinary expressions.
#[derive(Debug, PartialEq)]
pub struct ArrayBindingPattern<'a> {
    pub elements: ExprList<'a>,
}

/// `{a, b} of rows`; keys and values are parallel lists, values are
/// ordinary expressions.
#[derive(Debug, PartialEq)]
pub struct ObjectBindingPattern<'a> {
    pub keys: &'a [PropertyKey<'a>],
    pub values: ExprList<'a>,
}

/// A complete for-of iteration binding: declaration plus iterable.
#[derive(Debug, PartialEq)]
pub struct ForOfStatement<'a> {
    pub declaration: &'a Expr<'a>,
    pub iterable: &'a Expr<'a>,
}

// ============================================================================
// Interpolation and custom passthrough
// ============================================================================

/// Literal text with expression substitutions. `parts` always has exactly
/// one more element than `expressions`; a parse with zero substitutions
/// never produces this node (the caller gets `None` and treats the text as
/// static).
#[derive(Debug, PartialEq)]
pub struct Interpolation<'a> {
    pub parts: StrList<'a>,
    pub expressions: ExprList<'a>,
}

/// Raw attribute text kept unparsed, for binding commands that do their own
/// interpretation.
#[derive(Debug, PartialEq)]
pub struct CustomExpression<'a> {
    pub value: &'a str,
}

// ============================================================================
// Operators
// ============================================================================

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    LogicalNot,
    Negative,
    Positive,
    TypeOf,
    Void,
}

impl UnaryOp {
    /// Source text of the operator.
    pub fn text(self) -> &'static str {
        match self {
            UnaryOp::LogicalNot => "!",
            UnaryOp::Negative => "-",
            UnaryOp::Positive => "+",
            UnaryOp::TypeOf => "typeof",
            UnaryOp::Void => "void",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    LogicalOr,
    LogicalAnd,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    In,
    InstanceOf,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    /// Source text of the operator.
    pub fn text(self) -> &'static str {
        match self {
            BinaryOp::LogicalOr => "||",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::StrictEqual => "===",
            BinaryOp::StrictNotEqual => "!==",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::In => "in",
            BinaryOp::InstanceOf => "instanceof",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
