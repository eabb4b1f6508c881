//! weft_printer: AST to expression text.
//!
//! Renders every node kind back into canonical source text. Parenthesizes
//! binary, conditional and assignment results so that re-parsing the output
//! yields a structurally identical AST regardless of the original
//! precedence context. Converter and behavior chains are never
//! parenthesized, since they are only legal at the top of an expression.

use weft_ast::*;

/// The unparser converts AST nodes to text.
pub struct Unparser {
    output: String,
}

impl Unparser {
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(256),
        }
    }

    /// Render a single expression tree.
    pub fn unparse_expr(mut self, expr: &Expr<'_>) -> String {
        self.write_expr(expr);
        self.output
    }

    /// Render an interpolation, re-escaping literal `${` openers.
    pub fn unparse_interpolation(mut self, interpolation: &Interpolation<'_>) -> String {
        let parts = interpolation.parts;
        let expressions = interpolation.expressions;
        for (i, part) in parts.iter().enumerate() {
            self.write_interpolation_part(part);
            if i < expressions.len() {
                self.output.push_str("${");
                self.write_expr(&expressions[i]);
                self.output.push('}');
            }
        }
        self.output
    }

    /// Render a for-of iteration declaration.
    pub fn unparse_for_of(mut self, stmt: &ForOfStatement<'_>) -> String {
        self.write_expr(stmt.declaration);
        self.output.push_str(" of ");
        self.write_expr(stmt.iterable);
        self.output
    }

    /// Render any parse result.
    pub fn unparse_parsed(self, parsed: &Parsed<'_>) -> String {
        match parsed {
            Parsed::Expression(expr) => self.unparse_expr(expr),
            Parsed::Interpolation(interpolation) => self.unparse_interpolation(interpolation),
            Parsed::ForOf(stmt) => self.unparse_for_of(stmt),
            Parsed::Custom(custom) => custom.value.to_string(),
        }
    }

    // ========================================================================
    // Expression rendering
    // ========================================================================

    fn write_expr(&mut self, expr: &Expr<'_>) {
        match expr {
            Expr::PrimitiveLiteral(literal) => self.write_primitive(&literal.value),
            Expr::AccessThis(access) => self.write_ancestor_base(access.ancestor),
            Expr::AccessScope(access) => {
                self.write_ancestor_prefix(access.ancestor);
                self.output.push_str(access.name);
            }
            Expr::AccessMember(access) => {
                self.write_expr(access.object);
                self.output.push('.');
                self.output.push_str(access.name);
            }
            Expr::AccessKeyed(access) => {
                self.write_expr(access.object);
                self.output.push('[');
                self.write_expr(access.key);
                self.output.push(']');
            }
            Expr::CallScope(call) => {
                self.write_ancestor_prefix(call.ancestor);
                self.output.push_str(call.name);
                self.write_args(call.args);
            }
            Expr::CallMember(call) => {
                self.write_expr(call.object);
                self.output.push('.');
                self.output.push_str(call.name);
                self.write_args(call.args);
            }
            Expr::CallFunction(call) => {
                self.write_expr(call.func);
                self.write_args(call.args);
            }
            Expr::ArrayLiteral(array) => self.write_elements(array.elements),
            Expr::ObjectLiteral(object) => self.write_properties(object.keys, object.values),
            Expr::Template(template) => {
                self.write_template_chunks(template.cooked, template.expressions, true)
            }
            Expr::TaggedTemplate(template) => {
                self.write_expr(template.func);
                // raw text reproduces the original escapes verbatim
                self.write_template_chunks(template.raw, template.expressions, false);
            }
            Expr::Unary(unary) => {
                self.output.push_str(unary.op.text());
                if matches!(unary.op, UnaryOp::TypeOf | UnaryOp::Void) {
                    self.output.push(' ');
                }
                self.output.push('(');
                self.write_expr(unary.expr);
                self.output.push(')');
            }
            Expr::Binary(binary) => {
                self.output.push('(');
                self.write_expr(binary.left);
                self.output.push(' ');
                self.output.push_str(binary.op.text());
                self.output.push(' ');
                self.write_expr(binary.right);
                self.output.push(')');
            }
            Expr::Conditional(conditional) => {
                self.output.push('(');
                self.write_expr(conditional.condition);
                self.output.push('?');
                self.write_expr(conditional.yes);
                self.output.push(':');
                self.write_expr(conditional.no);
                self.output.push(')');
            }
            Expr::Assign(assign) => {
                self.output.push('(');
                self.write_expr(assign.target);
                self.output.push('=');
                self.write_expr(assign.value);
                self.output.push(')');
            }
            Expr::ValueConverter(converter) => {
                self.write_expr(converter.expr);
                self.output.push('|');
                self.output.push_str(converter.name);
                self.write_variadic_args(converter.args);
            }
            Expr::BindingBehavior(behavior) => {
                self.write_expr(behavior.expr);
                self.output.push('&');
                self.output.push_str(behavior.name);
                self.write_variadic_args(behavior.args);
            }
            Expr::BindingIdentifier(identifier) => self.output.push_str(identifier.name),
            Expr::ArrayBindingPattern(pattern) => self.write_elements(pattern.elements),
            Expr::ObjectBindingPattern(pattern) => {
                self.write_properties(pattern.keys, pattern.values)
            }
        }
    }

    fn write_primitive(&mut self, value: &PrimitiveValue<'_>) {
        match value {
            PrimitiveValue::Undefined => self.output.push_str("undefined"),
            PrimitiveValue::Null => self.output.push_str("null"),
            PrimitiveValue::Boolean(true) => self.output.push_str("true"),
            PrimitiveValue::Boolean(false) => self.output.push_str("false"),
            PrimitiveValue::Number(n) => {
                self.output.push_str(&n.to_string());
            }
            PrimitiveValue::String(s) => self.write_quoted(s),
        }
    }

    /// `$this` for the current scope, a `$parent` chain for ancestors.
    fn write_ancestor_base(&mut self, ancestor: u8) {
        if ancestor == 0 {
            self.output.push_str("$this");
            return;
        }
        for i in 0..ancestor {
            if i > 0 {
                self.output.push('.');
            }
            self.output.push_str("$parent");
        }
    }

    /// `$parent.` repeated for each ancestor hop before a scope name.
    fn write_ancestor_prefix(&mut self, ancestor: u8) {
        for _ in 0..ancestor {
            self.output.push_str("$parent.");
        }
    }

    fn write_args(&mut self, args: &[Expr<'_>]) {
        self.output.push('(');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_expr(arg);
        }
        self.output.push(')');
    }

    fn write_variadic_args(&mut self, args: &[Expr<'_>]) {
        for arg in args {
            self.output.push(':');
            self.write_expr(arg);
        }
    }

    fn write_elements(&mut self, elements: &[Expr<'_>]) {
        self.output.push('[');
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_expr(element);
        }
        self.output.push(']');
    }

    fn write_properties(&mut self, keys: &[PropertyKey<'_>], values: &[Expr<'_>]) {
        self.output.push('{');
        for (i, (key, value)) in keys.iter().zip(values.iter()).enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            match key {
                PropertyKey::Identifier(name) => self.output.push_str(name),
                PropertyKey::String(s) => self.write_quoted(s),
                PropertyKey::Number(n) => self.output.push_str(&n.to_string()),
            }
            self.output.push(':');
            self.write_expr(value);
        }
        self.output.push('}');
    }

    fn write_template_chunks(&mut self, chunks: &[&str], expressions: &[Expr<'_>], escape: bool) {
        self.output.push('`');
        for (i, chunk) in chunks.iter().enumerate() {
            if escape {
                self.write_template_text(chunk);
            } else {
                self.output.push_str(chunk);
            }
            if i < expressions.len() {
                self.output.push_str("${");
                self.write_expr(&expressions[i]);
                self.output.push('}');
            }
        }
        self.output.push('`');
    }

    /// Re-escape cooked template text so it scans back to the same value.
    fn write_template_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\\' => self.output.push_str("\\\\"),
                '`' => self.output.push_str("\\`"),
                '$' => self.output.push_str("\\$"),
                _ => self.output.push(ch),
            }
        }
    }

    /// Single-quoted string literal with re-escaped contents.
    fn write_quoted(&mut self, text: &str) {
        self.output.push('\'');
        for ch in text.chars() {
            match ch {
                '\\' => self.output.push_str("\\\\"),
                '\'' => self.output.push_str("\\'"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000B}' => self.output.push_str("\\v"),
                '\u{000C}' => self.output.push_str("\\f"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('\'');
    }

    /// Interpolation text with literal `${` openers re-escaped.
    fn write_interpolation_part(&mut self, part: &str) {
        let chars: Vec<char> = part.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '$' && chars.get(i + 1) == Some(&'{') {
                self.output.push_str("\\${");
                i += 2;
            } else {
                self.output.push(chars[i]);
                i += 1;
            }
        }
    }
}

impl Default for Unparser {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a single expression tree to text.
pub fn unparse(expr: &Expr<'_>) -> String {
    Unparser::new().unparse_expr(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_rendering() {
        assert_eq!(
            unparse(&Expr::PrimitiveLiteral(PrimitiveLiteral {
                value: PrimitiveValue::Number(1.5)
            })),
            "1.5"
        );
        assert_eq!(
            unparse(&Expr::PrimitiveLiteral(PrimitiveLiteral {
                value: PrimitiveValue::String("it's")
            })),
            r"'it\'s'"
        );
        assert_eq!(
            unparse(&Expr::PrimitiveLiteral(PrimitiveLiteral {
                value: PrimitiveValue::Null
            })),
            "null"
        );
    }

    #[test]
    fn test_ancestor_rendering() {
        assert_eq!(unparse(&Expr::AccessThis(AccessThis { ancestor: 0 })), "$this");
        assert_eq!(unparse(&Expr::AccessThis(AccessThis { ancestor: 2 })), "$parent.$parent");
        assert_eq!(
            unparse(&Expr::AccessScope(AccessScope { name: "foo", ancestor: 1 })),
            "$parent.foo"
        );
    }

    #[test]
    fn test_member_and_call_rendering() {
        let scope = Expr::AccessScope(AccessScope { name: "a", ancestor: 0 });
        let member = Expr::AccessMember(AccessMember { object: &scope, name: "b" });
        assert_eq!(unparse(&member), "a.b");

        let call = Expr::CallMember(CallMember { object: &scope, name: "b", args: &[] });
        assert_eq!(unparse(&call), "a.b()");
    }

    #[test]
    fn test_converter_chain_is_not_parenthesized() {
        let scope = Expr::AccessScope(AccessScope { name: "items", ancestor: 0 });
        let arg = Expr::PrimitiveLiteral(PrimitiveLiteral {
            value: PrimitiveValue::String("asc"),
        });
        let args = [arg];
        let converter = Expr::ValueConverter(ValueConverter {
            expr: &scope,
            name: "sort",
            args: &args,
        });
        assert_eq!(unparse(&converter), "items|sort:'asc'");
    }
}
