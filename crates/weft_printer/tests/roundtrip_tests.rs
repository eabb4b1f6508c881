//! Round-trip property tests: parse, unparse, parse again, and require a
//! structurally equal AST. Valid for any whitespace-insignificant input.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use weft_parser::Parser;
use weft_printer::Unparser;

const EXPRESSIONS: &[&str] = &[
    "a",
    "$this",
    "$parent",
    "$parent.$parent",
    "$parent.foo",
    "$parent.foo(x)",
    "a.b.c",
    "a.b.c()",
    "a()()",
    "foo().bar()",
    "a[b]",
    "a['key'].name",
    "a[b](c)",
    "42",
    "3.14",
    ".5",
    "123.",
    "'hello'",
    "'it\\'s'",
    "'line\\nbreak'",
    "\"double\"",
    "true",
    "false",
    "null",
    "undefined",
    "[1, 2, 3]",
    "[,a]",
    "[[1], [2]]",
    "{a: 1}",
    "{a}",
    "{'b': 2, 3: c}",
    "{nested: {x: y}}",
    "`plain`",
    "`a${b}c`",
    "`${a} and ${b}`",
    "`esc \\` tick ${x}`",
    "foo`a${b}c`",
    "!a",
    "-5",
    "+x",
    "typeof a",
    "void a",
    "!!ready",
    "a+b*c",
    "a*b+c",
    "a-b-c",
    "a/b%c",
    "a||b&&c",
    "a==b",
    "a!==b",
    "a<=b",
    "x in y",
    "x instanceof y",
    "(a+b)*c",
    "a?b:c",
    "a?b:c?d:e",
    "a||b ? c.d : e[f]",
    "a = b",
    "a = b = c",
    "a.b = c",
    "a[b] = c+d",
    "items | sort",
    "items | sort:'asc'",
    "a|b:c|d",
    "value & debounce:500",
    "items | sort:'asc' & signal:'refresh':extra",
    "!a.b(c, d) || e[f].g",
];

#[test]
fn test_expression_round_trip() {
    for source in EXPRESSIONS {
        let arena = Bump::new();
        let first = Parser::new(&arena, source)
            .parse_expression()
            .unwrap_or_else(|err| panic!("parse of {source:?} failed: {err}"));
        let text = Unparser::new().unparse_expr(first);
        let second = Parser::new(&arena, &text)
            .parse_expression()
            .unwrap_or_else(|err| panic!("reparse of {text:?} (from {source:?}) failed: {err}"));
        assert_eq!(first, second, "source: {source:?}, unparsed: {text:?}");
    }
}

const FOR_OF: &[&str] = &[
    "item of items",
    "item of items | take:3",
    "[k, v] of entries",
    "{a,b} of rows",
    "x of $parent.collection",
];

#[test]
fn test_for_of_round_trip() {
    for source in FOR_OF {
        let arena = Bump::new();
        let first = Parser::new(&arena, source)
            .parse_for_of()
            .unwrap_or_else(|err| panic!("parse of {source:?} failed: {err}"));
        let text = Unparser::new().unparse_for_of(first);
        let second = Parser::new(&arena, &text)
            .parse_for_of()
            .unwrap_or_else(|err| panic!("reparse of {text:?} (from {source:?}) failed: {err}"));
        assert_eq!(first, second, "source: {source:?}, unparsed: {text:?}");
    }
}

const INTERPOLATIONS: &[&str] = &[
    "Hello ${name}!",
    "${a}${b}",
    "count: ${items.length | number}",
    "${first} ${last}",
];

#[test]
fn test_interpolation_round_trip() {
    for source in INTERPOLATIONS {
        let arena = Bump::new();
        let first = Parser::new(&arena, source)
            .parse_interpolation()
            .unwrap_or_else(|err| panic!("parse of {source:?} failed: {err}"))
            .unwrap_or_else(|| panic!("{source:?} has substitutions"));
        let text = Unparser::new().unparse_interpolation(first);
        let second = Parser::new(&arena, &text)
            .parse_interpolation()
            .unwrap_or_else(|err| panic!("reparse of {text:?} failed: {err}"))
            .unwrap_or_else(|| panic!("reparse of {text:?} lost its substitutions"));
        assert_eq!(first, second, "source: {source:?}, unparsed: {text:?}");
    }
}

#[test]
fn test_static_text_stays_none() {
    let arena = Bump::new();
    let result = Parser::new(&arena, "no substitutions here")
        .parse_interpolation()
        .expect("parse failed");
    assert!(result.is_none());
}
