//! End-to-end tests over whole dekl documents
//!
//! Each test parses a complete source and verifies the resulting scope tree
//! structure: entries, constant substitution, child order, and nesting depth.

use dekl_parser::dekl::parsing::{parse, parse_with_options, DuplicatePolicy, ParseOptions};
use dekl_parser::dekl::{ParseError, Value};

#[test]
fn full_document_with_constants_and_nesting() {
    let source = "\
\u{feff}retries <- 3;
timeout <- 45;

mode := fast;
limit := timeout;
begin;
    host := primary;
    ^(retries)
    begin;
        weight := 7;
    end;
end;
begin;
    host := backup;
    ^(timeout)
end;
";
    let root = parse(source).unwrap();

    assert_eq!(root.get("mode"), Some(&Value::Text("fast".to_string())));
    assert_eq!(root.get("limit"), Some(&Value::Integer(45)));
    assert_eq!(root.entry_count(), 2);
    assert_eq!(root.children().len(), 2);
    assert_eq!(root.depth(), 2);

    let first = &root.children()[0];
    assert_eq!(first.get("host"), Some(&Value::Text("primary".to_string())));
    assert_eq!(first.get("retries"), Some(&Value::Integer(3)));
    assert_eq!(first.children().len(), 1);
    assert_eq!(first.children()[0].get("weight"), Some(&Value::Integer(7)));

    let second = &root.children()[1];
    assert_eq!(second.get("host"), Some(&Value::Text("backup".to_string())));
    assert_eq!(second.get("timeout"), Some(&Value::Integer(45)));
    assert!(second.children().is_empty());
}

#[test]
fn depth_equals_maximum_begin_nesting() {
    let flat = parse("a := 1;").unwrap();
    assert_eq!(flat.depth(), 0);

    let two_deep = parse("begin;\nbegin;\nx := 1;\nend;\nend;\nbegin;\nend;").unwrap();
    assert_eq!(two_deep.depth(), 2);

    let three_deep =
        parse("begin;\nbegin;\nbegin;\nx := 1;\nend;\nend;\nend;").unwrap();
    assert_eq!(three_deep.depth(), 3);
}

#[test]
fn constants_are_visible_inside_any_scope() {
    let root = parse("x <- 5;\nbegin;\nbegin;\n^(x)\nend;\nend;").unwrap();
    let inner = &root.children()[0].children()[0];
    assert_eq!(inner.get("x"), Some(&Value::Integer(5)));
}

#[test]
fn constants_declared_inside_a_scope_stay_global() {
    // The constant table has no scoping: a declaration inside a block is
    // usable after the block closes.
    let root = parse("begin;\nx <- 5;\na := 1;\nend;\nb := x;").unwrap();
    assert_eq!(root.get("b"), Some(&Value::Integer(5)));
}

#[test]
fn constant_use_overwrites_an_earlier_entry_with_the_same_name() {
    let root = parse("x <- 9;\nx := 1;\n^(x)").unwrap();
    assert_eq!(root.get("x"), Some(&Value::Integer(9)));
    assert_eq!(root.entry_count(), 1);
}

#[test]
fn unmatched_delimiters_fail() {
    assert_eq!(parse("begin;"), Err(ParseError::UnbalancedBlocks));
    assert_eq!(
        parse("begin;\nend;\nend;"),
        Err(ParseError::UnmatchedEnd)
    );
}

#[test]
fn errors_abort_at_the_first_offending_line() {
    // The stray end on line 2 fires before the syntax error on line 3.
    assert_eq!(parse("a := 1;\nend;\n???"), Err(ParseError::UnmatchedEnd));
}

#[test]
fn undefined_constant_inside_a_block_fails() {
    assert_eq!(
        parse("begin;\n^(missing)\nend;"),
        Err(ParseError::UndefinedConstant("missing".to_string()))
    );
}

#[test]
fn overwrite_policy_affects_later_substitutions_only() {
    let options = ParseOptions {
        duplicates: DuplicatePolicy::Overwrite,
    };
    let source = "x <- 1;\nbefore := x;\nx <- 2;\nafter := x;";
    let root = parse_with_options(source, &options).unwrap();
    assert_eq!(root.get("before"), Some(&Value::Integer(1)));
    assert_eq!(root.get("after"), Some(&Value::Integer(2)));
}

#[test]
fn parses_are_independent() {
    // A constant declared in one parse is invisible to the next.
    assert!(parse("shared <- 1;\na := shared;").is_ok());
    let root = parse("a := shared;").unwrap();
    assert_eq!(root.get("a"), Some(&Value::Text("shared".to_string())));
}
