//! Parameterized classifier cases
//!
//! Table-driven coverage of the five line shapes and their near-misses.

use dekl_parser::dekl::classify::{classify_line, ConstLiteral, EntryValue, LineKind};
use dekl_parser::dekl::ParseError;
use rstest::rstest;

#[rstest]
#[case("size <- 50", LineKind::ConstDecl { name: "size".to_string(), value: ConstLiteral::Int(50) })]
#[case("n1 <- 0", LineKind::ConstDecl { name: "n1".to_string(), value: ConstLiteral::Int(0) })]
#[case("t <- {1, 2}", LineKind::ConstDecl { name: "t".to_string(), value: ConstLiteral::Composite("{1, 2}".to_string()) })]
#[case("^(size)", LineKind::ConstUse { name: "size".to_string() })]
#[case("^(size) trailing", LineKind::ConstUse { name: "size".to_string() })]
#[case("^ ( size )", LineKind::ConstUse { name: "size".to_string() })]
#[case("begin", LineKind::BlockBegin)]
#[case("end", LineKind::BlockEnd)]
#[case("a := 3", LineKind::Entry { key: "a".to_string(), value: EntryValue::Int(3) })]
#[case("a := size", LineKind::Entry { key: "a".to_string(), value: EntryValue::Name("size".to_string()) })]
#[case("a:=3", LineKind::Entry { key: "a".to_string(), value: EntryValue::Int(3) })]
#[case("mode := begin", LineKind::Entry { key: "mode".to_string(), value: EntryValue::Name("begin".to_string()) })]
fn classifies_well_formed_lines(#[case] line: &str, #[case] expected: LineKind) {
    assert_eq!(classify_line(line).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("justoneword")]
#[case("a = 5")]
#[case("a <- ")]
#[case("a := 5 extra")]
#[case("9lives := 1")]
#[case("^(no")]
#[case("^()")]
#[case("a <- -5")]
#[case("begin end")]
fn rejects_malformed_lines(#[case] line: &str) {
    assert_eq!(
        classify_line(line),
        Err(ParseError::Syntax(line.to_string()))
    );
}

#[rstest]
#[case("a := 9223372036854775808")]
#[case("a <- 18446744073709551616")]
fn rejects_overflowing_literals(#[case] line: &str) {
    let digits = line.split_whitespace().last().unwrap().to_string();
    assert_eq!(
        classify_line(line),
        Err(ParseError::InvalidLiteral(digits))
    );
}

#[test]
fn widest_representable_literal_is_accepted() {
    assert_eq!(
        classify_line("a := 9223372036854775807").unwrap(),
        LineKind::Entry {
            key: "a".to_string(),
            value: EntryValue::Int(i64::MAX),
        }
    );
}
