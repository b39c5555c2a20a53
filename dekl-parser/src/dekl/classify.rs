//! Line classification
//!
//! Core classification logic for determining line kinds based on token
//! patterns. Classification is a pure function of the line text: the line is
//! tokenized and its significant tokens are matched against the five dekl
//! line shapes. The caller is expected to hand in a trimmed line with the
//! trailing statement terminator already stripped.

use crate::dekl::error::ParseError;
use crate::dekl::token::{tokenize, Token};

/// Literal payload of a constant declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstLiteral {
    Int(i64),
    /// Raw `{…}` text, recognized syntactically but rejected by the parser
    Composite(String),
}

/// Value side of an entry line
///
/// A name is not resolved here: whether it refers to a constant is only
/// known at parse time, against the constant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    Int(i64),
    Name(String),
}

/// The five dekl line kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `name <- 5` or `name <- {…}`
    ConstDecl { name: String, value: ConstLiteral },
    /// `^(name)`
    ConstUse { name: String },
    /// A line consisting solely of `begin`
    BlockBegin,
    /// A line consisting solely of `end`
    BlockEnd,
    /// `key := 5` or `key := name`
    Entry { key: String, value: EntryValue },
}

/// Determine the kind of a line from its token shape.
///
/// Fails with [ParseError::Syntax] when no shape matches and with
/// [ParseError::InvalidLiteral] when a digit run does not fit the integer
/// width.
pub fn classify_line(line: &str) -> Result<LineKind, ParseError> {
    let lexed = tokenize(line);
    let significant: Vec<Token> = lexed
        .tokens
        .into_iter()
        .map(|(token, _)| token)
        .filter(|token| !token.is_whitespace())
        .collect();

    // Constant use only anchors the line prefix; content after the closing
    // parenthesis is tolerated, even when it does not lex.
    if let [Token::Caret, Token::OpenParen, Token::Ident(name), Token::CloseParen, ..] =
        significant.as_slice()
    {
        return Ok(LineKind::ConstUse { name: name.clone() });
    }

    if lexed.error.is_some() {
        return Err(ParseError::Syntax(line.to_string()));
    }

    match significant.as_slice() {
        [Token::Ident(word)] if word == "begin" => Ok(LineKind::BlockBegin),
        [Token::Ident(word)] if word == "end" => Ok(LineKind::BlockEnd),
        [Token::Ident(name), Token::Arrow, Token::Number(digits)] => Ok(LineKind::ConstDecl {
            name: name.clone(),
            value: ConstLiteral::Int(parse_int(digits)?),
        }),
        [Token::Ident(name), Token::Arrow, Token::BraceLiteral(raw)] => Ok(LineKind::ConstDecl {
            name: name.clone(),
            value: ConstLiteral::Composite(raw.clone()),
        }),
        [Token::Ident(key), Token::Assign, Token::Number(digits)] => Ok(LineKind::Entry {
            key: key.clone(),
            value: EntryValue::Int(parse_int(digits)?),
        }),
        [Token::Ident(key), Token::Assign, Token::Ident(name)] => Ok(LineKind::Entry {
            key: key.clone(),
            value: EntryValue::Name(name.clone()),
        }),
        _ => Err(ParseError::Syntax(line.to_string())),
    }
}

fn parse_int(digits: &str) -> Result<i64, ParseError> {
    digits
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidLiteral(digits.to_string()))
}
