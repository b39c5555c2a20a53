//! Token definitions for the dekl dialect
//!
//! This module provides the raw tokenization using the logos lexer library.
//! dekl statements never span lines, so the lexer operates on one logical
//! line at a time; the classifier consumes the resulting token sequence.

use logos::{Logos, Span};

/// All possible tokens in a dekl line
///
/// `begin` and `end` are not reserved words: they only act as block
/// delimiters when they make up a whole line, so they lex as ordinary
/// identifiers and the classifier decides by position.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Constant declaration separator
    #[token("<-")]
    Arrow,

    /// Entry assignment separator
    #[token(":=")]
    Assign,

    /// Constant dereference marker
    #[token("^")]
    Caret,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    /// Statement terminator; stripped before classification, so one inside a
    /// line always fails shape matching
    #[token(";")]
    Semicolon,

    /// Identifier: a letter followed by letters or digits
    #[regex(r"[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Ident(String),

    /// Unsigned decimal digit run. The digits are kept as text; integer
    /// conversion happens at classification so overflow can be reported as
    /// an invalid literal rather than a lexer failure.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    /// Brace-delimited composite constant payload, captured raw and not
    /// further interpreted
    #[regex(r"\{.*\}", |lex| lex.slice().to_string())]
    BraceLiteral(String),

    #[regex(r"[ \t]+")]
    Whitespace,
}

impl Token {
    /// Check if this token is insignificant for classification
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}

/// Tokenized form of one line
///
/// `error` carries the span of the first unlexable character, if any. The
/// remaining tail of the line is not tokenized past that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexedLine {
    pub tokens: Vec<(Token, Span)>,
    pub error: Option<Span>,
}

/// Tokenize one line with location information.
///
/// Unlexable input is not silently dropped: the classifier needs to know
/// that a line contained characters outside the dialect, since most line
/// shapes are anchored to the full line.
pub fn tokenize(line: &str) -> LexedLine {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();
    let mut error = None;

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                error = Some(lexer.span());
                break;
            }
        }
    }

    LexedLine { tokens, error }
}
