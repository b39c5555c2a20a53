//! Error types for dekl parsing and serialization

use std::fmt;

/// Errors that can occur while parsing a dekl document
///
/// Every variant is fatal to the current parse; the parser performs no
/// recovery or line skipping. The caller decides how to present the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A constant was referenced before being declared
    UndefinedConstant(String),
    /// A constant was declared twice under the reject-duplicates policy
    DuplicateConstant(String),
    /// A constant was declared with a composite (non-integer) value
    UnsupportedConstantValue(String),
    /// An `end` with no open block
    UnmatchedEnd,
    /// One or more blocks were still open at end of input
    UnbalancedBlocks,
    /// A line matched none of the dekl line shapes; carries the line text
    Syntax(String),
    /// The input produced a root scope with no entries and no children
    EmptyDocument,
    /// A digit run that is malformed or does not fit the integer width
    InvalidLiteral(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UndefinedConstant(name) => {
                write!(f, "constant '{}' is not defined", name)
            }
            ParseError::DuplicateConstant(name) => {
                write!(f, "constant '{}' is already defined", name)
            }
            ParseError::UnsupportedConstantValue(name) => {
                write!(f, "constant '{}' has a non-integer value", name)
            }
            ParseError::UnmatchedEnd => write!(f, "'end' without a matching 'begin'"),
            ParseError::UnbalancedBlocks => write!(f, "unbalanced 'begin' and 'end'"),
            ParseError::Syntax(line) => write!(f, "syntax error: {}", line),
            ParseError::EmptyDocument => write!(f, "document is empty after parsing"),
            ParseError::InvalidLiteral(text) => {
                write!(f, "invalid integer literal: {}", text)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parse results
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors from the serialization boundary
#[derive(Debug)]
pub enum FormatError {
    Toml(toml::ser::Error),
    Json(serde_json::Error),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Toml(error) => write!(f, "TOML serialization failed: {}", error),
            FormatError::Json(error) => write!(f, "JSON serialization failed: {}", error),
        }
    }
}

impl std::error::Error for FormatError {}
