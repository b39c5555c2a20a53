//! Scope-resolving parser for dekl sources
//!
//!     The parser drives classification line by line and owns all mutable
//!     parse state:
//!
//!         - the constant table, written by constant declarations and read
//!           by constant uses and entry values;
//!         - the scope arena holding every scope node, addressed by index;
//!         - the stack of open ancestor scopes, pushed by `begin` and popped
//!           by `end`.
//!
//!     Preprocessing strips a leading byte-order mark from the whole input,
//!     trims each line, skips lines that are blank after trimming, and
//!     strips trailing statement terminators before classification.
//!
//!     Constants resolve strictly textually: a name must be declared on an
//!     earlier line than any use. In entry position an unresolved name is
//!     not an error, it becomes a string value; only constant-use lines and
//!     constant declarations require resolution.

use std::collections::HashMap;

use crate::dekl::classify::{classify_line, ConstLiteral, EntryValue, LineKind};
use crate::dekl::document::{ScopeArena, ScopeNode, Value};
use crate::dekl::error::{ParseError, ParseResult};

/// What to do when a constant is declared twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the parse with [ParseError::DuplicateConstant]
    #[default]
    Reject,
    /// Silently replace the previous binding
    Overwrite,
}

/// Knobs for a single parse call
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub duplicates: DuplicatePolicy,
}

/// Parse a dekl document with default options.
pub fn parse(source: &str) -> ParseResult<ScopeNode> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse a dekl document into its root scope node.
///
/// The constant table and scope arena are constructed fresh for this call;
/// nothing is shared between invocations, so concurrent parses are safe.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> ParseResult<ScopeNode> {
    let source = source.trim_start_matches('\u{feff}');

    let mut constants: HashMap<String, i64> = HashMap::new();
    let mut arena = ScopeArena::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut current = ScopeArena::ROOT;

    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line = line.trim_end_matches(|c: char| c == ';' || c.is_whitespace());

        match classify_line(line)? {
            LineKind::ConstDecl { name, value } => match value {
                ConstLiteral::Int(value) => {
                    if constants.contains_key(&name)
                        && options.duplicates == DuplicatePolicy::Reject
                    {
                        return Err(ParseError::DuplicateConstant(name));
                    }
                    constants.insert(name, value);
                }
                ConstLiteral::Composite(_) => {
                    return Err(ParseError::UnsupportedConstantValue(name));
                }
            },
            LineKind::ConstUse { name } => match constants.get(&name) {
                Some(&value) => arena.insert(current, name, Value::Integer(value)),
                None => return Err(ParseError::UndefinedConstant(name)),
            },
            LineKind::BlockBegin => {
                stack.push(current);
                current = arena.alloc_child(current);
            }
            LineKind::BlockEnd => match stack.pop() {
                Some(parent) => current = parent,
                None => return Err(ParseError::UnmatchedEnd),
            },
            LineKind::Entry { key, value } => {
                let value = match value {
                    EntryValue::Int(value) => Value::Integer(value),
                    EntryValue::Name(name) => match constants.get(&name) {
                        Some(&value) => Value::Integer(value),
                        None => Value::Text(name),
                    },
                };
                arena.insert(current, key, value);
            }
        }
    }

    if !stack.is_empty() {
        return Err(ParseError::UnbalancedBlocks);
    }

    let root = arena.into_tree();
    if root.is_empty() {
        return Err(ParseError::EmptyDocument);
    }
    Ok(root)
}
