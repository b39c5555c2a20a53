//! dekl processing pipeline
//!
//!     This module provides the complete pipeline from dekl source text to a
//!     serialized document:
//!
//!         1. Tokenization: each logical line is tokenized with the logos
//!            lexer. See [token].
//!
//!         2. Classification: the token sequence of a line is matched against
//!            the five dekl line shapes (constant declaration, constant use,
//!            block begin, block end, entry). See [classify].
//!
//!         3. Parsing: classified lines drive the constant table and the
//!            scope stack, producing the output document. See [parsing].
//!
//!         4. Serialization: the document converts to TOML, or to JSON for
//!            debugging. See [formats].
//!
//!     Tokenization and classification are pure per-line functions. All
//!     mutable state (the constant table, the scope arena, the stack of open
//!     scopes) is owned by a single [parsing::parse_with_options] call, so
//!     concurrent parses never share state.

pub mod classify;
pub mod document;
pub mod error;
pub mod formats;
pub mod parsing;
pub mod token;

pub use classify::{classify_line, ConstLiteral, EntryValue, LineKind};
pub use document::{ScopeNode, Value, NESTED_KEY};
pub use error::{FormatError, ParseError, ParseResult};
pub use parsing::{parse, parse_with_options, DuplicatePolicy, ParseOptions};
