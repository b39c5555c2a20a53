//! # dekl-parser
//!
//! A parser for the dekl configuration dialect.
//!
//! dekl is a small line-oriented dialect for describing nested key/value
//! configuration. A document is a sequence of statements, one per line, each
//! optionally terminated by a semicolon:
//!
//!     size <- 50;
//!     timeout := 30;
//!     begin;
//!         host := primary;
//!         ^(size)
//!     end;
//!
//! `name <- literal` declares a named integer constant, `^(name)` injects a
//! declared constant into the current scope under its own name, `begin`/`end`
//! open and close nested scopes, and `name := value` adds an entry whose
//! value is an integer literal or a reference to a declared constant.
//!
//! The parsed document converts to TOML (nested scopes aggregate as an array
//! of tables under the reserved `nested` key), or to JSON for debugging. See
//! the [dekl] module for the pipeline.

pub mod dekl;
