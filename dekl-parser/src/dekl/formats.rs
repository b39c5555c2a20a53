//! Output formats for parsed dekl documents
//!
//! The target format is TOML: integer and string leaves become TOML values,
//! nested scopes aggregate as an array of tables under the reserved
//! `nested` key. JSON output mirrors the same structure and exists for
//! debugging and tooling.

use crate::dekl::document::ScopeNode;
use crate::dekl::error::FormatError;

/// Convert a document to an in-memory TOML value.
pub fn to_toml_value(document: &ScopeNode) -> Result<toml::Value, FormatError> {
    toml::Value::try_from(document).map_err(FormatError::Toml)
}

/// Render a document as TOML text.
pub fn to_toml_string(document: &ScopeNode) -> Result<String, FormatError> {
    toml::to_string_pretty(document).map_err(FormatError::Toml)
}

/// Render a document as pretty-printed JSON text.
pub fn to_json_string(document: &ScopeNode) -> Result<String, FormatError> {
    serde_json::to_string_pretty(document).map_err(FormatError::Json)
}
