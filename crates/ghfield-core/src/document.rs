//! Reading GitHub API payloads into a JSON document

use crate::error::Result;
use crate::types::json_type_name;
use serde_json::Value;
use std::io::{BufReader, Read};

/// Parse a JSON document from a reader (usually stdin)
///
/// The whole stream is consumed. Trailing non-whitespace after the document
/// is an [`Error::InputParse`](crate::Error::InputParse).
pub fn parse_document<R: Read>(reader: R) -> Result<Value> {
    let doc: Value = serde_json::from_reader(BufReader::new(reader))?;
    tracing::debug!(kind = json_type_name(&doc), "parsed document");
    Ok(doc)
}

/// Parse a JSON document from an in-memory string
pub fn parse_str(text: &str) -> Result<Value> {
    let doc: Value = serde_json::from_str(text)?;
    tracing::debug!(kind = json_type_name(&doc), "parsed document");
    Ok(doc)
}
