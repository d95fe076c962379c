//! Fixed field paths into a GitHub API document

use crate::error::{Error, Result};
use crate::types::json_type_name;
use serde_json::Value;
use std::fmt;

/// A fixed sequence of object keys leading to a leaf value
///
/// Paths are known at compile time; nothing here is built from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static [&'static str]);

/// `head.sha` of a pull request
pub const HEAD_SHA: FieldPath = FieldPath::new(&["head", "sha"]);
/// `base.sha` of a pull request
pub const BASE_SHA: FieldPath = FieldPath::new(&["base", "sha"]);
/// `base.ref` of a pull request
pub const BASE_REF: FieldPath = FieldPath::new(&["base", "ref"]);
/// `state` of a pull request
pub const STATE: FieldPath = FieldPath::new(&["state"]);
/// `commit.message` of a commit
pub const COMMIT_MESSAGE: FieldPath = FieldPath::new(&["commit", "message"]);
/// `commit.author.name` of a commit
pub const COMMIT_AUTHOR_NAME: FieldPath = FieldPath::new(&["commit", "author", "name"]);
/// `commit.committer.date` of a commit
pub const COMMIT_COMMITTER_DATE: FieldPath = FieldPath::new(&["commit", "committer", "date"]);
/// `body` of a single issue comment
pub const COMMENT_BODY: FieldPath = FieldPath::new(&["body"]);

impl FieldPath {
    /// Create a path from its keys
    pub const fn new(keys: &'static [&'static str]) -> Self {
        Self(keys)
    }

    /// The keys, outermost first
    #[inline]
    pub const fn keys(&self) -> &'static [&'static str] {
        self.0
    }

    /// Walk the path through nested objects
    ///
    /// Fails with [`Error::MissingField`] naming the prefix up to the first
    /// key that is absent or whose parent is not an object.
    pub fn resolve<'a>(&self, doc: &'a Value) -> Result<&'a Value> {
        let mut current = doc;
        for (depth, key) in self.0.iter().enumerate() {
            current = current
                .as_object()
                .and_then(|obj| obj.get(*key))
                .ok_or_else(|| Error::MissingField {
                    path: self.0[..=depth].join("."),
                })?;
        }
        tracing::trace!(path = %self, "resolved field");
        Ok(current)
    }

    /// Walk the path and require a string leaf
    pub fn resolve_str<'a>(&self, doc: &'a Value) -> Result<&'a str> {
        let value = self.resolve(doc)?;
        value.as_str().ok_or_else(|| Error::NonStringField {
            path: self.to_string(),
            found: json_type_name(value),
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_display_dotted() {
        assert_eq!(COMMIT_COMMITTER_DATE.to_string(), "commit.committer.date");
        assert_eq!(STATE.to_string(), "state");
        assert_eq!(HEAD_SHA.keys(), &["head", "sha"]);
    }

    #[test]
    fn test_resolve_nested() {
        let doc = json!({"commit": {"author": {"name": "Mona"}}});
        assert_eq!(COMMIT_AUTHOR_NAME.resolve_str(&doc).unwrap(), "Mona");
    }

    #[test]
    fn test_missing_outer_key_names_prefix() {
        let doc = json!({"head": {"sha": "abc"}});
        assert_matches!(
            BASE_SHA.resolve(&doc),
            Err(Error::MissingField { path }) if path == "base"
        );
    }

    #[test]
    fn test_missing_inner_key_names_full_path() {
        let doc = json!({"base": {"ref": "main"}});
        assert_matches!(
            BASE_SHA.resolve(&doc),
            Err(Error::MissingField { path }) if path == "base.sha"
        );
    }

    #[test]
    fn test_intermediate_not_object_is_missing() {
        let doc = json!({"commit": "deadbeef"});
        assert_matches!(
            COMMIT_MESSAGE.resolve(&doc),
            Err(Error::MissingField { path }) if path == "commit.message"
        );

        let doc = json!({"commit": null});
        assert_matches!(
            COMMIT_MESSAGE.resolve(&doc),
            Err(Error::MissingField { path }) if path == "commit.message"
        );
    }

    #[test]
    fn test_top_level_array_is_missing() {
        let doc = json!([{"state": "open"}]);
        assert_matches!(
            STATE.resolve(&doc),
            Err(Error::MissingField { path }) if path == "state"
        );
    }

    #[test]
    fn test_non_string_leaf_flagged() {
        let doc = json!({"state": 3});
        assert_matches!(
            STATE.resolve_str(&doc),
            Err(Error::NonStringField { path, found: "number" }) if path == "state"
        );

        let doc = json!({"head": {"sha": null}});
        assert_matches!(
            HEAD_SHA.resolve_str(&doc),
            Err(Error::NonStringField { found: "null", .. })
        );
    }

    #[test]
    fn test_resolve_returns_non_string_values() {
        let doc = json!({"state": {"nested": true}});
        assert!(STATE.resolve(&doc).unwrap().is_object());
    }
}
