//! Issue comment scanning for CI build markers

use super::path::COMMENT_BODY;
use crate::error::{Error, Result};
use crate::types::json_type_name;
use memchr::memmem;
use serde_json::Value;

/// Marker that identifies a CI build comment
pub const BUILD_MARKER: &str = "[ci-build]";

/// List of issue comments (`GET /repos/{owner}/{repo}/issues/{number}/comments`)
#[derive(Debug, Clone, Copy)]
pub struct CommentThread<'a> {
    comments: &'a [Value],
}

/// A single comment matched by a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentView<'a> {
    index: usize,
    body: &'a str,
}

impl<'a> CommentView<'a> {
    /// Position in the original list (oldest comment is 0)
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Comment body
    #[inline]
    pub const fn body(&self) -> &'a str {
        self.body
    }
}

impl<'a> CommentThread<'a> {
    /// Wrap a parsed comment list; the document must be an array
    pub fn new(doc: &'a Value) -> Result<Self> {
        match doc {
            Value::Array(comments) => Ok(Self { comments }),
            other => Err(Error::UnexpectedShape {
                expected: "array",
                found: json_type_name(other),
            }),
        }
    }

    /// Number of comments in the thread
    #[inline]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// True when the thread has no comments
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Body of the comment at `index`
    pub fn body_at(&self, index: usize) -> Result<&'a str> {
        let comment = self
            .comments
            .get(index)
            .ok_or_else(|| Error::MissingField {
                path: format!("[{}]", index),
            })?;

        // Prefix field errors with the comment position
        COMMENT_BODY.resolve_str(comment).map_err(|err| match err {
            Error::MissingField { path } => Error::MissingField {
                path: format!("[{}].{}", index, path),
            },
            Error::NonStringField { path, found } => Error::NonStringField {
                path: format!("[{}].{}", index, path),
                found,
            },
            other => other,
        })
    }

    /// Most recent comment whose body contains `marker`
    ///
    /// Scans newest to oldest and stops at the first match; comments older
    /// than the match are never inspected. An empty marker matches the
    /// newest comment.
    pub fn latest_with_marker(&self, marker: &str) -> Result<Option<CommentView<'a>>> {
        let finder = memmem::Finder::new(marker.as_bytes());
        let mut scanned = 0usize;

        for index in (0..self.comments.len()).rev() {
            scanned += 1;
            let body = self.body_at(index)?;
            if finder.find(body.as_bytes()).is_some() {
                tracing::debug!(index, scanned, "found build comment");
                return Ok(Some(CommentView { index, body }));
            }
        }

        tracing::debug!(scanned, marker, "no build comment");
        Ok(None)
    }

    /// Most recent `[ci-build]` comment
    pub fn latest_build_comment(&self) -> Result<Option<CommentView<'a>>> {
        self.latest_with_marker(BUILD_MARKER)
    }
}
