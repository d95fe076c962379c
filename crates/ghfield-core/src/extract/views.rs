//! Typed views over pull-request and commit documents
//!
//! A view borrows the parsed document and exposes one accessor per field.
//! Accessors return `Result` so absence is a value, not a panic.

use super::date::epoch_seconds;
use super::path::{
    FieldPath, BASE_REF, BASE_SHA, COMMIT_AUTHOR_NAME, COMMIT_COMMITTER_DATE, COMMIT_MESSAGE,
    HEAD_SHA, STATE,
};
use crate::error::Result;
use serde_json::Value;

/// Pull request object (`GET /repos/{owner}/{repo}/pulls/{number}`)
#[derive(Debug, Clone, Copy)]
pub struct PullRequestView<'a> {
    doc: &'a Value,
}

impl<'a> PullRequestView<'a> {
    /// Wrap a parsed pull request document
    #[inline]
    pub const fn new(doc: &'a Value) -> Self {
        Self { doc }
    }

    #[inline]
    fn field(&self, path: FieldPath) -> Result<&'a str> {
        path.resolve_str(self.doc)
    }

    /// SHA of the head commit
    pub fn head_sha(&self) -> Result<&'a str> {
        self.field(HEAD_SHA)
    }

    /// SHA of the base commit
    pub fn base_sha(&self) -> Result<&'a str> {
        self.field(BASE_SHA)
    }

    /// Name of the base branch
    pub fn base_ref(&self) -> Result<&'a str> {
        self.field(BASE_REF)
    }

    /// `open` or `closed`
    pub fn state(&self) -> Result<&'a str> {
        self.field(STATE)
    }
}

/// Commit object (`GET /repos/{owner}/{repo}/commits/{ref}`)
#[derive(Debug, Clone, Copy)]
pub struct CommitView<'a> {
    doc: &'a Value,
}

impl<'a> CommitView<'a> {
    /// Wrap a parsed commit document
    #[inline]
    pub const fn new(doc: &'a Value) -> Self {
        Self { doc }
    }

    /// Full commit message
    pub fn message(&self) -> Result<&'a str> {
        COMMIT_MESSAGE.resolve_str(self.doc)
    }

    /// Git author name
    pub fn author_name(&self) -> Result<&'a str> {
        COMMIT_AUTHOR_NAME.resolve_str(self.doc)
    }

    /// Raw committer date string
    pub fn committer_date(&self) -> Result<&'a str> {
        COMMIT_COMMITTER_DATE.resolve_str(self.doc)
    }

    /// Committer date in seconds since the Unix epoch
    pub fn committed_at(&self) -> Result<i64> {
        epoch_seconds(self.committer_date()?)
    }
}
