//! Field extraction, one entry point per selector

pub mod comments;
pub mod date;
pub mod path;
pub mod views;

pub use comments::{CommentThread, CommentView, BUILD_MARKER};
pub use path::FieldPath;
pub use views::{CommitView, PullRequestView};

use crate::error::Result;
use crate::types::{Extracted, Selector};
use serde_json::Value;

/// `head.sha` of a pull request document
pub fn head_sha(doc: &Value) -> Result<&str> {
    PullRequestView::new(doc).head_sha()
}

/// `base.sha` of a pull request document
pub fn base_sha(doc: &Value) -> Result<&str> {
    PullRequestView::new(doc).base_sha()
}

/// `base.ref` of a pull request document
pub fn base_ref(doc: &Value) -> Result<&str> {
    PullRequestView::new(doc).base_ref()
}

/// `state` of a pull request document
pub fn state(doc: &Value) -> Result<&str> {
    PullRequestView::new(doc).state()
}

/// `commit.message` of a commit document
pub fn commit_message(doc: &Value) -> Result<&str> {
    CommitView::new(doc).message()
}

/// `commit.author.name` of a commit document
pub fn commit_author(doc: &Value) -> Result<&str> {
    CommitView::new(doc).author_name()
}

/// `commit.committer.date` of a commit document, in epoch seconds
pub fn commit_date(doc: &Value) -> Result<i64> {
    CommitView::new(doc).committed_at()
}

/// Body of the newest comment containing `[ci-build]`, or `None`
pub fn latest_build_comment(doc: &Value) -> Result<Option<&str>> {
    latest_comment_with_marker(doc, BUILD_MARKER)
}

/// Body of the newest comment containing `marker`, or `None`
pub fn latest_comment_with_marker<'a>(doc: &'a Value, marker: &str) -> Result<Option<&'a str>> {
    let thread = CommentThread::new(doc)?;
    Ok(thread.latest_with_marker(marker)?.map(|c| c.body()))
}

impl Selector {
    /// Run this selector against a parsed document
    pub fn extract<'a>(&self, doc: &'a Value) -> Result<Extracted<'a>> {
        let value = match self {
            Selector::HeadSha => Extracted::Text(head_sha(doc)?),
            Selector::BaseSha => Extracted::Text(base_sha(doc)?),
            Selector::BaseRef => Extracted::Text(base_ref(doc)?),
            Selector::State => Extracted::Text(state(doc)?),
            Selector::CommitMessage => Extracted::Text(commit_message(doc)?),
            Selector::CommitAuthor => Extracted::Text(commit_author(doc)?),
            Selector::CommitDate => Extracted::EpochSeconds(commit_date(doc)?),
            Selector::LatestBuildComment => {
                latest_build_comment(doc)?.map_or(Extracted::Empty, Extracted::Text)
            }
        };
        tracing::debug!(selector = %self, empty = value.is_empty(), "extracted");
        Ok(value)
    }
}
