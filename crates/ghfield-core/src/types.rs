//! Core type definitions: selectors and extracted values

use crate::error::Error;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which field an invocation extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Selector {
    /// `head.sha` of a pull request
    HeadSha,
    /// `base.sha` of a pull request
    BaseSha,
    /// `base.ref` of a pull request
    BaseRef,
    /// `state` of a pull request
    State,
    /// `commit.message` of a commit
    CommitMessage,
    /// `commit.author.name` of a commit
    CommitAuthor,
    /// `commit.committer.date` of a commit, as epoch seconds
    CommitDate,
    /// Body of the most recent `[ci-build]` comment in a comment list
    LatestBuildComment,
}

impl Selector {
    /// Every selector, in declaration order
    pub const ALL: [Selector; 8] = [
        Selector::HeadSha,
        Selector::BaseSha,
        Selector::BaseRef,
        Selector::State,
        Selector::CommitMessage,
        Selector::CommitAuthor,
        Selector::CommitDate,
        Selector::LatestBuildComment,
    ];

    /// Stable kebab-case name, also used as the CLI subcommand
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HeadSha => "head-sha",
            Self::BaseSha => "base-sha",
            Self::BaseRef => "base-ref",
            Self::State => "state",
            Self::CommitMessage => "commit-message",
            Self::CommitAuthor => "commit-author",
            Self::CommitDate => "commit-date",
            Self::LatestBuildComment => "latest-build-comment",
        }
    }

    /// Whether the selector expects a top-level array rather than an object
    #[inline]
    pub const fn expects_sequence(&self) -> bool {
        matches!(self, Self::LatestBuildComment)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sel| sel.as_str() == s)
            .ok_or_else(|| Error::UnknownSelector(s.to_string()))
    }
}

/// Value produced by a selector, borrowing from the document where possible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<'a> {
    /// A string leaf of the document
    Text(&'a str),
    /// A timestamp converted to seconds since the Unix epoch
    EpochSeconds(i64),
    /// No matching value; rendered as an empty line
    Empty,
}

impl Extracted<'_> {
    /// True when nothing was found
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Extracted::Empty)
    }
}

impl fmt::Display for Extracted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extracted::Text(s) => f.write_str(s),
            Extracted::EpochSeconds(secs) => write!(f, "{}", secs),
            Extracted::Empty => Ok(()),
        }
    }
}

/// JSON type name used in diagnostics
#[inline]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
