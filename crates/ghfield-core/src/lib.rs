//! # ghfield Core
//!
//! Field extraction from GitHub API JSON payloads for shell-based CI.
//!
//! Each selector reads one fixed path out of a pull request, commit or
//! issue-comment list:
//! - **Typed views** (`PullRequestView`, `CommitView`, `CommentThread`) borrow
//!   the parsed document and return `Result` for every field
//! - **Strict dates**: `commit.committer.date` must be `YYYY-MM-DDTHH:MM:SSZ`
//! - **No printing**: the library returns values, the binary writes them
//!
//! ## Example
//!
//! ```
//! use ghfield_core::{parse_str, Extracted, Selector};
//!
//! # fn example() -> ghfield_core::Result<()> {
//! let doc = parse_str(r#"{"head": {"sha": "6dcb09b"}, "state": "open"}"#)?;
//! assert_eq!(Selector::HeadSha.extract(&doc)?, Extracted::Text("6dcb09b"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod document;
pub mod error;
pub mod extract;
pub mod types;

pub use document::{parse_document, parse_str};
pub use error::{Error, ErrorKind, Result};
pub use extract::{
    base_ref, base_sha, commit_author, commit_date, commit_message, head_sha,
    latest_build_comment, latest_comment_with_marker, state, CommentThread, CommitView,
    PullRequestView, BUILD_MARKER,
};
pub use types::{Extracted, Selector};

use std::io::Read;

/// Parse a document from `reader` and render the selected field
///
/// Returns the text that belongs on the output line, without the trailing
/// newline. An empty string means the comment selector found no match.
///
/// # Example
///
/// ```
/// use ghfield_core::{extract_from_reader, Selector};
///
/// let out = extract_from_reader(Selector::State, r#"{"state":"open"}"#.as_bytes()).unwrap();
/// assert_eq!(out, "open");
/// ```
pub fn extract_from_reader<R: Read>(selector: Selector, reader: R) -> Result<String> {
    let doc = parse_document(reader)?;
    let value = selector.extract(&doc)?;
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        // Smoke test to ensure library compiles
        let _ = env!("CARGO_PKG_VERSION");
    }

    #[test]
    fn test_extract_from_reader_parse_error() {
        let err = extract_from_reader(Selector::State, "not json".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputParse);
    }

    #[test]
    fn test_extract_from_reader_empty_comment_match() {
        let out = extract_from_reader(
            Selector::LatestBuildComment,
            r#"[{"body":"nothing here"}]"#.as_bytes(),
        )
        .unwrap();
        assert_eq!(out, "");
    }
}
