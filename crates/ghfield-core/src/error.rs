//! Error types for ghfield-core

use thiserror::Error;

/// Result type alias for ghfield operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ghfield operations
#[derive(Debug, Error)]
pub enum Error {
    /// A key on the field path is absent, or an intermediate value is not an object
    #[error("Missing field: {path}")]
    MissingField {
        /// Dotted path up to and including the key that could not be resolved
        path: String,
    },

    /// Commit date does not match `YYYY-MM-DDTHH:MM:SSZ`
    #[error("Malformed date: {value:?} (expected YYYY-MM-DDTHH:MM:SSZ)")]
    MalformedDate {
        /// The rejected date string
        value: String,
    },

    /// Input is not valid JSON
    #[error("Input parse error: {0}")]
    InputParse(String),

    /// Leaf value exists but is not a JSON string
    #[error("Field {path} is a {found}, expected a string")]
    NonStringField {
        /// Dotted path of the leaf
        path: String,
        /// JSON type name of the value found there
        found: &'static str,
    },

    /// Top-level document has the wrong JSON type for the selector
    #[error("Unexpected document shape: expected {expected}, found {found}")]
    UnexpectedShape {
        /// JSON type the selector requires
        expected: &'static str,
        /// JSON type that was supplied
        found: &'static str,
    },

    /// Selector name not recognized
    #[error("Unknown selector: {0}")]
    UnknownSelector(String),

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports read failures through the same error type
        if err.is_io() {
            return Error::Io(err.into());
        }
        Error::InputParse(err.to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Missing field
    MissingField,
    /// Malformed commit date
    MalformedDate,
    /// Invalid JSON input
    InputParse,
    /// Non-string leaf
    NonStringField,
    /// Wrong top-level document type
    UnexpectedShape,
    /// Unknown selector name
    UnknownSelector,
    /// I/O operation error
    Io,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::MalformedDate { .. } => ErrorKind::MalformedDate,
            Error::InputParse(_) => ErrorKind::InputParse,
            Error::NonStringField { .. } => ErrorKind::NonStringField,
            Error::UnexpectedShape { .. } => ErrorKind::UnexpectedShape,
            Error::UnknownSelector(_) => ErrorKind::UnknownSelector,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Borrow the most specific detail of the error — zero allocation.
    ///
    /// For field errors this is the path, for date errors the rejected value.
    #[inline]
    pub fn detail(&self) -> &str {
        match self {
            Error::MissingField { path } | Error::NonStringField { path, .. } => path,
            Error::MalformedDate { value } => value,
            Error::InputParse(msg) | Error::UnknownSelector(msg) => msg,
            Error::UnexpectedShape { found, .. } => found,
            Error::Io(_) => "I/O error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_is_copy() {
        let err = Error::MissingField {
            path: "head.sha".into(),
        };
        let k = err.kind();
        let k2 = k; // Copy — no move
        assert_eq!(k, k2);
    }

    #[test]
    fn test_error_kind_repr_u8() {
        assert_eq!(std::mem::size_of::<ErrorKind>(), 1);
    }

    #[test]
    fn test_error_detail_borrows() {
        let err = Error::MalformedDate {
            value: "yesterday".to_string(),
        };
        let detail: &str = err.detail();
        assert_eq!(detail, "yesterday");
    }

    #[test]
    fn test_all_error_variants_have_kind() {
        let cases: Vec<(Error, ErrorKind)> = vec![
            (
                Error::MissingField { path: "a".into() },
                ErrorKind::MissingField,
            ),
            (
                Error::MalformedDate { value: "d".into() },
                ErrorKind::MalformedDate,
            ),
            (Error::InputParse("p".into()), ErrorKind::InputParse),
            (
                Error::NonStringField {
                    path: "state".into(),
                    found: "number",
                },
                ErrorKind::NonStringField,
            ),
            (
                Error::UnexpectedShape {
                    expected: "array",
                    found: "object",
                },
                ErrorKind::UnexpectedShape,
            ),
            (Error::UnknownSelector("x".into()), ErrorKind::UnknownSelector),
            (Error::Io(std::io::Error::other("io")), ErrorKind::Io),
        ];

        for (err, expected_kind) in cases {
            assert_eq!(err.kind(), expected_kind, "Mismatch for {:?}", err);
        }
    }

    #[test]
    fn test_display_names_the_path() {
        let err = Error::MissingField {
            path: "commit.author.name".into(),
        };
        assert_eq!(err.to_string(), "Missing field: commit.author.name");

        let err = Error::NonStringField {
            path: "state".into(),
            found: "number",
        };
        assert_eq!(err.to_string(), "Field state is a number, expected a string");
    }

    #[test]
    fn test_serde_json_syntax_error_maps_to_input_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), ErrorKind::InputParse);
    }
}
