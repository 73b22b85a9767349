//! Error types for classifier-domain
//!
//! Validation failures form a closed set of reasons. Each variant carries
//! the field it concerns; the display string is the message external
//! callers match on when rejecting a request or aborting a write.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A violated field constraint on a classifier domain record.
///
/// `validate` and `from_dict` report the first violation encountered, in a
/// fixed field-check order, and never continue past it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field that must hold an opaque string id held something else.
    #[error("Expected id to be a string")]
    InvalidIdType {
        /// Field that failed the check.
        field: &'static str,
    },

    /// A plain string field held something else.
    #[error("Expected {field} to be a string")]
    InvalidStringType {
        /// Field that failed the check.
        field: &'static str,
    },

    /// An integer field held something else.
    #[error("Expected {field} to be an int")]
    InvalidIntType {
        /// Field that failed the check.
        field: &'static str,
    },

    /// A state name contained the reserved `#` separator.
    #[error("Invalid character # in the state name")]
    InvalidStateNameChar,

    /// An algorithm id outside the configured allow-list.
    #[error("Invalid algorithm id")]
    InvalidAlgorithmId {
        /// The rejected algorithm id.
        algorithm_id: String,
    },

    /// A structured field with the wrong shape (a list where a dict was
    /// expected, or the reverse).
    #[error("Expected {field} to be a {expected}")]
    InvalidShape {
        /// Field that failed the check.
        field: &'static str,
        /// Shape the field must have (`"dict"` or `"list"`).
        expected: &'static str,
    },

    /// A training-job status outside the recognized set.
    #[error("Invalid status {status}")]
    InvalidStatus {
        /// The rejected status value.
        status: String,
    },
}
