//! Error types for the person-filter crate.
//!
//! Filtering itself cannot fail for well-typed input. These enums cover the
//! validation of dynamic criteria and the demo's report output.

use std::io;

use thiserror::Error;

use crate::person::PersonKind;

/// Errors raised while validating a kind or a dynamic criteria mapping.
///
/// All variants are detected before any record is scanned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A tag string is neither `"user"` nor `"admin"`.
    #[error("unknown person kind '{value}': expected 'user' or 'admin'")]
    UnknownKind {
        /// The rejected tag string.
        value: String,
    },

    /// Criteria tried to constrain the tag field directly.
    #[error("criteria must not constrain the 'type' tag field")]
    TagFieldInCriteria,

    /// A criteria key is not a field of the requested kind.
    #[error("field '{field}' is not defined for {kind} records")]
    UnknownField {
        /// Kind the criteria were validated against.
        kind: PersonKind,
        /// The offending field name.
        field: String,
    },

    /// A criteria value has the wrong type for its field.
    #[error("field '{field}' expects {expected}, found {found}")]
    TypeMismatch {
        /// Field whose value was rejected.
        field: String,
        /// Description of the accepted type.
        expected: &'static str,
        /// Description of the supplied value's type.
        found: &'static str,
    },

    /// The criteria JSON is malformed or is not an object.
    #[error("invalid criteria JSON: {message}")]
    CriteriaParse {
        /// Description of the parse error.
        message: String,
    },
}

/// Errors raised while writing the demo report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output stream rejected a write.
    #[error("failed to write report: {source}")]
    Write {
        /// Underlying I/O error.
        #[from]
        #[source]
        source: io::Error,
    },
}
