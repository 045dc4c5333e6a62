//! Error types for strict selection and attribute access
//!
//! Every strictness violation is reported through the single
//! [`StrictSelectError`] kind, with the offending selector or attribute key
//! in the message. The rejected document-level mutations use the separate
//! [`UnsupportedOperation`] signal.

use thiserror::Error;

/// Error raised by the `strict_*` query operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrictSelectError {
    /// The selector string was rejected by the underlying CSS engine.
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A strict selection found nothing.
    #[error("No matches found for strict_select({selector})")]
    NoMatches { selector: String },

    /// A strict single-match selection found zero or several nodes.
    #[error("Found {count} matches for strict_select_one({selector})")]
    AmbiguousMatch { selector: String, count: usize },

    /// A strict attribute read found no attribute under the key.
    #[error("No matches found for strict_get({key})")]
    AttributeMissing { key: String },

    /// The attribute exists but is a token list, not a plain string.
    #[error("Attribute '{key}' holds {tokens} tokens, not a plain string")]
    AttributeNotString { key: String, tokens: usize },
}

impl StrictSelectError {
    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn no_matches(selector: &str) -> Self {
        Self::NoMatches {
            selector: selector.to_string(),
        }
    }

    pub fn ambiguous_match(selector: &str, count: usize) -> Self {
        Self::AmbiguousMatch {
            selector: selector.to_string(),
            count,
        }
    }

    pub fn attribute_missing(key: &str) -> Self {
        Self::AttributeMissing {
            key: key.to_string(),
        }
    }

    pub fn attribute_not_string(key: &str, tokens: usize) -> Self {
        Self::AttributeNotString {
            key: key.to_string(),
            tokens,
        }
    }
}

pub type StrictResult<T> = Result<T, StrictSelectError>;

/// Raised unconditionally by the insertion operations on whole documents.
///
/// A document root is not an insertable element, so `insert_before` and
/// `insert_after` on [`crate::StrictHtml`] always fail with this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} is not implemented for a whole document")]
pub struct UnsupportedOperation {
    operation: String,
}

impl UnsupportedOperation {
    pub(crate) fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
        }
    }

    /// Name of the rejected operation.
    pub fn operation(&self) -> &str {
        &self.operation
    }
}
