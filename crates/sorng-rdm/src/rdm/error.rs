//! Error types for the Remote Desktop Manager import crate.

use thiserror::Error;

/// Fatal import failures. Everything else (missing fields, unknown record
/// kinds, bad ports, unmatched group paths) is tolerated and never surfaces
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RdmError {
    /// The source text is not well-formed XML.
    #[error("Malformed input at position {position}: {message}")]
    MalformedInput { position: u64, message: String },
    /// The document parsed but its root is not the connection collection.
    #[error("Missing <ArrayOfConnection> root, found <{0}>")]
    MissingRoot(String),
    /// Conversion to the app JSON model failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type RdmResult<T> = Result<T, RdmError>;

impl RdmError {
    pub(crate) fn malformed(position: u64, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            position,
            message: message.into(),
        }
    }
}

impl From<quick_xml::Error> for RdmError {
    fn from(e: quick_xml::Error) -> Self {
        Self::malformed(0, e.to_string())
    }
}

impl From<serde_json::Error> for RdmError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
