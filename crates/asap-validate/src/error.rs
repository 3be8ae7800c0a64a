//! Orchestrator error types.

use asap_core::{DocumentType, DocumentTypeError, Revision};
use thiserror::Error;

use crate::traits::CollaboratorError;

/// Errors from a validation call.
#[derive(Error, Debug)]
pub enum OscalError {
    /// The JSON payload's top-level keys name no supported document type.
    #[error("unsupported OSCAL document type; top-level keys: [{}]", keys.join(", "))]
    UnsupportedDocumentType {
        /// Top-level keys found in the payload.
        keys: Vec<String>,
    },

    /// The JSON payload could not be parsed.
    #[error("invalid OSCAL JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// No rule processor is registered for the requested revision.
    #[error("no rule processor registered for revision '{0}'")]
    UnsupportedRevision(Revision),

    /// The JSON→XML converter failed.
    #[error("failed to convert {document_type} JSON to XML: {source}")]
    Conversion {
        /// Document type whose converter was invoked.
        document_type: DocumentType,
        /// Converter failure.
        source: CollaboratorError,
    },

    /// The rule processor could not classify or evaluate the XML.
    /// Displays the rule engine's message unmodified.
    #[error("{source}")]
    Processing {
        /// Revision whose processor failed.
        revision: Revision,
        /// Rule engine failure.
        source: CollaboratorError,
    },

    /// The remote document could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl From<DocumentTypeError> for OscalError {
    fn from(err: DocumentTypeError) -> Self {
        match err {
            DocumentTypeError::InvalidJson(e) => Self::InvalidJson(e),
            DocumentTypeError::NotAnObject => Self::UnsupportedDocumentType { keys: Vec::new() },
            DocumentTypeError::Unsupported { keys } => Self::UnsupportedDocumentType { keys },
            DocumentTypeError::UnknownName(name) => Self::UnsupportedDocumentType { keys: vec![name] },
        }
    }
}

/// Errors from retrieving a remote document.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL does not parse.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// URL as supplied.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out: {source}")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Transport error.
        source: CollaboratorError,
    },

    /// Connection or protocol failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Transport error.
        source: CollaboratorError,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Leading excerpt of the response body.
        body: String,
    },

    /// The response body could not be read as text.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// Requested URL.
        url: String,
        /// Decoding or transport error.
        source: CollaboratorError,
    },
}
