//! # Error Types
//!
//! Errors raised while classifying an OSCAL payload. Orchestration errors
//! live in `asap-validate`; this crate only owns the failures its own
//! helpers can produce.

use thiserror::Error;

/// Failure to determine the document type of a JSON OSCAL payload.
#[derive(Error, Debug)]
pub enum DocumentTypeError {
    /// The payload does not parse as JSON.
    #[error("invalid OSCAL JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload parsed but is not a JSON object at the top level.
    #[error("OSCAL JSON must be an object at the top level")]
    NotAnObject,

    /// No top-level key names a supported OSCAL document type.
    #[error("unsupported OSCAL document type; top-level keys: [{}]", keys.join(", "))]
    Unsupported {
        /// Top-level keys found in the payload, in document order.
        keys: Vec<String>,
    },

    /// A short document type name (`ssp`, `sap`, `sar`, `poam`) was expected.
    #[error("unknown OSCAL document type name '{0}'")]
    UnknownName(String),
}
