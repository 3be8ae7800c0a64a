//! # Collaborator Traits
//!
//! Interfaces for the external pieces of the pipeline. Each trait is
//! object-safe so the orchestrator can hold implementations behind
//! `Arc<dyn …>` and select them at runtime from its dispatch tables.
//!
//! Implementations must be `Send + Sync`; the futures they return must be
//! `Send` so a validation call can run on any runtime worker.

use std::future::Future;
use std::pin::Pin;

use asap_core::ProcessedDocument;

use crate::error::FetchError;

/// A boxed future for async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Opaque failure reported by a converter or rule processor.
///
/// The orchestrator never inspects it; it is attached as the `source` of
/// the corresponding [`OscalError`](crate::OscalError) variant.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Evaluates an XML document against one revision's Schematron rules.
pub trait RuleProcessor: Send + Sync {
    /// Classify the document and evaluate it.
    ///
    /// Fails when the document type cannot be determined (malformed XML,
    /// unsupported root element) or when the rule engine itself fails.
    fn process<'a>(
        &'a self,
        xml: &'a str,
    ) -> BoxFuture<'a, Result<ProcessedDocument, CollaboratorError>>;
}

/// Converts one OSCAL document type from JSON to XML.
pub trait JsonConverter: Send + Sync {
    /// Convert a JSON payload to its XML form.
    fn convert<'a>(&'a self, json: &'a str) -> BoxFuture<'a, Result<String, CollaboratorError>>;
}

/// Retrieves the text body of a remote OSCAL XML document.
pub trait XmlFetcher: Send + Sync {
    /// Fetch `url` and return its body as text.
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>>;
}
