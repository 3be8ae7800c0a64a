//! # OSCAL Validation Service
//!
//! The three validation entry points. Each resolves the revision's rule
//! processor first, obtains XML (directly, by conversion, or by fetch),
//! and finishes through [`OscalService::validate_xml`].
//!
//! ## Concurrency
//!
//! `OscalService` holds only `Arc` handles to immutable collaborators.
//! Calls share no mutable state and may run in parallel; each call is an
//! independent pipeline whose only suspension points are the
//! collaborators' futures.

use std::fmt;
use std::sync::Arc;

use asap_core::{DocumentType, Revision, ValidationResult};

use crate::dispatch::{ConverterSet, ProcessorSet};
use crate::error::OscalError;
use crate::traits::{RuleProcessor, XmlFetcher};

/// Orchestrates conversion, fetch, and rule processing.
#[derive(Clone)]
pub struct OscalService {
    converters: ConverterSet,
    processors: ProcessorSet,
    fetcher: Arc<dyn XmlFetcher>,
}

impl OscalService {
    /// Assemble a service from its collaborators.
    pub fn new(
        converters: ConverterSet,
        processors: ProcessorSet,
        fetcher: Arc<dyn XmlFetcher>,
    ) -> Self {
        Self {
            converters,
            processors,
            fetcher,
        }
    }

    /// Revisions this service can validate against, sorted.
    pub fn revisions(&self) -> Vec<&Revision> {
        self.processors.revisions()
    }

    /// Validate an XML document as-is.
    ///
    /// The returned envelope has no `xml_string`.
    ///
    /// # Errors
    ///
    /// - [`OscalError::UnsupportedRevision`] if no processor serves `revision`.
    /// - [`OscalError::Processing`] if the processor cannot classify or
    ///   evaluate the document.
    pub async fn validate_xml(
        &self,
        revision: &Revision,
        xml: &str,
    ) -> Result<ValidationResult, OscalError> {
        let processor = self.processor(revision)?;

        let processed = processor.process(xml).await.map_err(|source| {
            tracing::warn!(%revision, error = %source, "rule processor failed");
            OscalError::Processing {
                revision: revision.clone(),
                source,
            }
        })?;

        tracing::debug!(
            %revision,
            document_type = %processed.document_type,
            failed_asserts = processed.schematron_result.failed_asserts.len(),
            "rule processing complete"
        );

        Ok(ValidationResult::from_processed(processed, None))
    }

    /// Validate a JSON OSCAL document.
    ///
    /// The document type is taken from the payload's top-level key, the
    /// matching converter produces XML, and the XML is validated. The
    /// envelope carries the generated XML in `xml_string`.
    ///
    /// # Errors
    ///
    /// - [`OscalError::UnsupportedRevision`] before any conversion work.
    /// - [`OscalError::InvalidJson`] / [`OscalError::UnsupportedDocumentType`]
    ///   if the payload cannot be classified.
    /// - [`OscalError::Conversion`] if the converter fails.
    /// - Anything [`validate_xml`](Self::validate_xml) returns.
    pub async fn validate_oscal(
        &self,
        revision: &Revision,
        json: &str,
    ) -> Result<ValidationResult, OscalError> {
        self.processor(revision)?;

        let document_type = DocumentType::detect_json(json).map_err(|e| {
            tracing::warn!(%revision, error = %e, "could not classify OSCAL JSON");
            OscalError::from(e)
        })?;
        tracing::debug!(%revision, %document_type, "converting OSCAL JSON to XML");

        let xml = self
            .converters
            .get(document_type)
            .convert(json)
            .await
            .map_err(|source| {
                tracing::warn!(%document_type, error = %source, "JSON to XML conversion failed");
                OscalError::Conversion {
                    document_type,
                    source,
                }
            })?;

        let mut result = self.validate_xml(revision, &xml).await?;
        result.xml_string = Some(xml);
        Ok(result)
    }

    /// Validate a remote OSCAL XML document.
    ///
    /// The body is validated as XML and echoed verbatim in `xml_string`,
    /// giving the same envelope shape as [`validate_oscal`](Self::validate_oscal).
    ///
    /// # Errors
    ///
    /// - [`OscalError::UnsupportedRevision`] before any network work.
    /// - [`OscalError::Fetch`] if the request fails or is not successful.
    /// - Anything [`validate_xml`](Self::validate_xml) returns.
    pub async fn validate_oscal_by_url(
        &self,
        revision: &Revision,
        url: &str,
    ) -> Result<ValidationResult, OscalError> {
        self.processor(revision)?;

        let xml = self.fetcher.fetch(url).await.map_err(|e| {
            tracing::warn!(url, error = %e, "failed to fetch OSCAL XML");
            OscalError::from(e)
        })?;

        let mut result = self.validate_xml(revision, &xml).await?;
        result.xml_string = Some(xml);
        Ok(result)
    }

    fn processor(&self, revision: &Revision) -> Result<&Arc<dyn RuleProcessor>, OscalError> {
        self.processors.get(revision).ok_or_else(|| {
            tracing::warn!(%revision, "no rule processor registered");
            OscalError::UnsupportedRevision(revision.clone())
        })
    }
}

impl fmt::Debug for OscalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OscalService")
            .field("revisions", &self.revisions())
            .finish_non_exhaustive()
    }
}
