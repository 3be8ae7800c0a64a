//! # Schematron Records and the Validation Envelope
//!
//! Types exchanged between the rule processor, the orchestrator, and the
//! report engine.
//!
//! ```text
//! RuleProcessor ──▶ ProcessedDocument { document_type, SchematronResult }
//!                          │
//!                          ▼
//!            ValidationResult { document_type, svrl_string,
//!                               validation_report, xml_string? }
//! ```
//!
//! `SchematronAssert` is a rule definition (one per rule in the compiled
//! Schematron); `FailedAssert` is one concrete firing of that rule
//! against a document. Both are immutable once produced.

use serde::{Deserialize, Serialize};

use crate::document::DocumentType;

/// Title used when the rule processor produced no successful reports.
pub const UNTITLED_REPORT: &str = "<Untitled document>";

// ─── Rule Definitions ────────────────────────────────────────────────

/// One Schematron assertion or report definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchematronAssert {
    /// Rule identifier, unique within a document type.
    pub id: String,
    /// Category tag (e.g. `error`, `warning`, `information`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Human-readable rule text.
    pub message: String,
    /// `true` for informational reports, `false` for enforceable assertions.
    #[serde(default)]
    pub is_report: bool,
}

/// One fired instance of a Schematron rule against a specific document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedAssert {
    /// Identifier of the rule that fired.
    pub id: String,
    /// XPath location of the offending node.
    #[serde(default)]
    pub location: String,
    /// The XPath test that fired.
    #[serde(default)]
    pub test: String,
    /// Message rendered for this instance.
    #[serde(default)]
    pub text: String,
    /// Category tag copied from the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Reference link for remediation guidance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see: Option<String>,
    /// Diagnostic messages attached to this firing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostic_references: Vec<String>,
}

// ─── Rule Processor Output ───────────────────────────────────────────

/// An informational report that fired successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulReport {
    /// Report identifier.
    pub id: String,
    /// Rendered report text.
    pub text: String,
}

/// Raw outcome of evaluating a document against a Schematron rule set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchematronResult {
    /// Failed assertion summaries, in engine order.
    pub failed_asserts: Vec<String>,
    /// The SVRL document, passed through untouched.
    pub svrl_string: String,
    /// Informational reports, in engine order.
    pub successful_reports: Vec<SuccessfulReport>,
}

/// What a rule processor returns for one XML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDocument {
    /// Document type the processor classified the XML as.
    pub document_type: DocumentType,
    /// Evaluation outcome.
    pub schematron_result: SchematronResult,
}

// ─── Validation Envelope ─────────────────────────────────────────────

/// Summary shaped from a [`SchematronResult`] for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Text of the first successful report, or [`UNTITLED_REPORT`].
    pub title: String,
    /// Failed assertion summaries from the rule engine.
    pub failed_asserts: Vec<String>,
}

impl ValidationReport {
    /// Shape a report from a rule engine result.
    pub fn from_schematron(result: &SchematronResult) -> Self {
        let title = result
            .successful_reports
            .first()
            .map(|report| report.text.clone())
            .unwrap_or_else(|| UNTITLED_REPORT.to_string());
        Self {
            title,
            failed_asserts: result.failed_asserts.clone(),
        }
    }
}

/// Uniform result of every validation entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Document type reported by the rule processor.
    pub document_type: DocumentType,
    /// Raw SVRL output.
    pub svrl_string: String,
    /// Caller-facing summary.
    pub validation_report: ValidationReport,
    /// XML that was validated, present only when the caller did not
    /// supply XML directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml_string: Option<String>,
}

impl ValidationResult {
    /// Build the envelope from a processor's output.
    pub fn from_processed(processed: ProcessedDocument, xml_string: Option<String>) -> Self {
        let validation_report = ValidationReport::from_schematron(&processed.schematron_result);
        Self {
            document_type: processed.document_type,
            svrl_string: processed.schematron_result.svrl_string,
            validation_report,
            xml_string,
        }
    }
}
