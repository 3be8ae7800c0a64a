//! # asap-core — Foundational Types for OSCAL Validation
//!
//! Shared vocabulary for the validation workspace. The orchestrator
//! (`asap-validate`) and the report engine (`asap-report`) both speak in
//! these types; this crate depends on nothing internal.
//!
//! ## Key Types
//!
//! - [`DocumentType`] — the closed set of OSCAL document kinds (SSP, SAP,
//!   SAR, POA&M), with JSON root-key detection.
//! - [`Revision`] — the late-bound key that selects a rule processor.
//! - [`SchematronAssert`] / [`FailedAssert`] — rule definitions and their
//!   concrete fired instances.
//! - [`ValidationResult`] — the uniform envelope returned by every
//!   validation entry point.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `asap-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every type that reaches the view layer serializes with camelCase
//!   field names.

pub mod document;
pub mod error;
pub mod revision;
pub mod schematron;

pub use document::DocumentType;
pub use error::DocumentTypeError;
pub use revision::Revision;
pub use schematron::{
    FailedAssert, ProcessedDocument, SchematronAssert, SchematronResult, SuccessfulReport,
    ValidationReport, ValidationResult, UNTITLED_REPORT,
};
