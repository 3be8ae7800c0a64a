//! # asap-validate — Validation Orchestrator
//!
//! Accepts an OSCAL document in one of three shapes, normalizes it to XML,
//! runs it through the rule processor registered for the requested
//! revision, and returns a uniform [`ValidationResult`](asap_core::ValidationResult).
//!
//! ```text
//! validate_oscal(json) ──▶ detect type ──▶ JsonConverter ──┐
//! validate_oscal_by_url(url) ──▶ XmlFetcher ───────────────┤
//! validate_xml(xml) ───────────────────────────────────────┴──▶ RuleProcessor[revision] ──▶ envelope
//! ```
//!
//! Only the "how did we get XML" step differs between entry points;
//! document classification and rule evaluation happen in one place.
//!
//! ## Collaborators
//!
//! The Schematron engine, the JSON→XML converters, and the network fetch
//! are external. They plug in through the object-safe traits in
//! [`traits`]. [`HttpFetcher`] is the production [`XmlFetcher`].
//!
//! ## Crate Policy
//!
//! - Depends only on `asap-core` internally.
//! - The pipeline is read-only: abandoning a pending call leaves nothing
//!   to unwind.
//! - No retries. Every failure reaches the immediate caller.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod service;
pub mod traits;

pub use config::{ConfigError, HttpFetcherConfig};
pub use dispatch::{ConverterSet, ProcessorSet};
pub use error::{FetchError, OscalError};
pub use http::HttpFetcher;
pub use service::OscalService;
pub use traits::{BoxFuture, CollaboratorError, JsonConverter, RuleProcessor, XmlFetcher};
