//! # Dispatch Tables
//!
//! Explicit mappings from a key to the collaborator that serves it:
//!
//! - [`ConverterSet`]: `DocumentType → JsonConverter`. Total over the
//!   closed `DocumentType` enum, so lookup is an exhaustive `match`.
//! - [`ProcessorSet`]: `Revision → RuleProcessor`. Open-ended; a missing
//!   revision is a checked lookup failure.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use asap_core::{DocumentType, Revision};

use crate::traits::{JsonConverter, RuleProcessor};

/// One JSON→XML converter per OSCAL document type.
#[derive(Clone)]
pub struct ConverterSet {
    ssp: Arc<dyn JsonConverter>,
    sap: Arc<dyn JsonConverter>,
    sar: Arc<dyn JsonConverter>,
    poam: Arc<dyn JsonConverter>,
}

impl ConverterSet {
    /// Build a set from one converter per document type.
    pub fn new(
        ssp: Arc<dyn JsonConverter>,
        sap: Arc<dyn JsonConverter>,
        sar: Arc<dyn JsonConverter>,
        poam: Arc<dyn JsonConverter>,
    ) -> Self {
        Self { ssp, sap, sar, poam }
    }

    /// Use the same converter for every document type.
    pub fn uniform(converter: Arc<dyn JsonConverter>) -> Self {
        Self {
            ssp: Arc::clone(&converter),
            sap: Arc::clone(&converter),
            sar: Arc::clone(&converter),
            poam: converter,
        }
    }

    /// The converter for `document_type`.
    pub fn get(&self, document_type: DocumentType) -> &Arc<dyn JsonConverter> {
        match document_type {
            DocumentType::Ssp => &self.ssp,
            DocumentType::Sap => &self.sap,
            DocumentType::Sar => &self.sar,
            DocumentType::Poam => &self.poam,
        }
    }
}

impl fmt::Debug for ConverterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterSet").finish_non_exhaustive()
    }
}

/// Rule processors keyed by revision.
#[derive(Clone, Default)]
pub struct ProcessorSet {
    processors: HashMap<Revision, Arc<dyn RuleProcessor>>,
}

impl ProcessorSet {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    pub fn with(mut self, revision: impl Into<Revision>, processor: Arc<dyn RuleProcessor>) -> Self {
        self.insert(revision, processor);
        self
    }

    /// Register `processor` for `revision`, replacing any previous entry.
    pub fn insert(&mut self, revision: impl Into<Revision>, processor: Arc<dyn RuleProcessor>) {
        self.processors.insert(revision.into(), processor);
    }

    /// The processor registered for `revision`.
    pub fn get(&self, revision: &Revision) -> Option<&Arc<dyn RuleProcessor>> {
        self.processors.get(revision)
    }

    /// Registered revisions, sorted.
    pub fn revisions(&self) -> Vec<&Revision> {
        let mut revisions: Vec<_> = self.processors.keys().collect();
        revisions.sort();
        revisions
    }

    /// Number of registered revisions.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether no revision is registered.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl fmt::Debug for ProcessorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorSet")
            .field("revisions", &self.revisions())
            .finish()
    }
}
