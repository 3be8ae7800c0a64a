//! # XSpec Scenario Summaries
//!
//! Each Schematron rule set ships an XSpec suite that exercises its
//! assertions. A [`ScenarioSummary`] ties one assertion to the scenarios
//! covering it, so a reviewer can see example inputs beside a check.
//!
//! The catalog is supplied by the caller, one list per rule set keyed by
//! [`Revision`]. The engine never edits it; it only selects the summaries
//! whose assertion is visible under the current filter
//! (see [`visible_scenario_summaries`](crate::derive::visible_scenario_summaries)).

use std::collections::HashMap;

use asap_core::Revision;
use serde::{Deserialize, Serialize};

/// One XSpec scenario, optionally linked to its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XSpecScenario {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// XSpec coverage for a single assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    /// Id of the assertion the scenarios exercise.
    pub assertion_id: String,
    /// Display label for the assertion.
    pub assertion_label: String,
    /// Scenario path, outermost first.
    pub scenarios: Vec<XSpecScenario>,
    /// Link to the XSpec source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
    /// Highlighted XML context the scenario runs against.
    #[serde(default)]
    pub context: String,
}

/// Scenario summaries per rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioCatalog {
    rulesets: HashMap<Revision, Vec<ScenarioSummary>>,
}

impl ScenarioCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, revision: impl Into<Revision>, summaries: Vec<ScenarioSummary>) -> Self {
        self.insert(revision, summaries);
        self
    }

    /// Set the summaries for a rule set, replacing any previous list.
    pub fn insert(&mut self, revision: impl Into<Revision>, summaries: Vec<ScenarioSummary>) {
        self.rulesets.insert(revision.into(), summaries);
    }

    /// Summaries for `revision` in catalog order; empty for an unknown rule set.
    pub fn summaries(&self, revision: &Revision) -> &[ScenarioSummary] {
        self.rulesets
            .get(revision)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
