//! # Validator Snapshot
//!
//! The report engine's read-only view of the external validator: whether
//! live results exist yet, and which fired instances each assertion id
//! produced. The engine never writes it.

use std::collections::HashMap;

use asap_core::FailedAssert;
use serde::{Deserialize, Serialize};

/// Whether the validator has produced results for the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidatorPhase {
    /// No document validated yet.
    #[default]
    Unvalidated,
    /// Fired instances reflect a completed validation.
    Validated,
}

/// Validator phase plus fired instances keyed by assertion id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorState {
    /// Current phase.
    pub phase: ValidatorPhase,
    /// Fired instances per assertion id, in firing order.
    pub fired: HashMap<String, Vec<FailedAssert>>,
}

impl ValidatorState {
    /// No results yet.
    pub fn unvalidated() -> Self {
        Self::default()
    }

    /// A completed validation. Fired instances are grouped by their
    /// assertion id, keeping arrival order within each id.
    pub fn validated(fired: impl IntoIterator<Item = FailedAssert>) -> Self {
        let mut by_id: HashMap<String, Vec<FailedAssert>> = HashMap::new();
        for failed in fired {
            by_id.entry(failed.id.clone()).or_default().push(failed);
        }
        Self {
            phase: ValidatorPhase::Validated,
            fired: by_id,
        }
    }

    /// Whether live results exist.
    pub fn is_validated(&self) -> bool {
        self.phase == ValidatorPhase::Validated
    }

    /// Fired instances for `id`; empty when it never fired.
    pub fn fired_for(&self, id: &str) -> &[FailedAssert] {
        self.fired.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
