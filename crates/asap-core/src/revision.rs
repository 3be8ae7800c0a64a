//! # Revision Keys
//!
//! A `Revision` names a schema/rule revision (`rev4`, `rev5`, …). It is a
//! late-bound dispatch token: the orchestrator resolves it against the
//! processor table supplied at construction, so the set of revisions is
//! open-ended and never hard-coded into the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a rule revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    /// Create a revision key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// FedRAMP baselines built on NIST SP 800-53 revision 4.
    pub fn rev4() -> Self {
        Self::new("rev4")
    }

    /// FedRAMP baselines built on NIST SP 800-53 revision 5.
    pub fn rev5() -> Self {
        Self::new("rev5")
    }

    /// Access the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Revision {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Revision {
    fn from(key: String) -> Self {
        Self(key)
    }
}
