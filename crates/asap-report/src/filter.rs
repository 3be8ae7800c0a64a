//! # Reviewer Filter
//!
//! The only user-controlled input to the report. Replaced wholesale on
//! every filter event.

use serde::{Deserialize, Serialize};

/// A role tag carried by Schematron assertions.
pub type Role = String;

/// Selector meaning "every role". Not a real role.
pub const ALL_ROLES: &str = "all";

/// Role and free-text filter applied to the assertion set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// A concrete role, or [`ALL_ROLES`].
    pub role: Role,
    /// Case-insensitive substring matched against assertion messages;
    /// empty disables text filtering.
    pub text: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            role: ALL_ROLES.to_string(),
            text: String::new(),
        }
    }
}

/// Expansion of [`Filter::role`] into the roles an assertion may carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RolesToInclude {
    /// The filter selects [`ALL_ROLES`]; every assertion passes,
    /// including those without a role.
    Every,
    /// Only assertions carrying exactly this role pass.
    Only(Role),
}

impl RolesToInclude {
    /// Whether an assertion with `role` passes.
    pub fn includes(&self, role: Option<&str>) -> bool {
        match self {
            Self::Every => true,
            Self::Only(selected) => role == Some(selected.as_str()),
        }
    }
}
