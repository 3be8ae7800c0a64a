//! # Report View Types
//!
//! The externally consumed report. Serializes in the view layer's shape
//! (camelCase fields; icons as `{sprite, color}`).

use asap_core::{FailedAssert, SchematronAssert};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

// ─── Icons & Colors ──────────────────────────────────────────────────

/// Status icon attached to each check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Validator has not produced results yet.
    Pending,
    /// Validated; the assertion did not fire.
    Clear,
    /// Validated; the assertion fired at least once.
    Flagged,
}

impl Icon {
    /// Sprite name in the icon sheet.
    pub fn sprite(&self) -> &'static str {
        match self {
            Self::Pending => "navigate_next",
            Self::Clear => "check_circle",
            Self::Flagged => "cancel",
        }
    }

    /// Display color.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Pending => "blue",
            Self::Clear => "green",
            Self::Flagged => "red",
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut icon = serializer.serialize_struct("Icon", 2)?;
        icon.serialize_field("sprite", self.sprite())?;
        icon.serialize_field("color", self.color())?;
        icon.end()
    }
}

/// Color of a group's summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryColor {
    /// Nothing in the group fired.
    Green,
    /// At least one check in the group fired.
    Red,
}

// ─── Report ──────────────────────────────────────────────────────────

/// One assertion annotated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckView {
    /// The assertion definition.
    #[serde(flatten)]
    pub assertion: SchematronAssert,
    /// Status icon.
    pub icon: Icon,
    /// Fired instances from the validator.
    pub fired: Vec<FailedAssert>,
}

/// Summary line and checks for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupChecks {
    /// `"<fired> / <total> triggered"` or `"<total> checks"`.
    pub summary: String,
    pub summary_color: SummaryColor,
    pub checks: Vec<CheckView>,
}

/// Report section for one assertion group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub title: String,
    pub checks: GroupChecks,
}

/// Assertion-vs-report split of the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportCounts {
    pub assertions: usize,
    pub reports: usize,
}

/// Report heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub title: String,
    pub counts: ReportCounts,
}

/// The full grouped report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchematronReport {
    pub summary: ReportSummary,
    pub groups: Vec<GroupReport>,
}
