//! # asap-report — Derived Report Engine
//!
//! Holds the assertions produced by a completed validation plus the
//! reviewer's filter input, and derives from them a grouped, annotated,
//! human-readable report.
//!
//! ## Model
//!
//! Only two things are stored: the assertion set and the [`Filter`].
//! Everything else (role list, filtered subset, id index, groups, the
//! report itself) is a pure function of those two plus the external
//! validator's [`ValidatorState`], recomputed by [`rebuild`] on every read.
//! Nothing derived is cached, so no read can observe a stale filter or a
//! previous assertion set.
//!
//! XSpec scenario summaries come from a caller-supplied
//! [`ScenarioCatalog`] per rule set and are narrowed to the assertions
//! visible under the current filter.
//!
//! ```text
//! ReportEvent ──▶ ReportState::apply ──▶ ReportState { assertions, filter }
//!                                                │
//!                       ValidatorState ──────────┤
//!                                                ▼
//!                                   rebuild() ──▶ DerivedView { roles_present,
//!                                                  filtered_assertions, groups,
//!                                                  report, … }
//! ```
//!
//! ## Crate Policy
//!
//! - No I/O and no error paths. Unknown roles, empty sets, and groups
//!   referencing missing ids degrade to empty or partial output.
//! - Single-threaded and synchronous: each event yields a new snapshot.

pub mod derive;
pub mod engine;
pub mod event;
pub mod filter;
pub mod scenario;
pub mod validator;
pub mod view;

pub use derive::{
    assertion_groups, assertions_by_id, build_report, filtered_assertions, rebuild,
    roles_present, roles_to_include, visible_scenario_summaries, AssertionGroup, DerivedView,
};
pub use engine::{ReportEngine, ReportState};
pub use event::ReportEvent;
pub use filter::{Filter, Role, RolesToInclude, ALL_ROLES};
pub use scenario::{ScenarioCatalog, ScenarioSummary, XSpecScenario};
pub use validator::{ValidatorPhase, ValidatorState};
pub use view::{
    CheckView, GroupChecks, GroupReport, Icon, ReportCounts, ReportSummary, SchematronReport,
    SummaryColor,
};
