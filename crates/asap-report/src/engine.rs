//! # Report Engine
//!
//! Single-state event reducer. There is one logical state ("loaded");
//! each [`ReportEvent`] produces a new immutable [`ReportState`] snapshot
//! and [`ReportEngine`] swaps it in.
//!
//! ## Transitions
//!
//! | Event | Assertions | Filter role | Filter text |
//! |-------|------------|-------------|-------------|
//! | `FilterTextChanged` | kept | kept | replaced |
//! | `FilterRoleChanged` | kept | replaced | kept |
//! | `AssertionsFound` | replaced | kept | kept |
//!
//! Snapshots share the assertion set through an `Arc`, so filter events
//! do not copy it.

use std::sync::Arc;

use asap_core::{Revision, SchematronAssert};

use crate::derive::{self, DerivedView};
use crate::event::ReportEvent;
use crate::filter::{Filter, Role};
use crate::scenario::{ScenarioCatalog, ScenarioSummary};
use crate::validator::ValidatorState;
use crate::view::SchematronReport;

/// Primitive engine state: the assertion set and the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportState {
    assertions: Arc<[SchematronAssert]>,
    filter: Filter,
}

impl ReportState {
    /// Empty assertion set, default filter.
    pub fn new() -> Self {
        Self {
            assertions: Arc::from(Vec::new()),
            filter: Filter::default(),
        }
    }

    /// Current assertion set, in the order it was found.
    pub fn assertions(&self) -> &[SchematronAssert] {
        &self.assertions
    }

    /// Current filter.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Apply `event`, returning the next snapshot.
    pub fn apply(&self, event: ReportEvent) -> ReportState {
        match event {
            ReportEvent::FilterTextChanged { text } => ReportState {
                assertions: Arc::clone(&self.assertions),
                filter: Filter {
                    role: self.filter.role.clone(),
                    text,
                },
            },
            ReportEvent::FilterRoleChanged { role } => ReportState {
                assertions: Arc::clone(&self.assertions),
                filter: Filter {
                    role,
                    text: self.filter.text.clone(),
                },
            },
            ReportEvent::AssertionsFound { assertions } => ReportState {
                assertions: Arc::from(assertions),
                filter: self.filter.clone(),
            },
        }
    }
}

impl Default for ReportState {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable holder of the current [`ReportState`].
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    state: ReportState,
}

impl ReportEngine {
    /// Engine with no assertions and the default filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    pub fn dispatch(&mut self, event: ReportEvent) {
        tracing::trace!(?event, "report event");
        self.state = self.state.apply(event);
        tracing::debug!(
            assertions = self.state.assertions.len(),
            role = %self.state.filter.role,
            text = %self.state.filter.text,
            "report state updated"
        );
    }

    /// Replace the filter text.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.dispatch(ReportEvent::FilterTextChanged { text: text.into() });
    }

    /// Replace the filter role.
    pub fn set_filter_role(&mut self, role: impl Into<Role>) {
        self.dispatch(ReportEvent::FilterRoleChanged { role: role.into() });
    }

    /// Replace the assertion set.
    pub fn assertions_found(&mut self, assertions: Vec<SchematronAssert>) {
        self.dispatch(ReportEvent::AssertionsFound { assertions });
    }

    /// Current snapshot.
    pub fn state(&self) -> &ReportState {
        &self.state
    }

    /// Current filter.
    pub fn filter(&self) -> &Filter {
        self.state.filter()
    }

    /// Roles for the role selector: `"all"` then the sorted distinct roles.
    pub fn roles_present(&self) -> Vec<Role> {
        derive::roles_present(self.state.assertions())
    }

    /// Assertions passing the current filter.
    pub fn filtered_assertions(&self) -> Vec<&SchematronAssert> {
        derive::filtered_assertions(self.state.assertions(), self.state.filter())
    }

    /// XSpec summaries for `revision` whose assertion passes the current filter.
    pub fn scenario_summaries<'c>(
        &self,
        catalog: &'c ScenarioCatalog,
        revision: &Revision,
    ) -> Vec<&'c ScenarioSummary> {
        let filtered = self.filtered_assertions();
        let by_id = derive::assertions_by_id(&filtered);
        derive::visible_scenario_summaries(catalog, revision, &by_id)
    }

    /// The report for the current state and `validator`.
    pub fn report(&self, validator: &ValidatorState) -> SchematronReport {
        self.view(validator).report
    }

    /// Every derived value for the current state and `validator`.
    pub fn view(&self, validator: &ValidatorState) -> DerivedView<'_> {
        derive::rebuild(&self.state, validator)
    }
}
