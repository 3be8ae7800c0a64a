//! # Derived Values
//!
//! Pure functions from `(assertions, filter, validator)` to everything the
//! view layer reads. [`rebuild`] runs the whole pipeline; the individual
//! steps are public so callers and tests can inspect each one.
//!
//! ```text
//! assertions ──▶ roles_present
//! filter ──────▶ roles_to_include ──┐
//! assertions ───────────────────────┴──▶ filtered_assertions ──▶ assertions_by_id ──┐
//! assertions ──▶ assertion_groups ──────────────────────────────────────────────────┤
//! validator ────────────────────────────────────────────────────────────────────────┴──▶ build_report
//!
//! assertions_by_id + ScenarioCatalog[revision] ──▶ visible_scenario_summaries
//! ```
//!
//! Groups are structural and reference the *unfiltered* set; filtering is
//! applied when group ids are resolved through `assertions_by_id`, which
//! is built from the *filtered* set.

use std::collections::{BTreeSet, HashMap};

use asap_core::{Revision, SchematronAssert};

use crate::engine::ReportState;
use crate::filter::{Filter, Role, RolesToInclude, ALL_ROLES};
use crate::scenario::{ScenarioCatalog, ScenarioSummary};
use crate::validator::ValidatorState;
use crate::view::{
    CheckView, GroupChecks, GroupReport, Icon, ReportCounts, ReportSummary, SchematronReport,
    SummaryColor,
};

/// Report title once live validator results exist.
pub const REPORT_TITLE: &str = "FedRAMP Package Concerns and Notes";

/// Suffix appended to the title before validation.
pub const UNPROCESSED_SUFFIX: &str = " (unprocessed)";

/// Title of the single synthetic assertion group.
pub const DEFAULT_GROUP_TITLE: &str = "System Security Plan";

/// A named bucket of assertion ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionGroup {
    pub title: String,
    pub assertion_ids: Vec<String>,
}

/// Every derived value for one `(state, validator)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub roles_present: Vec<Role>,
    pub roles_to_include: RolesToInclude,
    pub filtered_assertions: Vec<&'a SchematronAssert>,
    pub assertions_by_id: HashMap<&'a str, &'a SchematronAssert>,
    pub groups: Vec<AssertionGroup>,
    pub report: SchematronReport,
}

/// `"all"` followed by the sorted distinct roles in `assertions`.
///
/// Assertions without a role contribute nothing, and a literal `"all"`
/// role is not listed a second time.
pub fn roles_present(assertions: &[SchematronAssert]) -> Vec<Role> {
    let distinct: BTreeSet<&str> = assertions
        .iter()
        .filter_map(|a| a.role.as_deref())
        .filter(|role| *role != ALL_ROLES)
        .collect();

    std::iter::once(ALL_ROLES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

/// Expand the filter's role selector.
pub fn roles_to_include(filter: &Filter) -> RolesToInclude {
    if filter.role == ALL_ROLES {
        RolesToInclude::Every
    } else {
        RolesToInclude::Only(filter.role.clone())
    }
}

/// Assertions passing the role filter and, when the filter text is
/// non-empty, containing it case-insensitively in their message.
/// Original order is kept.
pub fn filtered_assertions<'a>(
    assertions: &'a [SchematronAssert],
    filter: &Filter,
) -> Vec<&'a SchematronAssert> {
    let roles = roles_to_include(filter);
    let needle = (!filter.text.is_empty()).then(|| filter.text.to_lowercase());

    assertions
        .iter()
        .filter(|a| roles.includes(a.role.as_deref()))
        .filter(|a| match &needle {
            Some(needle) => a.message.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect()
}

/// Index the filtered assertions by id. A repeated id keeps its last
/// occurrence.
pub fn assertions_by_id<'a>(
    filtered: &[&'a SchematronAssert],
) -> HashMap<&'a str, &'a SchematronAssert> {
    filtered.iter().copied().map(|a| (a.id.as_str(), a)).collect()
}

/// Group the full assertion set.
///
/// There is a single synthetic group holding every assertion. Rule-driven
/// grouping would replace this function without touching report assembly.
pub fn assertion_groups(assertions: &[SchematronAssert]) -> Vec<AssertionGroup> {
    vec![AssertionGroup {
        title: DEFAULT_GROUP_TITLE.to_string(),
        assertion_ids: assertions.iter().map(|a| a.id.clone()).collect(),
    }]
}

/// XSpec summaries for `revision` whose assertion is in `by_id`, in
/// catalog order. Follows the live filter because `by_id` is built from
/// the filtered set.
pub fn visible_scenario_summaries<'c>(
    catalog: &'c ScenarioCatalog,
    revision: &Revision,
    by_id: &HashMap<&str, &SchematronAssert>,
) -> Vec<&'c ScenarioSummary> {
    catalog
        .summaries(revision)
        .iter()
        .filter(|summary| by_id.contains_key(summary.assertion_id.as_str()))
        .collect()
}

/// Assemble the report.
pub fn build_report(
    filtered: &[&SchematronAssert],
    by_id: &HashMap<&str, &SchematronAssert>,
    groups: &[AssertionGroup],
    validator: &ValidatorState,
) -> SchematronReport {
    let is_validated = validator.is_validated();

    let reports = filtered.iter().filter(|a| a.is_report).count();
    let title = if is_validated {
        REPORT_TITLE.to_string()
    } else {
        format!("{REPORT_TITLE}{UNPROCESSED_SUFFIX}")
    };

    let groups = groups
        .iter()
        .map(|group| group_report(group, by_id, validator))
        .collect();

    SchematronReport {
        summary: ReportSummary {
            title,
            counts: ReportCounts {
                assertions: filtered.len() - reports,
                reports,
            },
        },
        groups,
    }
}

fn group_report(
    group: &AssertionGroup,
    by_id: &HashMap<&str, &SchematronAssert>,
    validator: &ValidatorState,
) -> GroupReport {
    let is_validated = validator.is_validated();

    // Ids filtered out or unknown are dropped.
    let checks: Vec<CheckView> = group
        .assertion_ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()))
        .map(|assertion| {
            let fired = validator.fired_for(&assertion.id).to_vec();
            let icon = match (is_validated, fired.is_empty()) {
                (false, _) => Icon::Pending,
                (true, true) => Icon::Clear,
                (true, false) => Icon::Flagged,
            };
            CheckView {
                assertion: (*assertion).clone(),
                icon,
                fired,
            }
        })
        .collect();

    let fired_count = checks.iter().filter(|c| !c.fired.is_empty()).count();
    let summary = if is_validated {
        format!("{fired_count} / {} triggered", checks.len())
    } else {
        format!("{} checks", checks.len())
    };
    let summary_color = if fired_count == 0 {
        SummaryColor::Green
    } else {
        SummaryColor::Red
    };

    GroupReport {
        title: group.title.clone(),
        checks: GroupChecks {
            summary,
            summary_color,
            checks,
        },
    }
}

/// Recompute every derived value from scratch.
pub fn rebuild<'a>(state: &'a ReportState, validator: &ValidatorState) -> DerivedView<'a> {
    let assertions = state.assertions();
    let filtered = filtered_assertions(assertions, state.filter());
    let by_id = assertions_by_id(&filtered);
    let groups = assertion_groups(assertions);
    let report = build_report(&filtered, &by_id, &groups, validator);

    DerivedView {
        roles_present: roles_present(assertions),
        roles_to_include: roles_to_include(state.filter()),
        filtered_assertions: filtered,
        assertions_by_id: by_id,
        groups,
        report,
    }
}
