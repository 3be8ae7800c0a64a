//! # Report Engine Scenarios
//!
//! End-to-end checks of the engine as the view layer drives it: events
//! in, roles and reports out, against both validator phases.

use asap_core::{FailedAssert, Revision, SchematronAssert};
use asap_report::{
    Icon, ReportEngine, ReportEvent, ScenarioCatalog, ScenarioSummary, SummaryColor,
    ValidatorPhase, ValidatorState, XSpecScenario,
};

fn assertion(id: &str, role: &str, message: &str, is_report: bool) -> SchematronAssert {
    SchematronAssert {
        id: id.to_string(),
        role: Some(role.to_string()),
        message: message.to_string(),
        is_report,
    }
}

fn fired(id: &str) -> FailedAssert {
    FailedAssert {
        id: id.to_string(),
        location: "/*:system-security-plan[1]".to_string(),
        test: "exists(oscal:metadata/oscal:title)".to_string(),
        text: "title missing".to_string(),
        role: Some("error".to_string()),
        see: None,
        diagnostic_references: Vec::new(),
    }
}

fn single_assertion_engine() -> ReportEngine {
    let mut engine = ReportEngine::new();
    engine.dispatch(ReportEvent::AssertionsFound {
        assertions: vec![assertion("a", "r", "x", false)],
    });
    engine
}

#[test]
fn pre_validation_pending_state() {
    let engine = single_assertion_engine();
    let report = engine.report(&ValidatorState::unvalidated());

    assert_eq!(
        report.summary.title,
        "FedRAMP Package Concerns and Notes (unprocessed)"
    );
    let group = &report.groups[0];
    assert_eq!(group.title, "System Security Plan");
    assert_eq!(group.checks.summary, "1 checks");
    assert_eq!(group.checks.summary_color, SummaryColor::Green);
    assert_eq!(group.checks.checks[0].icon, Icon::Pending);
}

#[test]
fn post_validation_with_one_firing() {
    let engine = single_assertion_engine();
    let report = engine.report(&ValidatorState::validated([fired("a")]));

    assert_eq!(report.summary.title, "FedRAMP Package Concerns and Notes");
    let group = &report.groups[0];
    assert_eq!(group.checks.summary, "1 / 1 triggered");
    assert_eq!(group.checks.summary_color, SummaryColor::Red);
    assert_eq!(group.checks.checks[0].icon, Icon::Flagged);
    assert_eq!(group.checks.checks[0].fired, vec![fired("a")]);
}

#[test]
fn post_validation_without_firing_is_clear() {
    let engine = single_assertion_engine();
    let validator = ValidatorState {
        phase: ValidatorPhase::Validated,
        ..ValidatorState::default()
    };
    let report = engine.report(&validator);

    let group = &report.groups[0];
    assert_eq!(group.checks.summary, "0 / 1 triggered");
    assert_eq!(group.checks.summary_color, SummaryColor::Green);
    assert_eq!(group.checks.checks[0].icon, Icon::Clear);
}

#[test]
fn assertions_round_trip_under_default_filter() {
    let assertions = vec![
        assertion("a", "error", "one", false),
        assertion("b", "warning", "two", true),
        SchematronAssert {
            id: "c".into(),
            role: None,
            message: "three".into(),
            is_report: false,
        },
    ];
    let mut engine = ReportEngine::new();
    engine.dispatch(ReportEvent::AssertionsFound {
        assertions: assertions.clone(),
    });

    let filtered: Vec<SchematronAssert> =
        engine.filtered_assertions().into_iter().cloned().collect();
    assert_eq!(filtered, assertions);
}

#[test]
fn repeating_current_text_is_idempotent() {
    let mut engine = ReportEngine::new();
    engine.dispatch(ReportEvent::AssertionsFound {
        assertions: vec![
            assertion("a", "error", "Missing title", false),
            assertion("b", "warning", "Stale import", false),
        ],
    });
    engine.set_filter_text("title");
    let validator = ValidatorState::validated([fired("a")]);
    let before = engine.report(&validator);

    engine.dispatch(ReportEvent::FilterTextChanged {
        text: "title".into(),
    });

    assert_eq!(engine.report(&validator), before);
}

#[test]
fn filter_changes_are_reflected_immediately() {
    let mut engine = ReportEngine::new();
    engine.dispatch(ReportEvent::AssertionsFound {
        assertions: vec![
            assertion("a", "error", "Missing title", false),
            assertion("b", "warning", "Stale import", false),
            assertion("c", "information", "System name present", true),
        ],
    });
    let validator = ValidatorState::unvalidated();

    assert_eq!(engine.roles_present(), vec!["all", "error", "information", "warning"]);
    assert_eq!(engine.report(&validator).summary.counts.assertions, 2);
    assert_eq!(engine.report(&validator).summary.counts.reports, 1);

    engine.set_filter_role("information");
    let report = engine.report(&validator);
    assert_eq!(report.summary.counts.assertions, 0);
    assert_eq!(report.summary.counts.reports, 1);
    assert_eq!(report.groups[0].checks.summary, "1 checks");

    engine.set_filter_role("all");
    engine.set_filter_text("STALE");
    let report = engine.report(&validator);
    let ids: Vec<_> = report.groups[0]
        .checks
        .checks
        .iter()
        .map(|c| c.assertion.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b"]);

    // The role list is structural and ignores the filter.
    assert_eq!(engine.roles_present().len(), 4);
}

#[test]
fn new_assertion_set_replaces_previous_report() {
    let mut engine = single_assertion_engine();
    engine.dispatch(ReportEvent::AssertionsFound {
        assertions: vec![
            assertion("x", "error", "first", false),
            assertion("y", "error", "second", false),
        ],
    });

    let view = engine.view(&ValidatorState::validated([fired("a")]));
    let ids: Vec<_> = view.report.groups[0]
        .checks
        .checks
        .iter()
        .map(|c| c.assertion.id.as_str())
        .collect();
    assert_eq!(ids, vec!["x", "y"]);
    assert_eq!(view.report.groups[0].checks.summary, "0 / 2 triggered");
    assert!(view.assertions_by_id.get("a").is_none());
    assert_eq!(view.roles_present, vec!["all", "error"]);
}

#[test]
fn unknown_role_yields_empty_report() {
    let mut engine = single_assertion_engine();
    engine.set_filter_role("critical");

    let report = engine.report(&ValidatorState::validated([fired("a")]));
    assert_eq!(report.summary.counts.assertions, 0);
    assert!(report.groups[0].checks.checks.is_empty());
    assert_eq!(report.groups[0].checks.summary, "0 / 0 triggered");
    assert_eq!(report.groups[0].checks.summary_color, SummaryColor::Green);
}

#[test]
fn report_serializes_for_view_layer() {
    let engine = single_assertion_engine();
    let json = serde_json::to_value(engine.report(&ValidatorState::validated([fired("a")]))).unwrap();

    assert_eq!(json["summary"]["counts"]["assertions"], 1);
    let group = &json["groups"][0];
    assert_eq!(group["title"], "System Security Plan");
    assert_eq!(group["checks"]["summaryColor"], "red");
    let check = &group["checks"]["checks"][0];
    assert_eq!(check["id"], "a");
    assert_eq!(check["icon"]["sprite"], "cancel");
    assert_eq!(check["fired"][0]["location"], "/*:system-security-plan[1]");
}

#[test]
fn engine_driven_by_wire_events() {
    let events = r#"[
        {"type": "ASSERTIONS_FOUND", "data": {"schematronAsserts": [
            {"id": "has-title", "role": "error", "message": "A title is required", "isReport": false},
            {"id": "import-profile", "role": "warning", "message": "Profile import resolves", "isReport": false},
            {"id": "system-name", "role": "information", "message": "System name", "isReport": true}
        ]}},
        {"type": "FILTER_ROLE_CHANGED", "data": {"role": "error"}},
        {"type": "FILTER_TEXT_CHANGED", "data": {"text": "title"}}
    ]"#;
    let events: Vec<ReportEvent> = serde_json::from_str(events).unwrap();

    let mut engine = ReportEngine::new();
    for event in events {
        engine.dispatch(event);
    }

    let ids: Vec<_> = engine
        .filtered_assertions()
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, vec!["has-title"]);
    assert_eq!(engine.filter().role, "error");
    assert_eq!(engine.filter().text, "title");

    let report = engine.report(&ValidatorState::validated([fired("has-title")]));
    assert_eq!(report.groups[0].checks.summary, "1 / 1 triggered");
}

#[test]
fn scenario_summaries_track_filter_changes() {
    let summary = |id: &str, label: &str| ScenarioSummary {
        assertion_id: id.to_string(),
        assertion_label: label.to_string(),
        scenarios: vec![
            XSpecScenario {
                label: "SSP metadata".to_string(),
                url: Some("https://example.gov/ssp.xspec".to_string()),
            },
            XSpecScenario {
                label: format!("when {label} is absent"),
                url: None,
            },
        ],
        reference_url: None,
        context: "<metadata/>".to_string(),
    };
    let catalog = ScenarioCatalog::new().with(
        "rev5",
        vec![summary("has-title", "title"), summary("import-profile", "profile import")],
    );
    let rev5 = Revision::rev5();

    let mut engine = ReportEngine::new();
    engine.assertions_found(vec![
        assertion("has-title", "error", "A title is required", false),
        assertion("import-profile", "warning", "Profile import resolves", false),
    ]);
    let visible = |engine: &ReportEngine| -> Vec<String> {
        engine
            .scenario_summaries(&catalog, &rev5)
            .into_iter()
            .map(|s| s.assertion_id.clone())
            .collect()
    };

    assert_eq!(visible(&engine), vec!["has-title", "import-profile"]);

    engine.set_filter_role("warning");
    assert_eq!(visible(&engine), vec!["import-profile"]);

    engine.set_filter_role("all");
    engine.set_filter_text("TITLE");
    assert_eq!(visible(&engine), vec!["has-title"]);

    assert!(engine.scenario_summaries(&catalog, &Revision::rev4()).is_empty());
}
