//! Events accepted by the report engine.
//!
//! Serialized in the view layer's wire shape:
//! `{"type": "FILTER_TEXT_CHANGED", "data": {"text": "…"}}`.

use asap_core::SchematronAssert;
use serde::{Deserialize, Serialize};

use crate::filter::Role;

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportEvent {
    /// Replace the filter text; role and assertions unchanged.
    FilterTextChanged { text: String },
    /// Replace the filter role; text and assertions unchanged. The role
    /// is not checked against the known roles.
    FilterRoleChanged { role: Role },
    /// Replace the whole assertion set; the filter survives.
    AssertionsFound {
        #[serde(rename = "schematronAsserts")]
        assertions: Vec<SchematronAssert>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_view_layer_events() {
        let event: ReportEvent =
            serde_json::from_str(r#"{"type": "FILTER_ROLE_CHANGED", "data": {"role": "error"}}"#)
                .unwrap();
        assert_eq!(event, ReportEvent::FilterRoleChanged { role: "error".into() });

        let event: ReportEvent = serde_json::from_str(
            r#"{"type": "ASSERTIONS_FOUND", "data": {"schematronAsserts": [
                {"id": "a", "role": "r", "message": "x", "isReport": false}
            ]}}"#,
        )
        .unwrap();
        match event {
            ReportEvent::AssertionsFound { assertions } => {
                assert_eq!(assertions.len(), 1);
                assert_eq!(assertions[0].role.as_deref(), Some("r"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(ReportEvent::FilterTextChanged { text: "ssp".into() })
            .unwrap();
        assert_eq!(json["type"], "FILTER_TEXT_CHANGED");
        assert_eq!(json["data"]["text"], "ssp");
    }
}
