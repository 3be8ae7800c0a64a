//! # OSCAL Document Types
//!
//! Defines the `DocumentType` enum, the single list of OSCAL document kinds
//! the validator understands. Converter tables and report shaping match on
//! it exhaustively, so adding a kind forces every consumer to handle it.
//!
//! ## JSON Detection
//!
//! OSCAL JSON documents carry exactly one top-level key naming the model
//! (`{"system-security-plan": {...}}`). [`DocumentType::detect_json`] reads
//! that key; XML classification belongs to the rule processor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DocumentTypeError;

/// An OSCAL document kind.
///
/// | Variant | Short name | JSON root key |
/// |---------|------------|---------------|
/// | `Ssp`  | `ssp`  | `system-security-plan` |
/// | `Sap`  | `sap`  | `assessment-plan` |
/// | `Sar`  | `sar`  | `assessment-results` |
/// | `Poam` | `poam` | `plan-of-action-and-milestones` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// System Security Plan.
    Ssp,
    /// Security Assessment Plan.
    Sap,
    /// Security Assessment Results.
    Sar,
    /// Plan of Action and Milestones.
    Poam,
}

impl DocumentType {
    /// Every document type, in declaration order.
    pub const ALL: [DocumentType; 4] = [Self::Ssp, Self::Sap, Self::Sar, Self::Poam];

    /// The short name used in APIs and dispatch tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ssp => "ssp",
            Self::Sap => "sap",
            Self::Sar => "sar",
            Self::Poam => "poam",
        }
    }

    /// The top-level key an OSCAL JSON document of this type carries.
    pub fn json_root_key(&self) -> &'static str {
        match self {
            Self::Ssp => "system-security-plan",
            Self::Sap => "assessment-plan",
            Self::Sar => "assessment-results",
            Self::Poam => "plan-of-action-and-milestones",
        }
    }

    /// Look up the document type named by a JSON root key.
    pub fn from_json_root_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.json_root_key() == key)
    }

    /// Determine the document type of a JSON OSCAL payload from its
    /// top-level key.
    ///
    /// The first top-level key (in document order) naming a known model
    /// wins. Other keys are ignored.
    ///
    /// # Errors
    ///
    /// - [`DocumentTypeError::InvalidJson`] if the payload does not parse.
    /// - [`DocumentTypeError::NotAnObject`] if the top level is not an object.
    /// - [`DocumentTypeError::Unsupported`] if no key names a known model.
    pub fn detect_json(json: &str) -> Result<Self, DocumentTypeError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(DocumentTypeError::NotAnObject);
        };

        map.keys()
            .find_map(|key| Self::from_json_root_key(key))
            .ok_or_else(|| DocumentTypeError::Unsupported {
                keys: map.keys().cloned().collect(),
            })
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = DocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DocumentTypeError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_root_key() {
        for doc_type in DocumentType::ALL {
            let json = format!(r#"{{"{}": {{}}}}"#, doc_type.json_root_key());
            assert_eq!(DocumentType::detect_json(&json).unwrap(), doc_type);
        }
    }

    #[test]
    fn detects_ssp_among_other_keys() {
        let json = r#"{"$schema": "oscal.json", "system-security-plan": {"uuid": "x"}}"#;
        assert_eq!(DocumentType::detect_json(json).unwrap(), DocumentType::Ssp);
    }

    #[test]
    fn unknown_root_key_is_unsupported() {
        let err = DocumentType::detect_json(r#"{"catalog": {}}"#).unwrap_err();
        match err {
            DocumentTypeError::Unsupported { keys } => assert_eq!(keys, vec!["catalog"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_unsupported() {
        let err = DocumentType::detect_json("{}").unwrap_err();
        assert!(matches!(err, DocumentTypeError::Unsupported { keys } if keys.is_empty()));
    }

    #[test]
    fn array_is_not_an_object() {
        let err = DocumentType::detect_json("[]").unwrap_err();
        assert!(matches!(err, DocumentTypeError::NotAnObject));
    }

    #[test]
    fn malformed_json_is_invalid() {
        let err = DocumentType::detect_json("<xml/>").unwrap_err();
        assert!(matches!(err, DocumentTypeError::InvalidJson(_)));
        // The parser message is reachable as the source only.
        assert_eq!(err.to_string(), "invalid OSCAL JSON");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn short_names_round_trip_through_from_str() {
        for doc_type in DocumentType::ALL {
            assert_eq!(doc_type.as_str().parse::<DocumentType>().unwrap(), doc_type);
        }
    }

    #[test]
    fn unknown_short_name_is_reported_by_name() {
        let err = "catalog".parse::<DocumentType>().unwrap_err();
        assert!(matches!(err, DocumentTypeError::UnknownName(ref name) if name == "catalog"));
        assert_eq!(err.to_string(), "unknown OSCAL document type name 'catalog'");
    }

    #[test]
    fn serializes_as_short_name() {
        assert_eq!(serde_json::to_string(&DocumentType::Poam).unwrap(), r#""poam""#);
    }
}
