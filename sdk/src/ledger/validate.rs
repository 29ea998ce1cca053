//! Payload validation against a transaction schema.
//!
//! The validator walks every field of the schema and collects *every*
//! problem it finds before answering. Callers get the complete deficiency
//! set in one round trip instead of fixing fields one rejection at a time.
//!
//! A payload that passes comes back wrapped in [`NormalizedPayload`], the
//! only type the canonicalizer accepts. There is no public constructor:
//! an unvalidated map structurally cannot reach canonicalization.

use std::fmt;

use serde_json::{Map, Value};

use crate::config::RESERVED_OPERATION_FIELDS;

use super::schema::{FieldKind, TxnSchema};

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// A payload that passed schema validation.
///
/// Obtainable only through [`validate`]. Holds the full caller payload,
/// including schema-unknown fields, which pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPayload {
    fields: Map<String, Value>,
}

impl NormalizedPayload {
    /// Read access to the validated fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub(crate) fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// One malformed field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFault {
    pub field: String,
    pub reason: String,
}

impl fmt::Display for FieldFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// The complete deficiency set of a rejected payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationFailure {
    /// Required fields absent from the payload, in schema order. An
    /// unsatisfied "at least one of" group appears as one `a|b|c` entry.
    pub missing: Vec<String>,
    /// Present fields that violate their shape constraint.
    pub malformed: Vec<FieldFault>,
}

impl ValidationFailure {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let malformed: Vec<String> = self.malformed.iter().map(|m| m.to_string()).collect();
        write!(
            f,
            "missing [{}], malformed [{}]",
            self.missing.join(", "),
            malformed.join("; ")
        )
    }
}

/// Result of validating a payload against a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(NormalizedPayload),
    Invalid(ValidationFailure),
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validates a raw payload map against a transaction schema.
///
/// The checks, all of them, every time:
///
/// 1. Every required schema field must be present. All absentees are
///    collected, not just the first.
/// 2. Every present schema field must match its [`FieldKind`].
/// 3. If the schema carries an "at least one of" group, at least one
///    member must be present.
/// 4. No payload field may collide with a reserved `operation` name
///    (`type`, `dest`) -- those slots belong to the canonical layout.
///
/// Fields the schema does not mention are passed through unchanged.
/// An empty payload against a schema with required fields yields
/// `Invalid` listing every required field as missing.
pub fn validate(schema: &TxnSchema, payload: &Map<String, Value>) -> ValidationOutcome {
    let mut failure = ValidationFailure::default();

    for spec in schema.fields {
        match payload.get(spec.name) {
            None if spec.required => failure.missing.push(spec.name.to_string()),
            None => {}
            Some(value) => {
                if let Err(reason) = check_kind(spec.kind, value) {
                    failure.malformed.push(FieldFault {
                        field: spec.name.to_string(),
                        reason,
                    });
                }
            }
        }
    }

    if !schema.at_least_one_of.is_empty()
        && !schema
            .at_least_one_of
            .iter()
            .any(|name| payload.contains_key(*name))
    {
        failure.missing.push(schema.at_least_one_of.join("|"));
    }

    for reserved in RESERVED_OPERATION_FIELDS {
        if payload.contains_key(*reserved) {
            failure.malformed.push(FieldFault {
                field: (*reserved).to_string(),
                reason: "reserved operation field name".to_string(),
            });
        }
    }

    if failure.is_empty() {
        ValidationOutcome::Valid(NormalizedPayload {
            fields: payload.clone(),
        })
    } else {
        ValidationOutcome::Invalid(failure)
    }
}

fn check_kind(kind: FieldKind, value: &Value) -> Result<(), String> {
    match kind {
        FieldKind::Str => {
            if value.is_string() {
                Ok(())
            } else {
                Err(format!("expected a string, got {}", json_kind(value)))
            }
        }
        FieldKind::Int => {
            if value.as_i64().is_some() || value.as_u64().is_some() {
                Ok(())
            } else {
                Err(format!("expected an integer, got {}", json_kind(value)))
            }
        }
        FieldKind::Enum(allowed) => {
            let member = value
                .as_str()
                .ok_or_else(|| format!("expected a string, got {}", json_kind(value)))?;
            if allowed.contains(&member) {
                Ok(())
            } else {
                Err(format!(
                    "'{}' is not one of [{}]",
                    member,
                    allowed.join(", ")
                ))
            }
        }
        FieldKind::EnumList(allowed) => {
            let items = value
                .as_array()
                .ok_or_else(|| format!("expected a list, got {}", json_kind(value)))?;
            for item in items {
                let member = item
                    .as_str()
                    .ok_or_else(|| format!("list element must be a string, got {}", json_kind(item)))?;
                if !allowed.contains(&member) {
                    return Err(format!(
                        "'{}' is not one of [{}]",
                        member,
                        allowed.join(", ")
                    ));
                }
            }
            Ok(())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::schema::TxnType;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().expect("object literal").clone()
    }

    fn node_payload() -> Map<String, Value> {
        as_map(json!({
            "node_ip": "ip",
            "node_port": 1,
            "client_ip": "ip",
            "client_port": 1,
            "alias": "some",
            "services": ["VALIDATOR"],
            "blskey": "CnEDk9HrMnmiHXEV1WFgbVCRteYnPqsJwrTdcZaNhFVW"
        }))
    }

    #[test]
    fn complete_node_payload_is_valid() {
        let outcome = validate(TxnType::Node.schema(), &node_payload());
        match outcome {
            ValidationOutcome::Valid(normalized) => {
                assert_eq!(normalized.fields().len(), 7);
            }
            ValidationOutcome::Invalid(failure) => panic!("unexpected failure: {}", failure),
        }
    }

    #[test]
    fn empty_payload_lists_every_required_field() {
        let outcome = validate(TxnType::Node.schema(), &Map::new());
        let failure = match outcome {
            ValidationOutcome::Invalid(failure) => failure,
            other => panic!("expected Invalid, got {:?}", other),
        };

        assert_eq!(failure.missing.len(), 7);
        for field in [
            "node_ip",
            "node_port",
            "client_ip",
            "client_port",
            "alias",
            "services",
            "blskey",
        ] {
            assert!(failure.missing.contains(&field.to_string()), "missing {}", field);
        }
        assert!(failure.malformed.is_empty());
    }

    #[test]
    fn missing_fields_accumulate_without_short_circuit() {
        let mut payload = node_payload();
        payload.remove("alias");
        payload.remove("blskey");

        match validate(TxnType::Node.schema(), &payload) {
            ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.missing, vec!["alias".to_string(), "blskey".to_string()]);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn malformed_fields_accumulate_too() {
        let mut payload = node_payload();
        payload.insert("node_port".to_string(), json!("not a port"));
        payload.insert("services".to_string(), json!("VALIDATOR"));

        match validate(TxnType::Node.schema(), &payload) {
            ValidationOutcome::Invalid(failure) => {
                assert!(failure.missing.is_empty());
                let fields: Vec<&str> =
                    failure.malformed.iter().map(|m| m.field.as_str()).collect();
                assert_eq!(fields, vec!["node_port", "services"]);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn float_is_not_an_integer() {
        let mut payload = node_payload();
        payload.insert("node_port".to_string(), json!(1.5));

        match validate(TxnType::Node.schema(), &payload) {
            ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.malformed[0].field, "node_port");
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn rejects_enum_list_with_unknown_member() {
        let mut payload = node_payload();
        payload.insert("services".to_string(), json!(["VALIDATOR", "MINER"]));

        match validate(TxnType::Node.schema(), &payload) {
            ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.malformed.len(), 1);
                assert!(failure.malformed[0].reason.contains("MINER"));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn unknown_fields_pass_through() {
        let mut payload = node_payload();
        payload.insert("extra".to_string(), json!({"nested": true}));

        match validate(TxnType::Node.schema(), &payload) {
            ValidationOutcome::Valid(normalized) => {
                assert_eq!(normalized.fields()["extra"], json!({"nested": true}));
            }
            other => panic!("expected Valid, got {:?}", other),
        }
    }

    #[test]
    fn reserved_operation_names_are_rejected() {
        let mut payload = node_payload();
        payload.insert("dest".to_string(), json!("sneaky"));

        match validate(TxnType::Node.schema(), &payload) {
            ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.malformed[0].field, "dest");
                assert!(failure.malformed[0].reason.contains("reserved"));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let outcome = validate(TxnType::Nym.schema(), &Map::new());
        assert!(matches!(outcome, ValidationOutcome::Valid(_)));
    }

    #[test]
    fn optional_fields_still_type_checked_when_present() {
        let payload = as_map(json!({"role": "EMPEROR"}));
        match validate(TxnType::Nym.schema(), &payload) {
            ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.malformed[0].field, "role");
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn at_least_one_of_group_enforced() {
        match validate(TxnType::Attrib.schema(), &Map::new()) {
            ValidationOutcome::Invalid(failure) => {
                assert_eq!(failure.missing, vec!["raw|hash|enc".to_string()]);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }

        let payload = as_map(json!({"hash": "83458a7d"}));
        assert!(matches!(
            validate(TxnType::Attrib.schema(), &payload),
            ValidationOutcome::Valid(_)
        ));
    }

    #[test]
    fn failure_display_reads_like_a_sentence() {
        let failure = ValidationFailure {
            missing: vec!["alias".to_string()],
            malformed: vec![FieldFault {
                field: "node_port".to_string(),
                reason: "expected an integer, got a string".to_string(),
            }],
        };
        assert_eq!(
            failure.to_string(),
            "missing [alias], malformed [node_port: expected an integer, got a string]"
        );
    }
}
