//! Request and response shapes for `/optimizer/run`.
//!
//! Aircraft and legs come from operator-edited JSON. Only the outer shape
//! (an array) is required here. Each record is kept as the JSON value that
//! was typed, whatever its field types, so the backend sees exactly what the
//! operator wrote. Schema enforcement belongs to the solver; the accessors
//! below only read the fields the assignment view needs.

use crate::lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn text_field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// An aircraft available for assignment.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptimizerAircraft(pub Value);

impl OptimizerAircraft {
    pub fn tail(&self) -> Option<&str> {
        text_field(&self.0, "tail")
    }

    /// Current ICAO position
    pub fn position(&self) -> Option<&str> {
        text_field(&self.0, "position")
    }
}

/// A revenue leg to be covered by one aircraft.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptimizerLeg(pub Value);

impl OptimizerLeg {
    /// The leg id as the solver will echo it back. Numeric ids are compared
    /// by their JSON text.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn start(&self) -> Option<&str> {
        text_field(&self.0, "start")
    }

    pub fn end(&self) -> Option<&str> {
        text_field(&self.0, "end")
    }

    /// Scheduled departure, ISO 8601 as typed
    pub fn etd(&self) -> Option<&str> {
        text_field(&self.0, "etd")
    }

    /// Scheduled arrival, ISO 8601 as typed
    pub fn eta(&self) -> Option<&str> {
        text_field(&self.0, "eta")
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id().as_deref() == Some(id)
    }

    /// `etd` as a UTC timestamp, when it is valid RFC 3339.
    pub fn departure_time(&self) -> Option<DateTime<Utc>> {
        self.etd()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Find a leg by identifier.
pub fn find_leg<'a>(legs: &'a [OptimizerLeg], id: &str) -> Option<&'a OptimizerLeg> {
    legs.iter().find(|leg| leg.has_id(id))
}

/// Body of `/optimizer/run`.
#[derive(Debug, Serialize)]
pub struct OptimizerRequest<'a> {
    pub aircraft: &'a [OptimizerAircraft],
    pub legs: &'a [OptimizerLeg],
}

/// One tail and the leg ids it was given, in solver order.
#[derive(Debug, PartialEq, Clone)]
pub struct TailAssignment {
    pub tail: String,
    pub leg_ids: Vec<String>,
}

/// Response body of `/optimizer/run`.
///
/// Leg ids inside `assignment` are expected to exist in the submitted legs but
/// that is the solver's promise, not something checked here.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerResult {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::text")]
    pub error: Option<String>,
    /// tail -> ordered leg ids, kept as received
    pub assignment: Option<Value>,
    /// Total reposition distance in nautical miles
    #[serde(deserialize_with = "lenient::number")]
    pub objective_nm: Option<f64>,
}

impl OptimizerResult {
    pub fn domain_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Tails in the order the backend sent them.
    ///
    /// A tail whose entry is not an array gets no legs. Non-string leg ids
    /// are shown as their JSON text.
    pub fn tail_assignments(&self) -> Vec<TailAssignment> {
        let tails = match self.assignment.as_ref().and_then(Value::as_object) {
            Some(tails) => tails,
            None => return Vec::new(),
        };
        tails
            .iter()
            .map(|(tail, ids)| TailAssignment {
                tail: tail.clone(),
                leg_ids: ids
                    .as_array()
                    .map(|ids| {
                        ids.iter()
                            .map(|id| match id {
                                Value::String(s) => s.clone(),
                                other => other.to_string(),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }
}
