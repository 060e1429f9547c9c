//! Display model for an optimizer assignment.
//!
//! Leg ids are cross-referenced against the legs that were submitted. An id
//! the solver returned but that is not among them renders bare.

use charter_core::optimizer::{find_leg, OptimizerLeg, OptimizerResult};
use charter_utils::dates::format_utc_minutes;
use charter_utils::format::{format_fixed, PLACEHOLDER};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct LegLine {
    pub id: String,
    /// "KTEB → KBOS" when the id matched a submitted leg
    pub route: Option<String>,
    /// Scheduled departure of the matched leg; raw text when `etd` is not RFC 3339
    pub departs: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRow {
    pub tail: String,
    pub legs: Vec<LegLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentView {
    /// Objective with one decimal, e.g. "1523.5"
    pub objective: String,
    pub rows: Vec<AssignmentRow>,
    /// Pretty-printed response body
    pub raw_json: String,
}

fn leg_line(id: &str, legs: &[OptimizerLeg]) -> LegLine {
    match find_leg(legs, id) {
        Some(leg) => LegLine {
            id: id.to_string(),
            route: Some(format!(
                "{} → {}",
                leg.start().unwrap_or(PLACEHOLDER),
                leg.end().unwrap_or(PLACEHOLDER)
            )),
            departs: leg.etd().map(|raw| match leg.departure_time() {
                Some(t) => format_utc_minutes(&t),
                None => raw.to_string(),
            }),
        },
        None => LegLine {
            id: id.to_string(),
            route: None,
            departs: None,
        },
    }
}

impl AssignmentView {
    pub fn build(result: &OptimizerResult, legs: &[OptimizerLeg]) -> AssignmentView {
        let rows = result
            .tail_assignments()
            .into_iter()
            .map(|entry| AssignmentRow {
                legs: entry.leg_ids.iter().map(|id| leg_line(id, legs)).collect(),
                tail: entry.tail,
            })
            .collect();
        AssignmentView {
            objective: format_fixed(result.objective_nm.unwrap_or(0.0), 1),
            rows,
            raw_json: serde_json::to_string_pretty(result).unwrap_or_default(),
        }
    }
}

impl fmt::Display for LegLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(route) = &self.route {
            write!(f, " — {}", route)?;
        }
        if let Some(departs) = &self.departs {
            write!(f, " (ETD {})", departs)?;
        }
        Ok(())
    }
}

impl fmt::Display for AssignmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Objective (total reposition NM): {}", self.objective)?;
        for row in &self.rows {
            write!(f, "\n{}", row.tail)?;
            if row.legs.is_empty() {
                write!(f, "\n  {}", PLACEHOLDER)?;
            }
            for leg in &row.legs {
                write!(f, "\n  - {}", leg)?;
            }
        }
        Ok(())
    }
}
