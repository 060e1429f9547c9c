//! Fleet assignment request orchestration.

use crate::components::AssignmentView;
use crate::editor::ScenarioEditor;
use crate::error::SessionError;
use crate::request_state::RequestState;
use charter_core::optimizer::{OptimizerLeg, OptimizerRequest, OptimizerResult};
use charter_core::routes::Route;
use charter_core::transport::{TransportClient, TransportError};
use log::{info, warn};

/// A solved assignment and the legs it was solved for.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub result: OptimizerResult,
    /// Legs as submitted; leg ids in the result are looked up here
    pub legs: Vec<OptimizerLeg>,
}

impl Assignment {
    pub fn view(&self) -> AssignmentView {
        AssignmentView::build(&self.result, &self.legs)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingRun {
    pub body: Vec<u8>,
    pub legs: Vec<OptimizerLeg>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptimizerOrchestrator {
    state: RequestState<Assignment>,
}

impl OptimizerOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<Assignment> {
        &self.state
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.state.success()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Whether the run action is enabled for `editor`.
    pub fn can_run(&self, editor: &ScenarioEditor) -> bool {
        self.state.can_submit() && editor.can_run()
    }

    pub fn begin(&mut self, editor: &ScenarioEditor) -> Result<PendingRun, SessionError> {
        let (aircraft, legs) = editor.submission().ok_or(SessionError::ScenarioIncomplete)?;
        if !self.state.can_submit() {
            return Err(SessionError::Busy);
        }
        let body = serde_json::to_vec(&OptimizerRequest { aircraft, legs })?;
        self.state.begin()?;
        Ok(PendingRun {
            body,
            legs: legs.to_vec(),
        })
    }

    /// Settle with the transport outcome. A body-level `error` wins over a
    /// success status.
    pub fn settle(&mut self, pending: PendingRun, outcome: Result<OptimizerResult, TransportError>) {
        let settled = match outcome {
            Ok(result) => match result.domain_error() {
                Some(message) => {
                    warn!("Optimizer rejected scenario: {}", message);
                    Err(message.to_string())
                }
                None => Ok(Assignment {
                    result,
                    legs: pending.legs,
                }),
            },
            Err(e) => {
                warn!("Optimizer request failed: {}", e);
                Err(e.to_string())
            }
        };
        self.state.settle(settled);
    }

    pub async fn run(
        &mut self,
        client: &TransportClient,
        editor: &ScenarioEditor,
    ) -> Result<&RequestState<Assignment>, SessionError> {
        let pending = self.begin(editor)?;
        info!("Running optimizer for {} legs", pending.legs.len());
        let outcome = client
            .post_json_bytes::<OptimizerResult>(Route::OptimizerRun, pending.body.clone())
            .await;
        self.settle(pending, outcome);
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_buffers_are_refused() {
        let editor = ScenarioEditor::new("[", "[]");
        let mut orchestrator = OptimizerOrchestrator::new();
        assert!(!orchestrator.can_run(&editor));
        assert_eq!(
            orchestrator.begin(&editor),
            Err(SessionError::ScenarioIncomplete)
        );
        assert_eq!(orchestrator.state(), &RequestState::Idle);
    }

    #[test]
    fn body_contains_both_collections() {
        let editor = ScenarioEditor::default();
        let mut orchestrator = OptimizerOrchestrator::new();
        let pending = orchestrator.begin(&editor).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&pending.body).unwrap();
        assert_eq!(body["aircraft"][0]["tail"], "N123");
        assert_eq!(body["legs"][1]["id"], "L2");
        assert!(!orchestrator.can_run(&editor));
    }

    #[test]
    fn body_error_wins_over_success() {
        let editor = ScenarioEditor::default();
        let mut orchestrator = OptimizerOrchestrator::new();
        let pending = orchestrator.begin(&editor).unwrap();
        let result: OptimizerResult =
            serde_json::from_str(r#"{"error": "No feasible assignment"}"#).unwrap();
        orchestrator.settle(pending, Ok(result));
        assert_eq!(orchestrator.error(), Some("No feasible assignment"));
    }

    #[test]
    fn view_uses_submitted_legs() {
        let mut editor = ScenarioEditor::default();
        let mut orchestrator = OptimizerOrchestrator::new();
        let pending = orchestrator.begin(&editor).unwrap();

        // editing after submit must not change the cross-reference
        editor.set_legs_text("[]");
        let result: OptimizerResult =
            serde_json::from_str(r#"{"assignment": {"N123": ["L1"]}, "objective_nm": 0}"#).unwrap();
        orchestrator.settle(pending, Ok(result));

        let view = orchestrator.assignment().unwrap().view();
        assert_eq!(view.rows[0].legs[0].route.as_deref(), Some("KTEB → KMIA"));
    }
}
