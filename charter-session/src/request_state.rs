//! One-in-flight request state machine shared by every orchestrator.
//!
//! ```text
//! Idle ──begin──▶ Submitting ──settle(Ok)──▶ Success(T)
//!   ▲                 │
//!   │                 └──settle(Err)──▶ Failed(message)
//!   └── Success / Failed ──begin──▶ Submitting
//! ```
//!
//! `begin` while `Submitting` is refused rather than queued; there is no
//! cancellation.

use crate::error::SessionError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Submitting,
    Success(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting)
    }

    /// Whether the action that starts a request should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    /// Enter `Submitting`, dropping any previous result or error.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.is_submitting() {
            return Err(SessionError::Busy);
        }
        *self = RequestState::Submitting;
        Ok(())
    }

    /// Leave `Submitting` with the outcome of the request.
    pub fn settle(&mut self, outcome: Result<T, String>) {
        *self = match outcome {
            Ok(value) => RequestState::Success(value),
            Err(message) => RequestState::Failed(message),
        };
    }

    pub fn reset(&mut self) {
        *self = RequestState::Idle;
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_outcome() {
        let mut state: RequestState<u32> = RequestState::Failed("boom".to_string());
        state.begin().unwrap();
        assert!(state.is_submitting());
        assert!(state.error().is_none());

        state.settle(Ok(7));
        assert_eq!(state.success(), Some(&7));

        state.begin().unwrap();
        assert!(state.success().is_none());
    }

    #[test]
    fn second_begin_while_submitting_is_refused() {
        let mut state: RequestState<u32> = RequestState::Idle;
        state.begin().unwrap();
        assert!(!state.can_submit());
        assert_eq!(state.begin(), Err(SessionError::Busy));
        assert!(state.is_submitting());
    }

    #[test]
    fn settle_with_error_fails() {
        let mut state: RequestState<u32> = RequestState::default();
        state.begin().unwrap();
        state.settle(Err("Unknown ICAO".to_string()));
        assert_eq!(state.error(), Some("Unknown ICAO"));
        assert!(state.can_submit());
    }
}
