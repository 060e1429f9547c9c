//! Price request orchestration.
//!
//! Builds the request snapshot, picks the rule-based or ML endpoint, and
//! folds transport faults and body-level `error` fields into one failure
//! channel.

use crate::error::SessionError;
use crate::request_state::RequestState;
use crate::scenario::PricingScenario;
use charter_core::pricing::{PriceRequest, PriceResult};
use charter_core::routes::Route;
use charter_core::transport::{TransportClient, TransportError};
use log::{info, warn};

/// A successful price and the exact request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedQuote {
    pub request: PriceRequest,
    request_body: Vec<u8>,
    pub route: Route,
    pub result: PriceResult,
}

impl PricedQuote {
    /// Serialized request as it was sent. Reused verbatim for the PDF quote.
    pub fn request_body(&self) -> &[u8] {
        &self.request_body
    }

    pub fn used_ml(&self) -> bool {
        self.route == Route::PriceMl
    }
}

/// A request that has been started but not settled.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPrice {
    pub request: PriceRequest,
    pub body: Vec<u8>,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingOrchestrator {
    state: RequestState<PricedQuote>,
}

impl PricingOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<PricedQuote> {
        &self.state
    }

    pub fn quote(&self) -> Option<&PricedQuote> {
        self.state.success()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Enter `Submitting` and snapshot the scenario.
    pub fn begin(&mut self, scenario: &PricingScenario) -> Result<PendingPrice, SessionError> {
        if !self.state.can_submit() {
            return Err(SessionError::Busy);
        }
        let request = scenario.snapshot();
        let body = serde_json::to_vec(&request)?;
        self.state.begin()?;
        Ok(PendingPrice {
            request,
            body,
            route: Route::price(scenario.use_ml),
        })
    }

    /// Settle with the transport outcome. A body-level `error` wins over a
    /// success status.
    pub fn settle(&mut self, pending: PendingPrice, outcome: Result<PriceResult, TransportError>) {
        let settled = match outcome {
            Ok(result) => match result.domain_error() {
                Some(message) => {
                    warn!("Pricing rejected by backend: {}", message);
                    Err(message.to_string())
                }
                None => Ok(PricedQuote {
                    request: pending.request,
                    request_body: pending.body,
                    route: pending.route,
                    result,
                }),
            },
            Err(e) => {
                warn!("Pricing request failed: {}", e);
                Err(e.to_string())
            }
        };
        self.state.settle(settled);
    }

    /// Run one full request cycle.
    pub async fn calculate(
        &mut self,
        client: &TransportClient,
        scenario: &PricingScenario,
    ) -> Result<&RequestState<PricedQuote>, SessionError> {
        let pending = self.begin(scenario)?;
        info!(
            "Pricing {} -> {} on {} (ml: {})",
            pending.request.depart_icao,
            pending.request.arrive_icao,
            pending.request.jet_model,
            pending.route == Route::PriceMl
        );
        let outcome = client
            .post_json_bytes::<PriceResult>(pending.route, pending.body.clone())
            .await;
        self.settle(pending, outcome);
        Ok(&self.state)
    }
}
