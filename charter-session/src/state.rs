//! The two operator sessions.
//!
//! `CalculatorSession` owns the catalog, the pricing form, the price request
//! state machine and the export state. `OpsSession` owns the optimizer
//! buffers and the optimizer request state machine. Each session is the only
//! writer of its own state.

use crate::components::{AssignmentView, PriceView};
use crate::editor::{ScenarioEditor, ScenarioSample};
use crate::error::SessionError;
use crate::export::{request_pdf, ArtifactViewer};
use crate::optimizer::{Assignment, OptimizerOrchestrator};
use crate::pricing::{PricedQuote, PricingOrchestrator};
use crate::request_state::RequestState;
use crate::scenario::PricingScenario;
use crate::selection::Selection;
use charter_core::catalog::Catalog;
use charter_core::routes::Route;
use charter_core::transport::TransportClient;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Price calculator state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorSession {
    /// Reference data (None until loaded)
    catalog: Option<Catalog>,
    /// Set once the catalog request has been made
    catalog_requested: bool,
    /// Session-level error, e.g. the catalog could not be loaded
    error_msg: Option<String>,
    scenario: PricingScenario,
    selection: Selection,
    pricing: PricingOrchestrator,
    /// Export outcome; the saved path on success. Kept apart from the
    /// pricing error.
    export: RequestState<PathBuf>,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog. Only the first call reaches the network.
    pub async fn load_catalog(&mut self, client: &TransportClient) {
        if self.catalog_requested {
            return;
        }
        self.catalog_requested = true;
        match client.get_json::<Catalog>(Route::Catalog).await {
            Ok(catalog) => self.apply_catalog(catalog),
            Err(e) => {
                warn!("Failed to load catalog: {}", e);
                self.error_msg = Some(e.to_string());
            }
        }
    }

    /// Install a loaded catalog and make the selections consistent with it.
    pub fn apply_catalog(&mut self, catalog: Catalog) {
        info!(
            "Loaded catalog: {} airports, {} jets",
            catalog.airports.len(),
            catalog.jets.len()
        );
        self.selection.on_catalog_loaded(&catalog, &mut self.scenario);
        self.catalog = Some(catalog);
        self.error_msg = None;
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn error_msg(&self) -> Option<&str> {
        self.error_msg.as_deref()
    }

    pub fn scenario(&self) -> &PricingScenario {
        &self.scenario
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_depart(&mut self, icao: &str) {
        self.scenario.depart_icao = icao.to_string();
    }

    pub fn set_arrive(&mut self, icao: &str) {
        self.scenario.arrive_icao = icao.to_string();
    }

    pub fn select_category(&mut self, category: &str) {
        self.selection.select_category(&mut self.scenario, category);
    }

    pub fn select_model(&mut self, model: &str) {
        self.selection.select_model(&mut self.scenario, model);
    }

    pub fn set_use_ml(&mut self, use_ml: bool) {
        self.scenario.use_ml = use_ml;
    }

    /// Edit the form in place. The model is reconciled with the category
    /// afterwards, whatever the closure changed.
    pub fn adjust(&mut self, edit: impl FnOnce(&mut PricingScenario)) {
        edit(&mut self.scenario);
        self.selection.reconcile(&mut self.scenario);
    }

    pub fn pricing(&self) -> &RequestState<PricedQuote> {
        self.pricing.state()
    }

    /// Pricing failure, transport or domain.
    pub fn error(&self) -> Option<&str> {
        self.pricing.error()
    }

    pub fn can_calculate(&self) -> bool {
        self.is_ready() && self.pricing.can_submit()
    }

    pub async fn calculate(
        &mut self,
        client: &TransportClient,
    ) -> Result<&RequestState<PricedQuote>, SessionError> {
        if !self.is_ready() {
            return Err(SessionError::CatalogNotReady);
        }
        if !self.pricing.can_submit() {
            return Err(SessionError::Busy);
        }
        self.export.reset();
        self.pricing.calculate(client, &self.scenario).await
    }

    pub fn price_view(&self) -> Option<PriceView> {
        self.pricing
            .quote()
            .map(|quote| PriceView::from_result(&quote.result))
    }

    pub fn export(&self) -> &RequestState<PathBuf> {
        &self.export
    }

    /// Export failure, shown next to the export action only.
    pub fn export_error(&self) -> Option<&str> {
        self.export.error()
    }

    pub fn can_export(&self) -> bool {
        self.pricing.quote().is_some() && self.export.can_submit()
    }

    /// Request the PDF for the last successful quote, preview it and save it
    /// as `quote.pdf` in `download_dir`.
    pub async fn export_pdf(
        &mut self,
        client: &TransportClient,
        download_dir: &Path,
        viewer: &dyn ArtifactViewer,
    ) -> Result<&RequestState<PathBuf>, SessionError> {
        let quote = self.pricing.quote().ok_or(SessionError::NoQuote)?;
        self.export.begin()?;
        info!(
            "Exporting quote {} -> {}",
            quote.request.depart_icao, quote.request.arrive_icao
        );
        let outcome = match request_pdf(client, quote).await {
            Ok(artifact) => artifact.deliver(download_dir, viewer),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            warn!("Quote export failed: {}", e);
        }
        self.export.settle(outcome.map_err(|e| e.to_string()));
        Ok(&self.export)
    }
}

/// Fleet optimizer state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpsSession {
    pub editor: ScenarioEditor,
    optimizer: OptimizerOrchestrator,
}

impl OpsSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_sample(&mut self, sample: ScenarioSample) {
        info!("Loading sample scenario {}", sample.label());
        self.editor.load_sample(sample);
    }

    pub fn can_run(&self) -> bool {
        self.optimizer.can_run(&self.editor)
    }

    pub fn state(&self) -> &RequestState<Assignment> {
        self.optimizer.state()
    }

    pub fn error(&self) -> Option<&str> {
        self.optimizer.error()
    }

    pub async fn run(
        &mut self,
        client: &TransportClient,
    ) -> Result<&RequestState<Assignment>, SessionError> {
        self.optimizer.run(client, &self.editor).await
    }

    pub fn assignment_view(&self) -> Option<AssignmentView> {
        self.optimizer.assignment().map(Assignment::view)
    }
}
