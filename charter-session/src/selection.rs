//! Keeps the airport, category and model selections consistent with the catalog.
//!
//! Pure derivation over [`PricingScenario`]: nothing here knows about
//! requests in flight.

use crate::scenario::PricingScenario;
use charter_core::catalog::{Catalog, CategoryModelIndex};
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Uninitialized,
    Ready {
        index: CategoryModelIndex,
        airports: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    state: SelectionState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SelectionState::Ready { .. })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// `Uninitialized -> Ready`. Seeds category and model with the first
    /// catalog pair, then reconciles. Calling it again with a new catalog
    /// rebuilds the index and reconciles against it.
    pub fn on_catalog_loaded(&mut self, catalog: &Catalog, scenario: &mut PricingScenario) {
        let ambiguous = catalog.ambiguous_models();
        if !ambiguous.is_empty() {
            warn!("Catalog lists models under several categories: {:?}", ambiguous);
        }
        if let Some((category, model)) = catalog.first_selection() {
            scenario.category = category.to_string();
            scenario.jet_model = model.to_string();
        }
        self.state = SelectionState::Ready {
            index: catalog.category_index(),
            airports: catalog.airports.iter().map(|a| a.icao.clone()).collect(),
        };
        self.reconcile_airports(scenario);
        self.reconcile(scenario);
    }

    pub fn select_category(&self, scenario: &mut PricingScenario, category: &str) {
        scenario.category = category.to_string();
        self.reconcile(scenario);
    }

    pub fn select_model(&self, scenario: &mut PricingScenario, model: &str) {
        scenario.jet_model = model.to_string();
        self.reconcile(scenario);
    }

    /// Put `jet_model` back inside the current category.
    ///
    /// When the model is not one of the category's models it is replaced by
    /// the category's first model. An unknown category or one with no models
    /// leaves the model as it is.
    pub fn reconcile(&self, scenario: &mut PricingScenario) {
        let SelectionState::Ready { index, .. } = &self.state else {
            return;
        };
        let Some(models) = index.models(&scenario.category) else {
            return;
        };
        if models.iter().any(|m| *m == scenario.jet_model) {
            return;
        }
        if let Some(first) = models.first() {
            debug!(
                "Model {:?} is not in category {:?}; switching to {:?}",
                scenario.jet_model, scenario.category, first
            );
            scenario.jet_model = first.clone();
        }
    }

    /// Replace a depart/arrive ICAO the catalog does not know with the first airport.
    fn reconcile_airports(&self, scenario: &mut PricingScenario) {
        let SelectionState::Ready { airports, .. } = &self.state else {
            return;
        };
        let Some(first) = airports.first() else {
            return;
        };
        if !airports.contains(&scenario.depart_icao) {
            scenario.depart_icao = first.clone();
        }
        if !airports.contains(&scenario.arrive_icao) {
            scenario.arrive_icao = first.clone();
        }
    }

    pub fn categories(&self) -> Vec<&str> {
        match &self.state {
            SelectionState::Ready { index, .. } => index.categories().collect(),
            SelectionState::Uninitialized => Vec::new(),
        }
    }

    /// Models offered for `category`.
    pub fn models(&self, category: &str) -> &[String] {
        match &self.state {
            SelectionState::Ready { index, .. } => index.models(category).unwrap_or(&[]),
            SelectionState::Uninitialized => &[],
        }
    }

    pub fn airports(&self) -> &[String] {
        match &self.state {
            SelectionState::Ready { airports, .. } => airports,
            SelectionState::Uninitialized => &[],
        }
    }
}
