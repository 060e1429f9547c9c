use serde::{Deserialize, Serialize};

/// Embedded sample catalog for tests. Its fees, runway lengths and model
/// names are illustrative and need not match any backend.
pub static SAMPLE_CATALOG: &str = include_str!("../../fixtures/catalog.json");

/// An airport the backend can price to or from.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Airport {
    /// Four-letter ICAO identifier (e.g., "KTEB")
    pub icao: String,
    /// Landing and handling fees in USD
    pub fees: f64,
    /// Longest runway in feet
    #[serde(rename = "rwy")]
    pub runway_length_ft: f64,
}

/// A bookable jet model and the category it is sold under.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Jet {
    pub category: String,
    pub model: String,
}

/// Static reference data served by `/catalog`.
///
/// Loaded once per session and read-only afterwards.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub jets: Vec<Jet>,
}

impl Catalog {
    /// Parse a catalog from its JSON wire form.
    pub fn parse(json: &str) -> serde_json::Result<Catalog> {
        serde_json::from_str(json)
    }

    pub fn airport(&self, icao: &str) -> Option<&Airport> {
        self.airports.iter().find(|a| a.icao == icao)
    }

    /// The first `(category, model)` pair in catalog order, if any jets exist.
    pub fn first_selection(&self) -> Option<(&str, &str)> {
        self.jets
            .first()
            .map(|j| (j.category.as_str(), j.model.as_str()))
    }

    /// Models listed under more than one category.
    ///
    /// A well-formed catalog returns an empty vector.
    pub fn ambiguous_models(&self) -> Vec<&str> {
        let mut ambiguous: Vec<&str> = Vec::new();
        for (i, jet) in self.jets.iter().enumerate() {
            let clash = self.jets[..i]
                .iter()
                .any(|other| other.model == jet.model && other.category != jet.category);
            if clash && !ambiguous.contains(&jet.model.as_str()) {
                ambiguous.push(jet.model.as_str());
            }
        }
        ambiguous
    }

    pub fn category_index(&self) -> CategoryModelIndex {
        CategoryModelIndex::from_jets(&self.jets)
    }
}

/// `category -> models` view over [`Catalog::jets`].
///
/// Categories keep the order of their first appearance and models keep
/// insertion order within their category. Rebuilt from the catalog, never
/// edited in place.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct CategoryModelIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl CategoryModelIndex {
    pub fn from_jets(jets: &[Jet]) -> Self {
        let mut entries: Vec<(String, Vec<String>)> = Vec::new();
        for jet in jets {
            match entries.iter_mut().find(|(c, _)| *c == jet.category) {
                Some((_, models)) => models.push(jet.model.clone()),
                None => entries.push((jet.category.clone(), vec![jet.model.clone()])),
            }
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Models sold under `category`, or `None` for an unknown category.
    pub fn models(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, models)| models.as_slice())
    }

    pub fn contains(&self, category: &str, model: &str) -> bool {
        self.models(category)
            .map(|models| models.iter().any(|m| m == model))
            .unwrap_or(false)
    }

    pub fn category_of(&self, model: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, models)| models.iter().any(|m| m == model))
            .map(|(c, _)| c.as_str())
    }
}
