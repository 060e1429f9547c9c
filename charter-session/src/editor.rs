//! Free-form JSON buffers for the optimizer scenario.
//!
//! Each buffer keeps the raw text and the result of parsing it. Parsing is
//! total: bad JSON becomes a [`ParseFault`] that only gates the run action,
//! it is never raised. Reparsing happens only when the text changes.
//!
//! A buffer must hold a JSON array. Its elements are not checked at all;
//! field names and types are the solver's business.

use charter_core::optimizer::{OptimizerAircraft, OptimizerLeg};
use serde::de::DeserializeOwned;
use std::fmt;

/// Why a buffer did not parse. Used for gating, not for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFault {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid JSON at line {}, column {}", self.line, self.column)
    }
}

/// Parse a JSON array of `T`. Never panics.
pub fn parse_collection<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ParseFault> {
    serde_json::from_str(text).map_err(|e| ParseFault {
        line: e.line(),
        column: e.column(),
    })
}

/// A text buffer and its memoized parse.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBuffer<T> {
    text: String,
    parsed: Result<Vec<T>, ParseFault>,
}

impl<T: DeserializeOwned> TextBuffer<T> {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let parsed = parse_collection(&text);
        Self { text, parsed }
    }

    /// Replace the text. Returns `false` when it was unchanged and nothing
    /// was reparsed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.parsed = parse_collection(&text);
        self.text = text;
        true
    }
}

impl<T> TextBuffer<T> {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed collection, or `None` while the text is invalid.
    pub fn parsed(&self) -> Option<&[T]> {
        self.parsed.as_deref().ok()
    }

    pub fn fault(&self) -> Option<&ParseFault> {
        self.parsed.as_ref().err()
    }

    /// "2 aircraft loaded" / "Invalid JSON"
    pub fn status_line(&self, noun: &str) -> String {
        match self.parsed() {
            Some(items) => format!("{} {} loaded", items.len(), noun),
            None => "Invalid JSON".to_string(),
        }
    }
}

/// Built-in scenarios that can be loaded into the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioSample {
    TinySample,
    CoastToCoast,
    MultiLegShuttle,
    EuropeTour,
    BusyFleet,
}

impl ScenarioSample {
    pub const ALL: [ScenarioSample; 5] = [
        ScenarioSample::TinySample,
        ScenarioSample::CoastToCoast,
        ScenarioSample::MultiLegShuttle,
        ScenarioSample::EuropeTour,
        ScenarioSample::BusyFleet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScenarioSample::TinySample => "Tiny Sample",
            ScenarioSample::CoastToCoast => "Coast to Coast",
            ScenarioSample::MultiLegShuttle => "Multi-Leg Shuttle",
            ScenarioSample::EuropeTour => "Europe Tour",
            ScenarioSample::BusyFleet => "Busy Fleet",
        }
    }

    /// Kebab-case name, e.g. "coast-to-coast".
    pub fn slug(self) -> &'static str {
        match self {
            ScenarioSample::TinySample => "tiny-sample",
            ScenarioSample::CoastToCoast => "coast-to-coast",
            ScenarioSample::MultiLegShuttle => "multi-leg-shuttle",
            ScenarioSample::EuropeTour => "europe-tour",
            ScenarioSample::BusyFleet => "busy-fleet",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ScenarioSample> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    pub fn aircraft_json(self) -> &'static str {
        match self {
            ScenarioSample::TinySample => include_str!("../../fixtures/samples/tiny_sample/aircraft.json"),
            ScenarioSample::CoastToCoast => include_str!("../../fixtures/samples/coast_to_coast/aircraft.json"),
            ScenarioSample::MultiLegShuttle => include_str!("../../fixtures/samples/multi_leg_shuttle/aircraft.json"),
            ScenarioSample::EuropeTour => include_str!("../../fixtures/samples/europe_tour/aircraft.json"),
            ScenarioSample::BusyFleet => include_str!("../../fixtures/samples/busy_fleet/aircraft.json"),
        }
    }

    pub fn legs_json(self) -> &'static str {
        match self {
            ScenarioSample::TinySample => include_str!("../../fixtures/samples/tiny_sample/legs.json"),
            ScenarioSample::CoastToCoast => include_str!("../../fixtures/samples/coast_to_coast/legs.json"),
            ScenarioSample::MultiLegShuttle => include_str!("../../fixtures/samples/multi_leg_shuttle/legs.json"),
            ScenarioSample::EuropeTour => include_str!("../../fixtures/samples/europe_tour/legs.json"),
            ScenarioSample::BusyFleet => include_str!("../../fixtures/samples/busy_fleet/legs.json"),
        }
    }
}

const DEFAULT_AIRCRAFT: &str = include_str!("../../fixtures/samples/default/aircraft.json");
const DEFAULT_LEGS: &str = include_str!("../../fixtures/samples/default/legs.json");

/// The two optimizer buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioEditor {
    pub aircraft: TextBuffer<OptimizerAircraft>,
    pub legs: TextBuffer<OptimizerLeg>,
}

impl Default for ScenarioEditor {
    fn default() -> Self {
        Self::new(DEFAULT_AIRCRAFT, DEFAULT_LEGS)
    }
}

impl ScenarioEditor {
    pub fn new(aircraft: &str, legs: &str) -> Self {
        Self {
            aircraft: TextBuffer::new(aircraft),
            legs: TextBuffer::new(legs),
        }
    }

    pub fn set_aircraft_text(&mut self, text: impl Into<String>) -> bool {
        self.aircraft.set_text(text)
    }

    pub fn set_legs_text(&mut self, text: impl Into<String>) -> bool {
        self.legs.set_text(text)
    }

    pub fn load_sample(&mut self, sample: ScenarioSample) {
        self.set_aircraft_text(sample.aircraft_json());
        self.set_legs_text(sample.legs_json());
    }

    /// Both collections, only when both buffers parse.
    pub fn submission(&self) -> Option<(&[OptimizerAircraft], &[OptimizerLeg])> {
        Some((self.aircraft.parsed()?, self.legs.parsed()?))
    }

    /// Whether the run action is enabled.
    pub fn can_run(&self) -> bool {
        self.submission().is_some()
    }
}
