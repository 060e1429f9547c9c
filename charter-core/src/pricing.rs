//! Request and response shapes for the `/price` and `/price-ml` endpoints.
//!
//! Both endpoints take the same [`PriceRequest`]. The ML variant answers with
//! the same [`PriceResult`] plus the two `ml_*` fields. Every leaf of the
//! result is optional and decoded through [`lenient`], so a partial or oddly
//! typed body still deserializes; consumers decide how to show what is
//! missing.

use crate::lenient;
use serde::{Deserialize, Serialize};

/// Snapshot of the pricing inputs sent to the backend.
///
/// Built once at submit time and never mutated. The same value (and the same
/// serialized bytes) is reused for the PDF quote.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PriceRequest {
    pub depart_icao: String,
    pub arrive_icao: String,
    pub jet_model: String,
    /// Headwind positive, tailwind negative
    pub avg_wind_kts: f64,
    pub margin_pct: f64,
    pub taxi_min: f64,
    pub reposition_nm: f64,
    pub oat_c_depart: f64,
    pub oat_c_arrive: f64,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSummary {
    #[serde(deserialize_with = "lenient::text")]
    pub depart: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub arrive: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub distance_nm: Option<f64>,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftSummary {
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub speed_kts: Option<f64>,
}

/// Density altitude at each end of the route, in feet.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityAltitude {
    #[serde(deserialize_with = "lenient::number")]
    pub depart: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub arrive: Option<f64>,
}

/// Inputs as the backend understood them, plus derived performance figures.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    #[serde(deserialize_with = "lenient::number")]
    pub avg_wind_kts: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub taxi_min: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub reposition_nm: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub margin_pct: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub oat_c_depart: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub oat_c_arrive: Option<f64>,
    #[serde(deserialize_with = "lenient::group")]
    pub density_altitude_ft: Option<DensityAltitude>,
    #[serde(deserialize_with = "lenient::number")]
    pub required_runway_ft: Option<f64>,
}

/// Block time breakdown in hours.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTime {
    #[serde(deserialize_with = "lenient::number")]
    pub air_time_hr: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub taxi_hr: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub block_hr: Option<f64>,
}

/// Cost build-up in USD.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Costs {
    /// Direct operating cost for the block time
    #[serde(deserialize_with = "lenient::number")]
    pub doc_total: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub airport_fees: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub fuel_surcharge: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub cost_basis: Option<f64>,
}

/// Response body of `/price` and `/price-ml`.
///
/// A body carrying `error` is a failure even when it arrived with a 2xx status.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceResult {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::text")]
    pub error: Option<String>,
    #[serde(deserialize_with = "lenient::group")]
    pub route: Option<RouteSummary>,
    #[serde(deserialize_with = "lenient::group")]
    pub aircraft: Option<AircraftSummary>,
    #[serde(deserialize_with = "lenient::group")]
    pub assumptions: Option<Assumptions>,
    #[serde(deserialize_with = "lenient::group")]
    pub time: Option<FlightTime>,
    #[serde(deserialize_with = "lenient::group")]
    pub costs: Option<Costs>,
    #[serde(deserialize_with = "lenient::number")]
    pub sell_price_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::number")]
    pub ml_prediction_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::number")]
    pub ml_delta_usd: Option<f64>,
}

/// The ML-augmented part of a [`PriceResult`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct MlComparison {
    pub prediction_usd: Option<f64>,
    pub delta_usd: Option<f64>,
}

impl PriceResult {
    /// The body-level error, if the backend reported one.
    pub fn domain_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// ML fields, present only on responses from the ML endpoint.
    pub fn ml(&self) -> Option<MlComparison> {
        if self.ml_prediction_usd.is_none() && self.ml_delta_usd.is_none() {
            return None;
        }
        Some(MlComparison {
            prediction_usd: self.ml_prediction_usd,
            delta_usd: self.ml_delta_usd,
        })
    }
}

/// Response body of `/ml/train`.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingSummary {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::text")]
    pub error: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub samples: Option<f64>,
    #[serde(deserialize_with = "lenient::numbers")]
    pub coef: Vec<Option<f64>>,
    #[serde(deserialize_with = "lenient::number")]
    pub intercept: Option<f64>,
}
