//! Editable pricing inputs.

use crate::components::margin_chips::MARGIN_PRESETS;
use crate::components::slider_field::{AVG_WIND, MARGIN, OAT_ARRIVE, OAT_DEPART, REPOSITION, TAXI};
use charter_core::pricing::PriceRequest;

/// Mutable pricing form state.
///
/// `category` and `jet_model` are kept consistent by
/// [`Selection`](crate::selection::Selection); numeric inputs are clamped to
/// their slider ranges by the setters.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingScenario {
    pub depart_icao: String,
    pub arrive_icao: String,
    pub category: String,
    pub jet_model: String,
    avg_wind_kts: f64,
    margin_pct: f64,
    taxi_min: f64,
    reposition_nm: f64,
    oat_c_depart: f64,
    oat_c_arrive: f64,
    /// Dispatch to `/price-ml` instead of `/price`
    pub use_ml: bool,
}

impl Default for PricingScenario {
    fn default() -> Self {
        Self {
            depart_icao: "KTEB".to_string(),
            arrive_icao: "KMIA".to_string(),
            category: String::new(),
            jet_model: String::new(),
            avg_wind_kts: 0.0,
            margin_pct: 20.0,
            taxi_min: 20.0,
            reposition_nm: 0.0,
            oat_c_depart: 15.0,
            oat_c_arrive: 15.0,
            use_ml: true,
        }
    }
}

impl PricingScenario {
    pub fn avg_wind_kts(&self) -> f64 {
        self.avg_wind_kts
    }

    pub fn margin_pct(&self) -> f64 {
        self.margin_pct
    }

    pub fn taxi_min(&self) -> f64 {
        self.taxi_min
    }

    pub fn reposition_nm(&self) -> f64 {
        self.reposition_nm
    }

    pub fn oat_c_depart(&self) -> f64 {
        self.oat_c_depart
    }

    pub fn oat_c_arrive(&self) -> f64 {
        self.oat_c_arrive
    }

    pub fn set_avg_wind_kts(&mut self, value: f64) {
        self.avg_wind_kts = AVG_WIND.clamp(value);
    }

    pub fn set_margin_pct(&mut self, value: f64) {
        self.margin_pct = MARGIN.clamp(value);
    }

    /// Apply one of [`MARGIN_PRESETS`] by position. Out-of-range indexes are ignored.
    pub fn apply_margin_preset(&mut self, index: usize) -> bool {
        match MARGIN_PRESETS.get(index) {
            Some(preset) => {
                self.set_margin_pct(*preset);
                true
            }
            None => false,
        }
    }

    pub fn set_taxi_min(&mut self, value: f64) {
        self.taxi_min = TAXI.clamp(value);
    }

    pub fn set_reposition_nm(&mut self, value: f64) {
        self.reposition_nm = REPOSITION.clamp(value);
    }

    pub fn set_oat_c_depart(&mut self, value: f64) {
        self.oat_c_depart = OAT_DEPART.clamp(value);
    }

    pub fn set_oat_c_arrive(&mut self, value: f64) {
        self.oat_c_arrive = OAT_ARRIVE.clamp(value);
    }

    /// Immutable request payload for the current inputs.
    ///
    /// Independent of `use_ml`: both pricing modes send the same shape.
    pub fn snapshot(&self) -> PriceRequest {
        PriceRequest {
            depart_icao: self.depart_icao.clone(),
            arrive_icao: self.arrive_icao.clone(),
            jet_model: self.jet_model.clone(),
            avg_wind_kts: self.avg_wind_kts,
            margin_pct: self.margin_pct,
            taxi_min: self.taxi_min,
            reposition_nm: self.reposition_nm,
            oat_c_depart: self.oat_c_depart,
            oat_c_arrive: self.oat_c_arrive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let scenario = PricingScenario::default();
        assert_eq!(scenario.depart_icao, "KTEB");
        assert_eq!(scenario.arrive_icao, "KMIA");
        assert_eq!(scenario.margin_pct(), 20.0);
        assert_eq!(scenario.taxi_min(), 20.0);
        assert_eq!(scenario.oat_c_depart(), 15.0);
        assert!(scenario.use_ml);
    }

    #[test]
    fn setters_clamp_to_slider_ranges() {
        let mut scenario = PricingScenario::default();
        scenario.set_avg_wind_kts(75.0);
        scenario.set_taxi_min(22.0);
        scenario.set_reposition_nm(-10.0);
        scenario.set_oat_c_arrive(60.0);
        assert_eq!(scenario.avg_wind_kts(), 50.0);
        assert_eq!(scenario.taxi_min(), 20.0);
        assert_eq!(scenario.reposition_nm(), 0.0);
        assert_eq!(scenario.oat_c_arrive(), 45.0);
    }

    #[test]
    fn margin_presets() {
        let mut scenario = PricingScenario::default();
        assert!(scenario.apply_margin_preset(2));
        assert_eq!(scenario.margin_pct(), 35.0);
        assert!(!scenario.apply_margin_preset(3));
        assert_eq!(scenario.margin_pct(), 35.0);
    }

    #[test]
    fn snapshot_ignores_ml_mode() {
        let mut scenario = PricingScenario::default();
        scenario.jet_model = "Phenom 300".to_string();
        let with_ml = serde_json::to_vec(&scenario.snapshot()).unwrap();
        scenario.use_ml = false;
        let without_ml = serde_json::to_vec(&scenario.snapshot()).unwrap();
        assert_eq!(with_ml, without_ml);
    }
}
