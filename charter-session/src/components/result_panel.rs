//! Display model for a price quote.
//!
//! Every figure comes straight from the response. Missing groups and
//! missing or NaN numbers render as the placeholder glyph; nothing here can
//! fail.

use super::ml_badge::MlBadge;
use charter_core::pricing::PriceResult;
use charter_utils::format::{format_decimal, format_whole, PLACEHOLDER};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceView {
    /// "model • category"
    pub heading: String,
    pub badge: Option<MlBadge>,
    /// "KTEB → KMIA • 949 nm"
    pub route: String,
    /// "Block: 2.93 h (Air 2.26 + Taxi 0.67)"
    pub block: String,
    /// Density altitude and runway requirement, when the backend sent them
    pub performance: Option<String>,
    /// Labelled cost lines
    pub costs: Vec<(&'static str, String)>,
    /// "$12,408"
    pub total: String,
    /// "ML Pred: $12,011.54"
    pub ml_prediction: Option<String>,
}

fn text(value: Option<&String>) -> &str {
    value.map(String::as_str).unwrap_or(PLACEHOLDER)
}

fn usd(value: Option<f64>) -> String {
    format!("${}", format_decimal(value))
}

impl PriceView {
    pub fn from_result(result: &PriceResult) -> PriceView {
        let aircraft = result.aircraft.as_ref();
        let route = result.route.as_ref();
        let time = result.time.as_ref();
        let assumptions = result.assumptions.as_ref();
        let costs = result.costs.as_ref();

        let heading = format!(
            "{} • {}",
            text(aircraft.and_then(|a| a.model.as_ref())),
            text(aircraft.and_then(|a| a.category.as_ref()))
        );
        let route_line = format!(
            "{} → {} • {} nm",
            text(route.and_then(|r| r.depart.as_ref())),
            text(route.and_then(|r| r.arrive.as_ref())),
            format_whole(route.and_then(|r| r.distance_nm))
        );
        let block = format!(
            "Block: {} h (Air {} + Taxi {})",
            format_decimal(time.and_then(|t| t.block_hr)),
            format_decimal(time.and_then(|t| t.air_time_hr)),
            format_decimal(time.and_then(|t| t.taxi_hr))
        );

        let mut performance_parts = Vec::new();
        if let Some(da) = assumptions.and_then(|a| a.density_altitude_ft.as_ref()) {
            performance_parts.push(format!(
                "DA: dep {} ft, arr {} ft",
                format_whole(da.depart),
                format_whole(da.arrive)
            ));
        }
        if let Some(required) = assumptions.and_then(|a| a.required_runway_ft) {
            performance_parts.push(format!("Req RWY ~ {} ft", format_whole(Some(required))));
        }
        let performance = if performance_parts.is_empty() {
            None
        } else {
            Some(performance_parts.join(" • "))
        };

        let mut cost_lines = vec![
            ("DOC Total", usd(costs.and_then(|c| c.doc_total))),
            ("Airport Fees", usd(costs.and_then(|c| c.airport_fees))),
        ];
        if let Some(surcharge) = costs.and_then(|c| c.fuel_surcharge) {
            cost_lines.push(("Fuel Surcharge", usd(Some(surcharge))));
        }
        cost_lines.push(("Cost Basis", usd(costs.and_then(|c| c.cost_basis))));
        cost_lines.push((
            "Margin",
            format!("{}%", format_decimal(assumptions.and_then(|a| a.margin_pct))),
        ));

        PriceView {
            heading,
            badge: MlBadge::from_delta(result.ml_delta_usd),
            route: route_line,
            block,
            performance,
            costs: cost_lines,
            total: usd(result.sell_price_usd),
            ml_prediction: result
                .ml_prediction_usd
                .map(|p| format!("ML Pred: {}", usd(Some(p)))),
        }
    }
}

impl fmt::Display for PriceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.badge {
            Some(badge) => writeln!(f, "{}  {}", self.heading, badge)?,
            None => writeln!(f, "{}", self.heading)?,
        }
        writeln!(f, "{}", self.route)?;
        writeln!(f, "{}", self.block)?;
        if let Some(performance) = &self.performance {
            writeln!(f, "{}", performance)?;
        }
        for (label, value) in &self.costs {
            writeln!(f, "  {}: {}", label, value)?;
        }
        write!(f, "Total Price: {}", self.total)?;
        if let Some(prediction) = &self.ml_prediction {
            write!(f, "\n{}", prediction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ml_badge::BadgeTone;

    fn full_result() -> PriceResult {
        serde_json::from_str(
            r#"{
                "route": {"depart": "KTEB", "arrive": "KMIA", "distance_nm": 949.3},
                "aircraft": {"category": "Light", "model": "Phenom 300", "speed_kts": 430},
                "assumptions": {
                    "avg_wind_kts": 0, "taxi_min": 20, "reposition_nm": 0, "margin_pct": 20,
                    "density_altitude_ft": {"depart": 12, "arrive": 2210},
                    "required_runway_ft": 3590
                },
                "time": {"air_time_hr": 2.26, "taxi_hr": 0.67, "block_hr": 2.93},
                "costs": {"doc_total": 8790.0, "airport_fees": 1550, "cost_basis": 10340.0},
                "sell_price_usd": 12408.0,
                "ml_prediction_usd": 12011.54,
                "ml_delta_usd": 396.46
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn renders_full_ml_result() {
        let view = PriceView::from_result(&full_result());
        assert_eq!(view.heading, "Phenom 300 • Light");
        assert_eq!(view.route, "KTEB → KMIA • 949 nm");
        assert_eq!(view.block, "Block: 2.93 h (Air 2.26 + Taxi 0.67)");
        assert_eq!(
            view.performance.as_deref(),
            Some("DA: dep 12 ft, arr 2,210 ft • Req RWY ~ 3,590 ft")
        );
        assert_eq!(view.costs[0], ("DOC Total", "$8,790".to_string()));
        assert_eq!(view.costs.last().unwrap(), &("Margin", "20%".to_string()));
        assert_eq!(view.total, "$12,408");
        assert_eq!(view.ml_prediction.as_deref(), Some("ML Pred: $12,011.54"));
        assert_eq!(view.badge.unwrap().tone, BadgeTone::Positive);
    }

    #[test]
    fn rule_based_result_has_no_ml_sections() {
        let mut result = full_result();
        result.ml_prediction_usd = None;
        result.ml_delta_usd = None;
        let view = PriceView::from_result(&result);
        assert!(view.badge.is_none());
        assert!(view.ml_prediction.is_none());
        assert!(!view.to_string().contains("ML"));
    }

    #[test]
    fn empty_result_renders_placeholders() {
        let view = PriceView::from_result(&PriceResult::default());
        assert_eq!(view.heading, "— • —");
        assert_eq!(view.route, "— → — • — nm");
        assert_eq!(view.total, "$—");
        assert!(view.performance.is_none());
        assert!(view.costs.iter().all(|(_, v)| v.contains('—')));
    }

    #[test]
    fn fuel_surcharge_only_when_present() {
        let mut result = full_result();
        let view = PriceView::from_result(&result);
        assert!(!view.costs.iter().any(|(label, _)| *label == "Fuel Surcharge"));

        result.costs.as_mut().unwrap().fuel_surcharge = Some(420.5);
        let view = PriceView::from_result(&result);
        assert!(view
            .costs
            .contains(&("Fuel Surcharge", "$420.5".to_string())));
    }

    #[test]
    fn runway_requirement_without_density_altitude() {
        let mut result = full_result();
        result.assumptions.as_mut().unwrap().density_altitude_ft = None;
        let view = PriceView::from_result(&result);
        assert_eq!(view.performance.as_deref(), Some("Req RWY ~ 3,590 ft"));
    }
}
