//! Single-trip pricing and PDF export.

use anyhow::{anyhow, bail};
use charter_core::transport::TransportClient;
use charter_session::components::margin_chips::chip_label;
use charter_session::components::slider_field::{
    AVG_WIND, MARGIN, OAT_ARRIVE, OAT_DEPART, REPOSITION, TAXI,
};
use charter_session::components::{ErrorDisplay, MARGIN_PRESETS};
use charter_session::export::{ArtifactViewer, NoPreview, SystemViewer};
use charter_session::request_state::RequestState;
use charter_session::scenario::PricingScenario;
use charter_session::state::CalculatorSession;
use charter_utils::format::format_decimal;
use clap::Args;
use log::info;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct PriceArgs {
    /// Departure ICAO
    #[arg(long)]
    pub depart: Option<String>,

    /// Arrival ICAO
    #[arg(long)]
    pub arrive: Option<String>,

    /// Jet category; the model follows it unless --model names one of its jets
    #[arg(long)]
    pub category: Option<String>,

    /// Jet model
    #[arg(long)]
    pub model: Option<String>,

    /// Average wind in knots, headwind positive (-50..50)
    #[arg(long, allow_hyphen_values = true)]
    pub wind: Option<f64>,

    /// Margin in percent (0..60)
    #[arg(long, conflicts_with = "margin_preset")]
    pub margin: Option<f64>,

    /// One of the preset margins: 15, 25 or 35
    #[arg(long)]
    pub margin_preset: Option<f64>,

    /// Taxi minutes (0..40, step 5)
    #[arg(long)]
    pub taxi: Option<f64>,

    /// Reposition distance in nm (0..500, step 10)
    #[arg(long)]
    pub reposition: Option<f64>,

    /// Outside air temperature at departure, °C (-10..45)
    #[arg(long, allow_hyphen_values = true)]
    pub oat_depart: Option<f64>,

    /// Outside air temperature at arrival, °C (-10..45)
    #[arg(long, allow_hyphen_values = true)]
    pub oat_arrive: Option<f64>,

    /// Use the rule-based price only
    #[arg(long)]
    pub no_ml: bool,

    /// Save the PDF quote as quote.pdf in this directory
    #[arg(long)]
    pub pdf_dir: Option<PathBuf>,

    /// Open the PDF quote in the default viewer
    #[arg(long, requires = "pdf_dir")]
    pub preview: bool,
}

/// Position of a preset margin in [`MARGIN_PRESETS`].
fn preset_index(margin: f64) -> anyhow::Result<usize> {
    MARGIN_PRESETS
        .iter()
        .position(|p| *p == margin)
        .ok_or_else(|| anyhow!("margin preset must be one of {:?}", MARGIN_PRESETS))
}

/// Apply the command-line inputs to the session form.
pub fn apply_args(session: &mut CalculatorSession, args: &PriceArgs) -> anyhow::Result<()> {
    if let Some(depart) = &args.depart {
        session.set_depart(depart);
    }
    if let Some(arrive) = &args.arrive {
        session.set_arrive(arrive);
    }
    if let Some(category) = &args.category {
        session.select_category(category);
    }
    if let Some(model) = &args.model {
        session.select_model(model);
    }
    let preset = args.margin_preset.map(preset_index).transpose()?;
    session.adjust(|s: &mut PricingScenario| {
        if let Some(wind) = args.wind {
            s.set_avg_wind_kts(wind);
        }
        if let Some(margin) = args.margin {
            s.set_margin_pct(margin);
        }
        if let Some(index) = preset {
            s.apply_margin_preset(index);
        }
        if let Some(taxi) = args.taxi {
            s.set_taxi_min(taxi);
        }
        if let Some(reposition) = args.reposition {
            s.set_reposition_nm(reposition);
        }
        if let Some(oat) = args.oat_depart {
            s.set_oat_c_depart(oat);
        }
        if let Some(oat) = args.oat_arrive {
            s.set_oat_c_arrive(oat);
        }
    });
    session.set_use_ml(!args.no_ml);
    Ok(())
}

/// The inputs about to be priced, one line per slider.
pub fn render_inputs(scenario: &PricingScenario) -> String {
    let mut out = format!(
        "{} → {} • {} ({}) • {}\n",
        scenario.depart_icao,
        scenario.arrive_icao,
        scenario.jet_model,
        scenario.category,
        if scenario.use_ml { "ML" } else { "rules" }
    );
    let fields = [
        (AVG_WIND, scenario.avg_wind_kts()),
        (MARGIN, scenario.margin_pct()),
        (TAXI, scenario.taxi_min()),
        (REPOSITION, scenario.reposition_nm()),
        (OAT_DEPART, scenario.oat_c_depart()),
        (OAT_ARRIVE, scenario.oat_c_arrive()),
    ];
    for (field, value) in fields {
        out.push_str(&format!("  {}: {}", field.label, format_decimal(Some(value))));
        if field == MARGIN && MARGIN_PRESETS.contains(&value) {
            out.push_str(&format!(" [{}]", chip_label(value)));
        }
        out.push('\n');
    }
    out
}

pub async fn run_price(client: &TransportClient, args: PriceArgs) -> anyhow::Result<()> {
    let mut session = CalculatorSession::new();
    session.load_catalog(client).await;
    if let Some(message) = session.error_msg() {
        bail!("catalog unavailable: {}", message);
    }
    apply_args(&mut session, &args)?;

    let scenario = session.scenario();
    info!(
        "Pricing {} -> {} on {} ({})",
        scenario.depart_icao, scenario.arrive_icao, scenario.jet_model, scenario.category
    );
    print!("{}", render_inputs(scenario));
    if let RequestState::Failed(message) = session.calculate(client).await? {
        bail!("{}", message);
    }
    if let Some(view) = session.price_view() {
        println!("{}", view);
    }

    if let Some(dir) = &args.pdf_dir {
        let viewer: &dyn ArtifactViewer = if args.preview {
            &SystemViewer
        } else {
            &NoPreview
        };
        match session.export_pdf(client, dir, viewer).await? {
            RequestState::Success(path) => println!("Saved quote to {}", path.display()),
            RequestState::Failed(message) => eprintln!("{}", ErrorDisplay::new(message.as_str())),
            RequestState::Idle | RequestState::Submitting => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use charter_core::catalog::{Catalog, SAMPLE_CATALOG};

    fn session() -> CalculatorSession {
        let mut session = CalculatorSession::new();
        session.apply_catalog(Catalog::parse(SAMPLE_CATALOG).unwrap());
        session
    }

    #[test]
    fn args_are_applied_and_clamped() {
        let mut session = session();
        let args = PriceArgs {
            depart: Some("KLAS".to_string()),
            category: Some("Super-Mid".to_string()),
            wind: Some(-80.0),
            taxi: Some(12.0),
            no_ml: true,
            ..PriceArgs::default()
        };
        apply_args(&mut session, &args).unwrap();

        let s = session.scenario();
        assert_eq!(s.depart_icao, "KLAS");
        assert_eq!(s.arrive_icao, "KMIA");
        assert_eq!(s.jet_model, "Challenger 350");
        assert_eq!(s.avg_wind_kts(), -50.0);
        assert_eq!(s.taxi_min(), 10.0);
        assert!(!s.use_ml);
    }

    #[test]
    fn margin_preset_must_be_known() {
        let mut session = session();
        let args = PriceArgs {
            margin_preset: Some(25.0),
            ..PriceArgs::default()
        };
        apply_args(&mut session, &args).unwrap();
        assert_eq!(session.scenario().margin_pct(), 25.0);

        let args = PriceArgs {
            margin_preset: Some(22.0),
            ..PriceArgs::default()
        };
        assert!(apply_args(&mut session, &args).is_err());
    }

    #[test]
    fn inputs_mark_the_active_preset() {
        let mut session = session();
        session.adjust(|s| s.set_margin_pct(35.0));
        let text = render_inputs(session.scenario());
        assert!(text.starts_with("KTEB → KMIA • Phenom 300 (Light) • ML\n"));
        assert!(text.contains("  Margin %: 35 [35%]\n"));
        assert!(text.contains("  Avg Wind (kts): 0\n"));
    }
}
