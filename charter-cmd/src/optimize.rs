//! Fleet optimizer run.

use anyhow::{anyhow, bail, Context};
use charter_core::transport::TransportClient;
use charter_session::editor::ScenarioSample;
use charter_session::request_state::RequestState;
use charter_session::state::OpsSession;
use log::info;
use std::fs;
use std::path::Path;

fn sample(slug: &str) -> anyhow::Result<ScenarioSample> {
    ScenarioSample::from_slug(slug).ok_or_else(|| {
        let known: Vec<&str> = ScenarioSample::ALL.iter().map(|s| s.slug()).collect();
        anyhow!("unknown sample {:?}, expected one of {}", slug, known.join(", "))
    })
}

/// Fill the editor buffers from a sample and/or files.
pub fn prepare(
    aircraft: Option<&Path>,
    legs: Option<&Path>,
    sample_slug: Option<&str>,
) -> anyhow::Result<OpsSession> {
    let mut ops = OpsSession::new();
    if let Some(slug) = sample_slug {
        ops.load_sample(sample(slug)?);
    }
    if let Some(path) = aircraft {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        ops.editor.set_aircraft_text(text);
    }
    if let Some(path) = legs {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        ops.editor.set_legs_text(text);
    }
    Ok(ops)
}

pub async fn run_optimize(
    client: &TransportClient,
    aircraft: Option<&Path>,
    legs: Option<&Path>,
    sample_slug: Option<&str>,
    raw: bool,
) -> anyhow::Result<()> {
    let mut ops = prepare(aircraft, legs, sample_slug)?;
    let aircraft_status = ops.editor.aircraft.status_line("aircraft");
    let legs_status = ops.editor.legs.status_line("legs");
    info!("{}; {}", aircraft_status, legs_status);
    if !ops.can_run() {
        let fault = ops
            .editor
            .aircraft
            .fault()
            .map(|f| format!("aircraft: {}", f))
            .or_else(|| ops.editor.legs.fault().map(|f| format!("legs: {}", f)))
            .unwrap_or_default();
        bail!("scenario is not valid JSON ({})", fault);
    }

    if let RequestState::Failed(message) = ops.run(client).await? {
        bail!("{}", message);
    }
    if let Some(view) = ops.assignment_view() {
        println!("{}", view);
        if raw {
            println!("{}", view.raw_json);
        }
    }
    Ok(())
}
