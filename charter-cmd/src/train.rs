//! ML model retraining.

use anyhow::bail;
use charter_core::pricing::TrainingSummary;
use charter_core::routes::Route;
use charter_core::transport::TransportClient;
use charter_utils::format::{format_decimal, format_fixed, PLACEHOLDER};
use log::info;
use serde_json::json;

pub async fn run_train(client: &TransportClient) -> anyhow::Result<()> {
    info!("Retraining price model");
    let summary: TrainingSummary = client.post_json(Route::MlTrain, &json!({})).await?;
    if let Some(message) = summary.error.as_deref() {
        bail!("{}", message);
    }
    println!("{}", render(&summary));
    Ok(())
}

fn render(summary: &TrainingSummary) -> String {
    let coefficients: Vec<String> = summary
        .coef
        .iter()
        .map(|c| c.map_or_else(|| PLACEHOLDER.to_string(), |c| format_fixed(c, 4)))
        .collect();
    format!(
        "Samples: {}\nIntercept: {}\nCoefficients: [{}]",
        format_decimal(summary.samples),
        format_decimal(summary.intercept),
        coefficients.join(", ")
    )
}
