//! Catalog listing.

use charter_core::catalog::Catalog;
use charter_core::routes::Route;
use charter_core::transport::TransportClient;
use charter_utils::format::format_whole;
use log::{info, warn};

pub async fn run_catalog(client: &TransportClient) -> anyhow::Result<()> {
    let catalog: Catalog = client.get_json(Route::Catalog).await?;
    info!(
        "Catalog has {} airports and {} jets",
        catalog.airports.len(),
        catalog.jets.len()
    );
    let ambiguous = catalog.ambiguous_models();
    if !ambiguous.is_empty() {
        warn!("Models listed under several categories: {:?}", ambiguous);
    }
    print!("{}", render(&catalog));
    Ok(())
}

fn render(catalog: &Catalog) -> String {
    let mut out = String::from("Airports\n");
    for airport in &catalog.airports {
        out.push_str(&format!(
            "  {:<6} fees ${:>7}  runway {:>7} ft\n",
            airport.icao,
            format_whole(Some(airport.fees)),
            format_whole(Some(airport.runway_length_ft))
        ));
    }
    out.push_str("Jets\n");
    let index = catalog.category_index();
    for category in index.categories() {
        let models = index.models(category).unwrap_or(&[]);
        out.push_str(&format!("  {}: {}\n", category, models.join(", ")));
    }
    out
}
