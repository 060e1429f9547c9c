//! Command implementations for the charter CLI.
//!
//! Subcommands price a single trip, run the fleet optimizer, inspect the
//! catalog, retrain the ML model and serve the local proxy.

use charter_core::routes::{Endpoints, RouteSet};
use charter_core::transport::TransportClient;
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod catalog;
pub mod optimize;
pub mod price;
pub mod serve;
pub mod train;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";
pub const DEFAULT_BACKEND_BASE: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

/// Where requests go.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Base address of the local proxy, or of the backend with --direct
    #[arg(long, env = "CHARTER_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// Call the backend routes (/catalog, /price, ...) instead of /api/*
    #[arg(long, global = true)]
    pub direct: bool,
}

impl ConnectionArgs {
    pub fn route_set(&self) -> RouteSet {
        if self.direct {
            RouteSet::Backend
        } else {
            RouteSet::Local
        }
    }

    pub fn client(&self) -> TransportClient {
        TransportClient::new(Endpoints::new(&self.api_base, self.route_set()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List airports and the jet models per category
    Catalog,

    /// Price a single trip
    Price(price::PriceArgs),

    /// Assign legs to aircraft with the fleet optimizer
    Optimize {
        /// Aircraft JSON file, e.g. [{"tail":"N100","position":"KTEB"}]
        #[arg(long)]
        aircraft: Option<PathBuf>,

        /// Legs JSON file, e.g. [{"id":"A","start":"KTEB","end":"KBOS"}]
        #[arg(long)]
        legs: Option<PathBuf>,

        /// Built-in scenario (tiny-sample, coast-to-coast, multi-leg-shuttle,
        /// europe-tour, busy-fleet); files override its buffers
        #[arg(long)]
        sample: Option<String>,

        /// Also print the raw optimizer response
        #[arg(long)]
        raw: bool,
    },

    /// Retrain the price prediction model on synthetic data
    TrainModel,

    /// Serve the local /api routes in front of the backend
    Serve {
        /// Listen address
        #[arg(long, default_value = DEFAULT_LISTEN)]
        listen: String,

        /// Backend base address
        #[arg(long, env = "CHARTER_BACKEND_BASE", default_value = DEFAULT_BACKEND_BASE)]
        backend: String,
    },
}

pub async fn run(connection: ConnectionArgs, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Catalog => catalog::run_catalog(&connection.client()).await,
        Command::Price(args) => price::run_price(&connection.client(), args).await,
        Command::Optimize {
            aircraft,
            legs,
            sample,
            raw,
        } => {
            optimize::run_optimize(
                &connection.client(),
                aircraft.as_deref(),
                legs.as_deref(),
                sample.as_deref(),
                raw,
            )
            .await
        }
        Command::TrainModel => train::run_train(&connection.client()).await,
        Command::Serve { listen, backend } => serve::run_serve(&listen, &backend).await,
    }
}
