//! Charter CLI - price trips, optimize fleet assignments and serve the local API.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "charter-cli",
    version,
    about = "Charter flight pricing and fleet optimization toolkit"
)]
struct Cli {
    #[command(flatten)]
    connection: charter_cmd::ConnectionArgs,

    #[command(subcommand)]
    command: charter_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!(
        "api base {} ({:?} routes)",
        cli.connection.api_base,
        cli.connection.route_set()
    );
    charter_cmd::run(cli.connection, cli.command).await
}
