//! merakictl - Main entry point

use clap::Parser;
use log::{debug, info};

use merakictl::{run_discover_command, run_vlan_command, Cli, Command, MerakiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting merakictl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: dashboard={}, output={}, quiet={}",
        cli.dashboard, cli.output, cli.quiet
    );

    let client = MerakiClient::new(cli.api_key, cli.dashboard);

    let result = match cli.command {
        Command::Discover { filter, timespan } => {
            run_discover_command(&client, filter, timespan, cli.output, cli.quiet).await
        }
        Command::Vlan { action } => run_vlan_command(&client, action, cli.output, cli.quiet).await,
    };

    if result.is_ok() {
        info!("Completed successfully");
    }
    result
}
