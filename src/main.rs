use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use hab_depot::cli::{Cli, print_versions};
use hab_depot::{DepotClient, DepotError};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match hab_depot::log::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            None
        }
    };

    let settings = cli.settings();
    info!(
        "Listing versions of {} from {} (timeout {:?})",
        cli.package, settings.base_url, settings.timeout
    );

    let depot = DepotClient::with_timeout(&settings.base_url, settings.timeout);
    let mut stdout = std::io::stdout().lock();

    match print_versions(&depot, &cli.package, cli.json, &mut stdout).await {
        Ok(()) => {
            let _ = stdout.flush();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to list versions of {}: {}", cli.package, e);
            match e.downcast_ref::<DepotError>() {
                Some(DepotError::NotFound(name)) => eprintln!("package not found: {}", name),
                _ => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
