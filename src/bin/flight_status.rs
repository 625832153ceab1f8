use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn};

use skyboard::VERSION;
use skyboard::config::ClientConfig;
use skyboard::flight::{FlightApi, FlightEvent, FlightStatusPage};
use skyboard::http::ReqwestClient;
use skyboard::logging::init_logging;
use skyboard::render::MemoryTarget;

/// Loads the flight-status page, optionally searches one flight, and prints
/// what it shows.
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Flight code to search for, as typed into the search box
    #[arg(long)]
    code: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = ClientConfig::load(args.config.as_deref())?;
    init_logging(&config.log_dir, "flight-status.log");
    rust_i18n::set_locale(&config.locale);
    info!(version = VERSION, api = %config.flight_api_url, "Starting flight-status page.");

    let api = FlightApi::new(Arc::new(ReqwestClient::new()), config.flight_api_url.clone());
    let mut page = FlightStatusPage::new(api, MemoryTarget::new())?;

    if let Err(e) = page.init().await {
        warn!(error = %e, "Flight list not loaded.");
    }
    if let Some(input) = args.code {
        if let Err(e) = page.handle(FlightEvent::SearchClicked { input }).await {
            warn!(error = %e, "Flight search failed.");
        }
    }

    print!("{}", page.target());
    Ok(())
}
