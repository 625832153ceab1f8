use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn};

use skyboard::VERSION;
use skyboard::config::ClientConfig;
use skyboard::http::ReqwestClient;
use skyboard::logging::init_logging;
use skyboard::ordering::{OrderingApi, OrderingEvent, OrderingPage};
use skyboard::render::MemoryTarget;

/// Loads the snack ordering page for one seat and prints what it shows.
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Page URL carrying the seat, e.g. `index.html?assento=4`
    #[arg(long, conflicts_with = "seat")]
    page_url: Option<String>,

    /// Seat id, shorthand for `--page-url index.html?assento=<SEAT>`
    #[arg(short, long)]
    seat: Option<String>,

    /// Snack card to click after the page loads
    #[arg(long)]
    select: Option<String>,

    /// Press the order button
    #[arg(long)]
    order: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = ClientConfig::load(args.config.as_deref())?;
    init_logging(&config.log_dir, "ordering.log");
    rust_i18n::set_locale(&config.locale);
    info!(version = VERSION, api = %config.ordering_api_url, "Starting ordering page.");

    let page_url = match (args.page_url, args.seat) {
        (Some(url), _) => url,
        (None, Some(seat)) => format!("index.html?assento={}", urlencoding::encode(&seat)),
        (None, None) => "index.html".to_string(),
    };

    let api = OrderingApi::new(Arc::new(ReqwestClient::new()), config.ordering_api_url.clone());
    let mut page = OrderingPage::new(api, MemoryTarget::new(), &page_url)?;

    if let Err(e) = page.init().await {
        warn!(error = %e, "Page loaded with errors.");
    }
    if let Some(snack_id) = args.select {
        page.handle(OrderingEvent::CardClicked(snack_id)).await?;
    }
    if args.order {
        if let Err(e) = page.handle(OrderingEvent::OrderClicked).await {
            warn!(error = %e, "Order not placed.");
        }
    }

    print!("{}", page.target());
    Ok(())
}
