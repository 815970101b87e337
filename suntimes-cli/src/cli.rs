use clap::{Parser, Subcommand};
use inquire::Text;
use suntimes_core::{Config, LocationIntent, NoDeviceService, SunTimesService};

use crate::render::ConsoleRenderer;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "suntimes", version, about = "Sunrise/sunset lookup CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show sun times for the device's current position.
    Here,

    /// Show sun times for a place name or address.
    Search {
        /// Location text, e.g. "Paris" or "1600 Pennsylvania Ave".
        /// Prompted for interactively when omitted.
        query: Option<String>,
    },

    /// Set the geocoding and sunrise/sunset endpoint URLs.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Here => lookup(LocationIntent::CurrentDevice).await,
            Command::Search { query } => {
                let query = match query {
                    Some(q) => q,
                    None => Text::new("Location to search for:").prompt()?,
                };
                lookup(LocationIntent::Text(query)).await
            }
            Command::Configure => configure(),
        }
    }
}

async fn lookup(intent: LocationIntent) -> anyhow::Result<()> {
    let config = Config::load()?;
    tracing::debug!(?intent, geocoder = %config.geocoding_url, "starting lookup");
    let service = SunTimesService::from_config(&config, Box::new(NoDeviceService));

    let mut renderer = ConsoleRenderer::new();
    service.run(&intent, &mut renderer).await;

    if renderer.failed() {
        std::process::exit(1);
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    config.geocoding_url = Text::new("Geocoding endpoint:")
        .with_initial_value(&config.geocoding_url)
        .prompt()?;

    config.day_info_url = Text::new("Sunrise/sunset endpoint:")
        .with_initial_value(&config.day_info_url)
        .prompt()?;

    config.save()?;
    println!("Saved to {}", Config::config_file_path()?.display());

    Ok(())
}
