#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the incident watch toolchain.
//!
//! Pulls incident reports from a running incident service (or a saved JSON
//! payload), normalizes them, and either prints them, filters them to a
//! radius around a point, or produces the dashboard summary counts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use incident_watch_api::ApiClient;
use incident_watch_incident_models::NormalizedIncident;
use incident_watch_normalize::normalize_payload;
use incident_watch_spatial::{Coordinate, filter_by_proximity};

#[derive(Parser)]
#[command(name = "incident_watch", about = "Citizen incident report tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and normalize incidents from a running incident service
    Fetch {
        /// Base URL of the incident service (e.g., `http://localhost:8000`)
        #[arg(long)]
        url: String,
        /// Bearer token for authenticated endpoints
        #[arg(long)]
        token: Option<String>,
        /// Fetch the station-wide feed instead of the public one
        #[arg(long)]
        station: bool,
    },
    /// Filter incidents to those within a radius of a point
    Nearby {
        /// Latitude of the reference point, degrees
        #[arg(long)]
        lat: f64,
        /// Longitude of the reference point, degrees
        #[arg(long)]
        lng: f64,
        /// Radius in kilometers
        #[arg(long, default_value = "10")]
        radius_km: f64,
        /// Read a saved JSON payload instead of fetching
        #[arg(long, conflicts_with = "url")]
        input: Option<PathBuf>,
        /// Base URL of the incident service to fetch from
        #[arg(long)]
        url: Option<String>,
        /// Bearer token for authenticated endpoints
        #[arg(long)]
        token: Option<String>,
    },
    /// Print dashboard summary counts for an incident set
    Summary {
        /// Read a saved JSON payload instead of fetching
        #[arg(long, conflicts_with = "url")]
        input: Option<PathBuf>,
        /// Base URL of the incident service to fetch from
        #[arg(long)]
        url: Option<String>,
        /// Bearer token for authenticated endpoints
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            url,
            token,
            station,
        } => {
            let client = ApiClient::new(url, token);
            let incidents = if station {
                client.all_station_incidents().await?
            } else {
                client.latest_incidents().await?
            };

            println!("{}", serde_json::to_string_pretty(&incidents)?);
        }
        Commands::Nearby {
            lat,
            lng,
            radius_km,
            input,
            url,
            token,
        } => {
            let center = Coordinate::new(lat, lng);
            if !center.is_valid() {
                return Err(format!("invalid center coordinate ({lat}, {lng})").into());
            }

            let incidents = load_incidents(input, url, token).await?;
            let nearby = filter_by_proximity(center, radius_km, &incidents);
            log::info!(
                "{} of {} incidents within {radius_km} km",
                nearby.len(),
                incidents.len()
            );

            println!("{}", serde_json::to_string_pretty(&nearby)?);
        }
        Commands::Summary { input, url, token } => {
            let incidents = load_incidents(input, url, token).await?;
            let summary = incident_watch_analytics::summarize(&incidents);
            let by_category = incident_watch_analytics::counts_by_category(&incidents);

            println!("{}", serde_json::to_string_pretty(&summary)?);
            println!("{}", serde_json::to_string_pretty(&by_category)?);
        }
    }

    Ok(())
}

/// Loads incidents from a saved payload file or by fetching the service's
/// recent-incidents feed.
async fn load_incidents(
    input: Option<PathBuf>,
    url: Option<String>,
    token: Option<String>,
) -> Result<Vec<NormalizedIncident>, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        let data = std::fs::read_to_string(&path)?;
        let payload = serde_json::from_str(&data)?;
        return Ok(normalize_payload(&payload));
    }

    let Some(url) = url else {
        return Err("either --input or --url is required".into());
    };

    Ok(ApiClient::new(url, token).latest_incidents().await?)
}
