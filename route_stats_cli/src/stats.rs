use std::path::PathBuf;

use clap::Args;
use route_stats::{ElevationProfile, RouteResponse, StatsConfig, compute_stats};
use tracing::{debug, info};

use crate::{file_utils::read_json, print::print_stats};

pub const LANGUAGE_ENV: &str = "ROUTE_STATS_LANGUAGE";

#[derive(Args)]
pub struct StatsArgs {
    /// GraphHopper route response
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Elevation profile file with `sumUp` and `sumDown`
    #[arg(short, long, conflicts_with_all = ["sum_up", "sum_down"])]
    elevation: Option<PathBuf>,

    /// Cumulated ascent in meters
    #[arg(long, requires = "sum_down")]
    sum_up: Option<f64>,

    /// Cumulated descent in meters
    #[arg(long, requires = "sum_up")]
    sum_down: Option<f64>,

    /// Stats config (language, speed profiles, mergeable road classes)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language of the warning messages, overrides the config and
    /// ROUTE_STATS_LANGUAGE
    #[arg(short, long)]
    language: Option<String>,

    /// Vehicle id, overrides the one of the response
    #[arg(long)]
    vehicle: Option<String>,

    /// Print the stats as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl StatsArgs {
    fn elevation_profile(&self) -> Result<Option<ElevationProfile>, anyhow::Error> {
        if let Some(path) = &self.elevation {
            return Ok(Some(read_json(path)?));
        }

        Ok(match (self.sum_up, self.sum_down) {
            (Some(sum_up), Some(sum_down)) => Some(ElevationProfile { sum_up, sum_down }),
            _ => None,
        })
    }

    fn stats_config(&self) -> Result<StatsConfig, anyhow::Error> {
        let config = match &self.config {
            Some(path) => StatsConfig::from_json_file(path)?,
            None => StatsConfig::default(),
        };

        let language = self
            .language
            .clone()
            .or_else(|| std::env::var(LANGUAGE_ENV).ok());

        Ok(match language {
            Some(language) => config.with_language(language),
            None => config,
        })
    }
}

pub fn run(args: StatsArgs) -> Result<(), anyhow::Error> {
    let config = args.stats_config()?;
    let elevation = args.elevation_profile()?;

    let mut response: RouteResponse = read_json(&args.input)?;
    if let Some(vehicle) = &args.vehicle {
        response.vehicle = vehicle.clone();
    }

    debug!(
        input = ?args.input,
        vehicle = %response.vehicle,
        language = %config.language,
        "Computing route stats"
    );

    let stats = compute_stats(&response, elevation.as_ref(), &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }

    info!(
        "Finished: distance = {} m, warnings = {}",
        stats.dist,
        stats.warnings.len()
    );

    Ok(())
}
