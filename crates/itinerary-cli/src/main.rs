//! `itinerary`: finds the shortest 3-day plan for a location set and prints
//! it day by day.

use anyhow::{Context, Result};
use clap::Parser;
use itinerary_brute_force::{solve, SearchOptions};
use itinerary_cli::ItineraryReport;
use itinerary_core::ItineraryConfig;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "itinerary")]
#[command(about = "Exhaustive search for the shortest 3-day visiting itinerary under a daily time limit")]
#[command(version)]
struct Cli {
    /// JSON configuration bundle; the built-in Houston instance when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the daily time ceiling (hours)
    #[arg(long)]
    max_hours: Option<f64>,

    /// Override the average travel speed (km/h)
    #[arg(long)]
    speed: Option<f64>,

    /// Worker threads for the search
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Stop enumerating new split sizes after this many seconds
    #[arg(long)]
    deadline_secs: Option<f64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether an itinerary was found.
fn run(cli: &Cli) -> Result<bool> {
    let mut config = match &cli.config {
        Some(path) => ItineraryConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ItineraryConfig::houston(),
    };
    if let Some(hours) = cli.max_hours {
        config.max_hours_per_day = hours;
    }
    if let Some(speed) = cli.speed {
        config.average_speed_kmh = speed;
    }
    let model = config.build().context("invalid itinerary configuration")?;

    let mut options = SearchOptions::parallel(cli.workers);
    if let Some(secs) = cli.deadline_secs {
        let deadline = Duration::try_from_secs_f64(secs)
            .with_context(|| format!("invalid deadline {secs}"))?;
        options = options.with_deadline(deadline);
    }

    info!(
        "{} locations, {} free, {} h/day",
        model.len(),
        model.free_locations().len(),
        model.max_hours_per_day()
    );
    let outcome = solve(&model, &options);
    let report = ItineraryReport::new(&model, &outcome);

    if cli.json {
        println!("{}", report.to_json().context("serializing report")?);
    } else {
        if outcome.is_found() {
            println!("Best itinerary found:");
        }
        print!("{report}");
    }
    Ok(outcome.is_found())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "itinerary",
            "--max-hours",
            "11",
            "--workers",
            "4",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.max_hours, Some(11.0));
        assert_eq!(cli.workers, 4);
        assert!(cli.json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn run_reports_infeasible_with_tight_ceiling() {
        let cli = Cli::try_parse_from(["itinerary", "--max-hours", "1", "--json"]).unwrap();
        assert!(!run(&cli).unwrap());
    }

    #[test]
    fn run_rejects_invalid_speed() {
        let cli = Cli::try_parse_from(["itinerary", "--speed", "0"]).unwrap();
        assert!(run(&cli).is_err());
    }
}
