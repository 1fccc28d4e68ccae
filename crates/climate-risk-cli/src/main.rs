mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::hazard::HazardsArgs;
use commands::portfolio::PortfolioArgs;
use commands::scenario::{ProjectZoneArgs, ScenarioArgs};
use commands::weather::{AssessRegionArgs, WeatherRiskArgs};

/// Climate physical-risk analytics for mortgage portfolios
#[derive(Parser)]
#[command(
    name = "cra",
    version,
    about = "Climate physical-risk analytics for mortgage portfolios",
    long_about = "A CLI for weather-driven risk scoring, climate scenario projection, \
                  and portfolio aggregation with decimal precision. Scores individual \
                  properties, assesses regional loan books, and runs forward-looking \
                  hazard scenarios over the risk-zone reference set."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score weather-driven risk for a single property
    WeatherRisk(WeatherRiskArgs),
    /// Assess a region's loan book under current conditions
    AssessRegion(AssessRegionArgs),
    /// Run a hazard scenario analysis over the risk zones
    Scenario(ScenarioArgs),
    /// Project a single risk zone to a future timeframe
    ProjectZone(ProjectZoneArgs),
    /// List hazard types, regions, zones, or historical events
    Hazards(HazardsArgs),
    /// Summarize the loan book
    Portfolio(PortfolioArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::WeatherRisk(args) => commands::weather::run_weather_risk(args),
        Commands::AssessRegion(args) => commands::weather::run_assess_region(args),
        Commands::Scenario(args) => commands::scenario::run_scenario(args),
        Commands::ProjectZone(args) => commands::scenario::run_project_zone(args),
        Commands::Hazards(args) => commands::hazard::run_hazards(args),
        Commands::Portfolio(args) => commands::portfolio::run_portfolio(args),
        Commands::Version => {
            println!("cra {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
