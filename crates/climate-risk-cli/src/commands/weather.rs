use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use climate_risk_core::portfolio::{assess_region, Loan};
use climate_risk_core::providers::{
    LoanProvider, StaticLoanBook, StaticWeatherProvider, WeatherProvider,
};
use climate_risk_core::weather::{score_weather_risk, WeatherObservation, WeatherRiskInput};

use crate::input;

/// Arguments for single-property weather-risk scoring
#[derive(Args)]
pub struct WeatherRiskArgs {
    /// Path to a JSON file with {observation, property_value}
    #[arg(long)]
    pub input: Option<String>,

    /// Use the built-in observation for a region (Miami, Houston, ...)
    #[arg(long)]
    pub region: Option<String>,

    /// Property value to score against (required with --region)
    #[arg(long)]
    pub property_value: Option<Decimal>,
}

/// Arguments for regional portfolio assessment
#[derive(Args)]
pub struct AssessRegionArgs {
    /// Region to assess with the built-in loan book and weather fixtures
    #[arg(long)]
    pub region: Option<String>,

    /// Path to a JSON file with {loans, observation}
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(serde::Deserialize)]
struct AssessRegionFile {
    loans: Vec<Loan>,
    observation: WeatherObservation,
}

pub fn run_weather_risk(args: WeatherRiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: WeatherRiskInput = if let Some(region) = &args.region {
        let property_value = args
            .property_value
            .ok_or("--property-value is required with --region")?;
        let observation = StaticWeatherProvider::new().observation(region)?;
        WeatherRiskInput { observation, property_value }
    } else {
        input::from_file_or_stdin(&args.input)?
            .ok_or("Provide --region with --property-value, --input file, or pipe JSON via stdin")?
    };

    let output = score_weather_risk(&input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_assess_region(args: AssessRegionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (loans, observation) = if let Some(region) = &args.region {
        let loans = StaticLoanBook::new().loans_in(region)?;
        let observation = StaticWeatherProvider::new().observation(region)?;
        (loans, observation)
    } else {
        let file: AssessRegionFile = input::from_file_or_stdin(&args.input)?
            .ok_or("Provide --region, --input file, or pipe JSON via stdin")?;
        (file.loans, file.observation)
    };

    let output = assess_region(&loans, &observation)?;
    Ok(serde_json::to_value(output)?)
}
