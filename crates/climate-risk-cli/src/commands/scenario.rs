use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use climate_risk_core::hazard::{default_risk_zones, HazardType, RiskZone};
use climate_risk_core::portfolio::{run_scenario_analysis, ScenarioAnalysisInput};
use climate_risk_core::providers::{LoanProvider, StaticLoanBook};
use climate_risk_core::scenarios::{
    project_zone, ReturnPeriod, ScenarioParameters, TimeframeYear,
};

use crate::input;

/// Arguments for a scenario analysis run
#[derive(Args)]
pub struct ScenarioArgs {
    /// Hazard type: flood, fire, wind, heat
    #[arg(long)]
    pub hazard: String,

    /// Return period in years: 10, 20, 50, 100, 500
    #[arg(long, default_value = "100")]
    pub return_period: u32,

    /// Hazard intensity on the 0-5 scale
    #[arg(long, default_value = "3")]
    pub intensity: Decimal,

    /// Projection timeframe: present, 2050, or 2100
    #[arg(long, default_value = "present")]
    pub timeframe: String,

    /// Restrict the run to one region
    #[arg(long)]
    pub region: Option<String>,

    /// Seed for the bounded perturbation; omit for the pure closed form
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a JSON file with a custom zone set (defaults to the built-in zones)
    #[arg(long)]
    pub zones: Option<String>,
}

/// Arguments for single-zone projection
#[derive(Args)]
pub struct ProjectZoneArgs {
    /// Zone id from the built-in reference set
    #[arg(long)]
    pub zone_id: Option<u32>,

    /// Path to a JSON file with a custom zone
    #[arg(long)]
    pub input: Option<String>,

    /// Projection timeframe: present, 2050, or 2100
    #[arg(long, default_value = "2050")]
    pub timeframe: String,
}

/// Parse a CLI timeframe: the word "present" or a supported year.
pub(crate) fn parse_timeframe(s: &str) -> Result<TimeframeYear, Box<dyn std::error::Error>> {
    if s.eq_ignore_ascii_case("present") {
        return Ok(TimeframeYear::Present);
    }
    let year: u16 = s
        .parse()
        .map_err(|_| format!("Invalid timeframe '{s}'. Use: present, 2023, 2050, 2100"))?;
    Ok(TimeframeYear::try_from(year)?)
}

pub fn run_scenario(args: ScenarioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let hazard_type: HazardType = args.hazard.parse()?;
    let return_period = ReturnPeriod::try_from(args.return_period)?;
    let timeframe = parse_timeframe(&args.timeframe)?;

    let zones: Vec<RiskZone> = match &args.zones {
        Some(path) => input::read_json(path)?,
        None => default_risk_zones(),
    };

    // Express losses against the built-in book's totals.
    let loans = StaticLoanBook::new().all_loans()?;
    let portfolio_value: Decimal = loans.iter().map(|l| l.value).sum();
    let outstanding_balance_total: Decimal =
        loans.iter().map(|l| l.outstanding_balance).sum();

    let scenario_input = ScenarioAnalysisInput {
        params: ScenarioParameters {
            hazard_type,
            return_period,
            intensity: args.intensity,
            timeframe,
            region: args.region,
        },
        zones,
        portfolio_value,
        outstanding_balance_total,
        seed: args.seed,
    };

    let output = run_scenario_analysis(&scenario_input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_project_zone(args: ProjectZoneArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let timeframe = parse_timeframe(&args.timeframe)?;

    let zone: RiskZone = if let Some(id) = args.zone_id {
        default_risk_zones()
            .into_iter()
            .find(|z| z.id == id)
            .ok_or_else(|| format!("No built-in zone with id {id}"))?
    } else {
        input::from_file_or_stdin(&args.input)?
            .ok_or("Provide --zone-id, --input file, or pipe a zone via stdin")?
    };

    let projected = project_zone(&zone, timeframe);
    Ok(serde_json::to_value(projected)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_timeframe_accepts_word_and_years() {
        assert_eq!(parse_timeframe("present").unwrap(), TimeframeYear::Present);
        assert_eq!(parse_timeframe("2023").unwrap(), TimeframeYear::Present);
        assert_eq!(parse_timeframe("2050").unwrap(), TimeframeYear::Y2050);
        assert_eq!(parse_timeframe("2100").unwrap(), TimeframeYear::Y2100);
    }

    #[test]
    fn parse_timeframe_rejects_other_years() {
        assert!(parse_timeframe("2075").is_err());
        assert!(parse_timeframe("soon").is_err());
    }

    #[test]
    fn built_in_book_totals_are_positive() {
        let loans = StaticLoanBook::new().all_loans().unwrap();
        let total: Decimal = loans.iter().map(|l| l.value).sum();
        assert!(total > dec!(0));
    }
}
