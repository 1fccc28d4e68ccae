use clap::{Args, ValueEnum};
use serde_json::Value;

use climate_risk_core::hazard::{
    default_risk_zones, historical_events, regions, zones_for, HazardType,
};

/// Arguments for catalog listings
#[derive(Args)]
pub struct HazardsArgs {
    /// What to list
    #[arg(value_enum, default_value = "types")]
    pub subject: HazardSubject,

    /// Hazard type filter (required for history, optional for zones)
    #[arg(long)]
    pub hazard: Option<String>,

    /// Region filter for zones
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum HazardSubject {
    Types,
    Regions,
    Zones,
    History,
}

pub fn run_hazards(args: HazardsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match args.subject {
        HazardSubject::Types => {
            let types: Vec<Value> = HazardType::ALL
                .iter()
                .map(|h| {
                    serde_json::json!({
                        "id": h.id(),
                        "name": h.name(),
                        "description": h.description(),
                    })
                })
                .collect();
            Ok(Value::Array(types))
        }
        HazardSubject::Regions => Ok(serde_json::to_value(regions())?),
        HazardSubject::Zones => {
            let zones = default_risk_zones();
            match &args.hazard {
                Some(h) => {
                    let hazard: HazardType = h.parse()?;
                    let filtered = zones_for(&zones, args.region.as_deref(), hazard);
                    Ok(serde_json::to_value(filtered)?)
                }
                None => Ok(serde_json::to_value(zones)?),
            }
        }
        HazardSubject::History => {
            let hazard: HazardType = args
                .hazard
                .as_deref()
                .ok_or("--hazard is required for history")?
                .parse()?;
            Ok(serde_json::to_value(historical_events(hazard))?)
        }
    }
}
