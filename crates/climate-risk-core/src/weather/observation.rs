use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ClimateRiskError;
use crate::types::Rate;
use crate::ClimateRiskResult;

/// Weather condition class. Anything outside the known set deserializes to
/// `Other` and contributes zero base risk; unknown conditions fail open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Rain,
    Thunderstorm,
    Fog,
    Clouds,
    #[serde(other)]
    Other,
}

/// Tagged alert category with a fixed risk increment per category.
///
/// Upstream weather feeds carry free-text event names ("Flash Flood Warning",
/// "Severe Storm Flood Warning"). Classification happens once at ingestion
/// via [`alerts_from_event`]; scoring only ever sees the tagged category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Flood,
    Hurricane,
    Tornado,
    Storm,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 4] = [
        AlertCategory::Flood,
        AlertCategory::Hurricane,
        AlertCategory::Tornado,
        AlertCategory::Storm,
    ];

    /// Fixed additive risk increment for one alert of this category.
    pub fn risk_increment(&self) -> Rate {
        match self {
            AlertCategory::Flood => dec!(0.20),
            AlertCategory::Hurricane => dec!(0.30),
            AlertCategory::Tornado => dec!(0.25),
            AlertCategory::Storm => dec!(0.15),
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            AlertCategory::Flood => "Flood",
            AlertCategory::Hurricane => "Hurricane",
            AlertCategory::Tornado => "Tornado",
            AlertCategory::Storm => "Storm",
        }
    }
}

/// An active weather alert, already classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub category: AlertCategory,
    pub description: String,
}

/// Classify a free-text event name into alerts, one per matched category.
/// An event naming several perils ("Severe Storm Flood Warning") yields one
/// alert per peril, so their increments accumulate exactly as the upstream
/// feed intends. Events matching nothing yield no alerts.
pub fn alerts_from_event(event: &str, description: &str) -> Vec<WeatherAlert> {
    AlertCategory::ALL
        .iter()
        .filter(|c| event.contains(c.keyword()))
        .map(|&category| WeatherAlert {
            category,
            description: description.to_string(),
        })
        .collect()
}

/// A per-region snapshot of current conditions. Created fresh per query,
/// immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub condition: WeatherCondition,
    pub temperature_c: Decimal,
    pub humidity_pct: Decimal,
    pub wind_speed_mps: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation_mm_per_hour: Option<Decimal>,
    #[serde(default)]
    pub active_alerts: Vec<WeatherAlert>,
}

impl WeatherObservation {
    /// Physical magnitudes must be non-negative (temperature excepted).
    pub fn validate(&self) -> ClimateRiskResult<()> {
        if self.humidity_pct < Decimal::ZERO {
            return Err(ClimateRiskError::InvalidInput {
                field: "humidity_pct".into(),
                reason: "Humidity cannot be negative".into(),
            });
        }
        if self.wind_speed_mps < Decimal::ZERO {
            return Err(ClimateRiskError::InvalidInput {
                field: "wind_speed_mps".into(),
                reason: "Wind speed cannot be negative".into(),
            });
        }
        if let Some(rate) = self.precipitation_mm_per_hour {
            if rate < Decimal::ZERO {
                return Err(ClimateRiskError::InvalidInput {
                    field: "precipitation_mm_per_hour".into(),
                    reason: "Precipitation rate cannot be negative".into(),
                });
            }
        }
        Ok(())
    }
}
