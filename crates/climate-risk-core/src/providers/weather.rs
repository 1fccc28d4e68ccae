use rust_decimal_macros::dec;

use crate::error::ClimateRiskError;
use crate::weather::observation::{
    alerts_from_event, WeatherCondition, WeatherObservation,
};
use crate::ClimateRiskResult;

/// Source of current-conditions snapshots, keyed by region name.
///
/// Injected into callers at call time, never an ambient singleton. A live
/// implementation would sit on a weather API; [`StaticWeatherProvider`]
/// carries the reference fixture set.
pub trait WeatherProvider {
    fn observation(&self, region: &str) -> ClimateRiskResult<WeatherObservation>;
}

/// In-memory provider with one reference observation per monitored region.
/// A lookup miss is an explicit error, never another region's conditions.
#[derive(Debug, Default)]
pub struct StaticWeatherProvider;

impl StaticWeatherProvider {
    pub fn new() -> Self {
        StaticWeatherProvider
    }
}

impl WeatherProvider for StaticWeatherProvider {
    fn observation(&self, region: &str) -> ClimateRiskResult<WeatherObservation> {
        let observation = match region {
            "Miami" => WeatherObservation {
                condition: WeatherCondition::Rain,
                temperature_c: dec!(28),
                humidity_pct: dec!(85),
                wind_speed_mps: dec!(15),
                precipitation_mm_per_hour: Some(dec!(25)),
                active_alerts: alerts_from_event("Flood", "Flash flood warning in effect"),
            },
            "Houston" => WeatherObservation {
                condition: WeatherCondition::Thunderstorm,
                temperature_c: dec!(30),
                humidity_pct: dec!(80),
                wind_speed_mps: dec!(20),
                precipitation_mm_per_hour: Some(dec!(30)),
                active_alerts: alerts_from_event(
                    "Severe Thunderstorm",
                    "Severe thunderstorm warning in effect",
                ),
            },
            "NewYork" => WeatherObservation {
                condition: WeatherCondition::Clear,
                temperature_c: dec!(22),
                humidity_pct: dec!(60),
                wind_speed_mps: dec!(8),
                precipitation_mm_per_hour: None,
                active_alerts: vec![],
            },
            "SanFrancisco" => WeatherObservation {
                condition: WeatherCondition::Fog,
                temperature_c: dec!(18),
                humidity_pct: dec!(75),
                wind_speed_mps: dec!(12),
                precipitation_mm_per_hour: None,
                active_alerts: vec![],
            },
            "NewOrleans" => WeatherObservation {
                condition: WeatherCondition::Rain,
                temperature_c: dec!(29),
                humidity_pct: dec!(82),
                wind_speed_mps: dec!(18),
                precipitation_mm_per_hour: Some(dec!(15)),
                active_alerts: vec![],
            },
            other => {
                return Err(ClimateRiskError::DataUnavailable {
                    resource: "weather observation".into(),
                    key: other.to_string(),
                })
            }
        };
        Ok(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::AlertCategory;

    #[test]
    fn known_regions_have_observations() {
        let provider = StaticWeatherProvider::new();
        for region in ["Miami", "Houston", "NewYork", "SanFrancisco", "NewOrleans"] {
            let obs = provider.observation(region).unwrap();
            assert!(obs.validate().is_ok(), "invalid fixture for {region}");
        }
    }

    #[test]
    fn miami_fixture_carries_flood_alert() {
        let obs = StaticWeatherProvider::new().observation("Miami").unwrap();
        assert_eq!(obs.active_alerts.len(), 1);
        assert_eq!(obs.active_alerts[0].category, AlertCategory::Flood);
    }

    // "Severe Thunderstorm" carries no standalone "Storm" keyword (the match
    // is case-sensitive, as in the upstream feed), so nothing classifies.
    #[test]
    fn houston_thunderstorm_event_classifies_no_alert() {
        let obs = StaticWeatherProvider::new().observation("Houston").unwrap();
        assert!(obs.active_alerts.is_empty());
    }

    #[test]
    fn unknown_region_is_data_unavailable_not_miami() {
        let err = StaticWeatherProvider::new().observation("Chicago").unwrap_err();
        assert!(matches!(err, ClimateRiskError::DataUnavailable { .. }));
    }
}
