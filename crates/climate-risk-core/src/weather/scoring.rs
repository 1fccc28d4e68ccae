use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ClimateRiskError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, RiskLevel};
use crate::weather::observation::{WeatherCondition, WeatherObservation};
use crate::ClimateRiskResult;

/// Input for weather-driven risk scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRiskInput {
    pub observation: WeatherObservation,
    /// Current market value of the property at risk
    pub property_value: Money,
}

/// The scored result: a value, not an entity. Computed fresh each call and
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_factor: Rate,
    pub expected_loss: Money,
    pub risk_level: RiskLevel,
}

/// Additive point-score over the observation. Each hazard signal contributes
/// a fixed increment; the factor is monotonically non-decreasing in
/// precipitation rate, wind speed, and alert count.
///
/// The sum is deliberately not clamped at 1.0: coincident alerts plus heavy
/// precipitation and wind can push expected loss past the property value.
/// Callers that need a capped factor must apply their own cap.
pub(crate) fn risk_factor(observation: &WeatherObservation) -> Rate {
    let mut factor = Decimal::ZERO;

    if observation.condition == WeatherCondition::Rain {
        factor += dec!(0.05);
        if let Some(rate) = observation.precipitation_mm_per_hour {
            if rate > dec!(20) {
                factor += dec!(0.15);
            } else if rate > dec!(10) {
                factor += dec!(0.08);
            } else {
                factor += dec!(0.03);
            }
        }
    }

    if observation.condition == WeatherCondition::Thunderstorm {
        // No precipitation tier for thunderstorms; the base covers it.
        factor += dec!(0.12);
    }

    if observation.wind_speed_mps > dec!(18) {
        factor += dec!(0.10);
    } else if observation.wind_speed_mps > dec!(10) {
        factor += dec!(0.05);
    }

    for alert in &observation.active_alerts {
        factor += alert.category.risk_increment();
    }

    factor
}

/// Score one observation against one property value.
pub(crate) fn assess(observation: &WeatherObservation, property_value: Money) -> RiskAssessment {
    let factor = risk_factor(observation);
    RiskAssessment {
        risk_factor: factor,
        expected_loss: factor * property_value,
        risk_level: RiskLevel::from_risk_factor(factor),
    }
}

/// Calculate the weather-driven risk assessment for a single property.
///
/// `expected_loss = risk_factor × property_value`. Risk level uses the fixed
/// cutoffs (> 0.20 high, > 0.10 medium, else low).
pub fn score_weather_risk(
    input: &WeatherRiskInput,
) -> ClimateRiskResult<ComputationOutput<RiskAssessment>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.observation.validate()?;
    if input.property_value < Decimal::ZERO {
        return Err(ClimateRiskError::InvalidInput {
            field: "property_value".into(),
            reason: "Property value cannot be negative".into(),
        });
    }

    let assessment = assess(&input.observation, input.property_value);

    if assessment.risk_factor > Decimal::ONE {
        warnings.push(format!(
            "Risk factor {} exceeds 1.0; expected loss exceeds property value (uncapped additive score)",
            assessment.risk_factor
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Weather Risk Scoring (Additive Point Score)",
        &serde_json::json!({
            "condition": input.observation.condition,
            "active_alerts": input.observation.active_alerts.len(),
            "property_value": input.property_value.to_string(),
        }),
        warnings,
        elapsed,
        assessment,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::observation::{alerts_from_event, WeatherAlert};
    use crate::weather::AlertCategory;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn observation(condition: WeatherCondition) -> WeatherObservation {
        WeatherObservation {
            condition,
            temperature_c: dec!(25),
            humidity_pct: dec!(70),
            wind_speed_mps: dec!(5),
            precipitation_mm_per_hour: None,
            active_alerts: vec![],
        }
    }

    fn flood_alert() -> WeatherAlert {
        WeatherAlert {
            category: AlertCategory::Flood,
            description: "Flash flood warning in effect".into(),
        }
    }

    // Concrete scenario from the Miami reference conditions:
    // rain 0.05 + heavy rain 0.15 + wind 10–18 0.05 + flood alert 0.20 = 0.45
    #[test]
    fn test_heavy_rain_with_flood_alert() {
        let mut obs = observation(WeatherCondition::Rain);
        obs.precipitation_mm_per_hour = Some(dec!(25));
        obs.wind_speed_mps = dec!(15);
        obs.active_alerts = vec![flood_alert()];

        let input = WeatherRiskInput { observation: obs, property_value: dec!(450000) };
        let result = score_weather_risk(&input).unwrap().result;

        assert_eq!(result.risk_factor, dec!(0.45));
        assert_eq!(result.expected_loss, dec!(202500.00));
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_clear_weather_scores_zero() {
        let input = WeatherRiskInput {
            observation: observation(WeatherCondition::Clear),
            property_value: dec!(320000),
        };
        let result = score_weather_risk(&input).unwrap().result;
        assert_eq!(result.risk_factor, Decimal::ZERO);
        assert_eq!(result.expected_loss, Decimal::ZERO);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_unknown_condition_contributes_zero_base() {
        let input = WeatherRiskInput {
            observation: observation(WeatherCondition::Other),
            property_value: dec!(100000),
        };
        let result = score_weather_risk(&input).unwrap().result;
        assert_eq!(result.risk_factor, Decimal::ZERO);
    }

    #[test]
    fn test_thunderstorm_has_no_precipitation_tier() {
        let mut obs = observation(WeatherCondition::Thunderstorm);
        obs.precipitation_mm_per_hour = Some(dec!(30));

        let input = WeatherRiskInput { observation: obs, property_value: dec!(100000) };
        let result = score_weather_risk(&input).unwrap().result;
        assert_eq!(result.risk_factor, dec!(0.12));
    }

    #[test]
    fn test_rain_precipitation_tiers() {
        let tiers = [
            (dec!(5), dec!(0.08)),  // 0.05 base + 0.03 light
            (dec!(15), dec!(0.13)), // 0.05 base + 0.08 moderate
            (dec!(25), dec!(0.20)), // 0.05 base + 0.15 heavy
        ];
        for (rate, expected) in tiers {
            let mut obs = observation(WeatherCondition::Rain);
            obs.precipitation_mm_per_hour = Some(rate);
            let input = WeatherRiskInput { observation: obs, property_value: dec!(100000) };
            let result = score_weather_risk(&input).unwrap().result;
            assert_eq!(result.risk_factor, expected, "rate {rate} mm/h");
        }
    }

    #[test]
    fn test_rain_without_precipitation_reading_is_base_only() {
        let input = WeatherRiskInput {
            observation: observation(WeatherCondition::Rain),
            property_value: dec!(100000),
        };
        let result = score_weather_risk(&input).unwrap().result;
        assert_eq!(result.risk_factor, dec!(0.05));
    }

    #[test]
    fn test_wind_tiers() {
        let tiers = [
            (dec!(10), Decimal::ZERO), // boundary: strict >
            (dec!(12), dec!(0.05)),
            (dec!(18), dec!(0.05)), // boundary: strict >
            (dec!(19), dec!(0.10)),
        ];
        for (speed, expected) in tiers {
            let mut obs = observation(WeatherCondition::Clear);
            obs.wind_speed_mps = speed;
            let input = WeatherRiskInput { observation: obs, property_value: dec!(100000) };
            let result = score_weather_risk(&input).unwrap().result;
            assert_eq!(result.risk_factor, expected, "wind {speed} m/s");
        }
    }

    #[test]
    fn test_multi_category_event_accumulates() {
        let mut obs = observation(WeatherCondition::Clear);
        obs.active_alerts = alerts_from_event("Severe Storm Flood Warning", "");

        let input = WeatherRiskInput { observation: obs, property_value: dec!(100000) };
        let result = score_weather_risk(&input).unwrap().result;
        // flood 0.20 + storm 0.15
        assert_eq!(result.risk_factor, dec!(0.35));
    }

    #[test]
    fn test_monotone_in_precipitation() {
        let mut prev = Decimal::ZERO;
        for rate in [dec!(0), dec!(5), dec!(10.5), dec!(20.5), dec!(50)] {
            let mut obs = observation(WeatherCondition::Rain);
            obs.precipitation_mm_per_hour = Some(rate);
            let input = WeatherRiskInput { observation: obs, property_value: dec!(100000) };
            let factor = score_weather_risk(&input).unwrap().result.risk_factor;
            assert!(factor >= prev, "factor decreased at {rate} mm/h");
            prev = factor;
        }
    }

    #[test]
    fn test_monotone_in_alert_count() {
        let mut obs = observation(WeatherCondition::Clear);
        let input = WeatherRiskInput { observation: obs.clone(), property_value: dec!(100000) };
        let without = score_weather_risk(&input).unwrap().result.risk_factor;

        obs.active_alerts.push(flood_alert());
        let input = WeatherRiskInput { observation: obs, property_value: dec!(100000) };
        let with = score_weather_risk(&input).unwrap().result.risk_factor;
        assert!(with > without);
    }

    #[test]
    fn test_uncapped_factor_warns() {
        let mut obs = observation(WeatherCondition::Rain);
        obs.precipitation_mm_per_hour = Some(dec!(40));
        obs.wind_speed_mps = dec!(25);
        obs.active_alerts = vec![
            WeatherAlert { category: AlertCategory::Hurricane, description: String::new() },
            WeatherAlert { category: AlertCategory::Tornado, description: String::new() },
            WeatherAlert { category: AlertCategory::Flood, description: String::new() },
            WeatherAlert { category: AlertCategory::Storm, description: String::new() },
        ];

        let input = WeatherRiskInput { observation: obs, property_value: dec!(100000) };
        let output = score_weather_risk(&input).unwrap();
        // 0.05 + 0.15 + 0.10 + 0.30 + 0.25 + 0.20 + 0.15 = 1.20
        assert_eq!(output.result.risk_factor, dec!(1.20));
        assert!(output.result.expected_loss > input.property_value);
        assert!(!output.warnings.is_empty());
    }

    #[test]
    fn test_negative_property_value_rejected() {
        let input = WeatherRiskInput {
            observation: observation(WeatherCondition::Clear),
            property_value: dec!(-1),
        };
        assert!(score_weather_risk(&input).is_err());
    }

    #[test]
    fn test_zero_property_value_scores_zero_loss() {
        let mut obs = observation(WeatherCondition::Rain);
        obs.active_alerts = vec![flood_alert()];
        let input = WeatherRiskInput { observation: obs, property_value: Decimal::ZERO };
        let result = score_weather_risk(&input).unwrap().result;
        assert_eq!(result.expected_loss, Decimal::ZERO);
        assert!(result.risk_factor > Decimal::ZERO);
    }
}
