use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ClimateRiskError;
use crate::hazard::{HazardType, RiskZone};
use crate::types::{Money, Rate, RiskLevel};
use crate::ClimateRiskResult;

/// Forward-looking projection horizon. Closed enumeration: a year outside
/// the set is rejected at the boundary, never silently treated as present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeframeYear {
    #[serde(rename = "present")]
    Present,
    #[serde(rename = "2050")]
    Y2050,
    #[serde(rename = "2100")]
    Y2100,
}

impl TimeframeYear {
    /// Fixed (radius, loss) multiplier table keyed by horizon. Discrete,
    /// not a continuous function of year.
    pub fn multipliers(&self) -> (Decimal, Decimal) {
        match self {
            TimeframeYear::Present => (Decimal::ONE, Decimal::ONE),
            TimeframeYear::Y2050 => (dec!(1.5), dec!(1.8)),
            TimeframeYear::Y2100 => (dec!(2.2), dec!(3.2)),
        }
    }
}

impl TryFrom<u16> for TimeframeYear {
    type Error = ClimateRiskError;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        match year {
            2023 => Ok(TimeframeYear::Present),
            2050 => Ok(TimeframeYear::Y2050),
            2100 => Ok(TimeframeYear::Y2100),
            other => Err(ClimateRiskError::InvalidInput {
                field: "timeframe_year".into(),
                reason: format!("Unsupported timeframe year {other}. Use: 2023, 2050, 2100"),
            }),
        }
    }
}

impl std::fmt::Display for TimeframeYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeframeYear::Present => write!(f, "present"),
            TimeframeYear::Y2050 => write!(f, "2050"),
            TimeframeYear::Y2100 => write!(f, "2100"),
        }
    }
}

/// Statistical recurrence interval of the modelled hazard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnPeriod {
    #[serde(rename = "10")]
    Y10,
    #[serde(rename = "20")]
    Y20,
    #[serde(rename = "50")]
    Y50,
    #[serde(rename = "100")]
    Y100,
    #[serde(rename = "500")]
    Y500,
}

impl ReturnPeriod {
    pub fn years(&self) -> u32 {
        match self {
            ReturnPeriod::Y10 => 10,
            ReturnPeriod::Y20 => 20,
            ReturnPeriod::Y50 => 50,
            ReturnPeriod::Y100 => 100,
            ReturnPeriod::Y500 => 500,
        }
    }

    /// Severity scaling relative to the 1-in-100-year reference event.
    /// Shorter recurrence means more frequent but milder events; the
    /// 500-year tail event carries a 40% uplift.
    pub fn severity_factor(&self) -> Rate {
        match self {
            ReturnPeriod::Y10 => dec!(0.5),
            ReturnPeriod::Y20 => dec!(0.7),
            ReturnPeriod::Y50 => dec!(0.9),
            ReturnPeriod::Y100 => Decimal::ONE,
            ReturnPeriod::Y500 => dec!(1.4),
        }
    }
}

impl TryFrom<u32> for ReturnPeriod {
    type Error = ClimateRiskError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        match years {
            10 => Ok(ReturnPeriod::Y10),
            20 => Ok(ReturnPeriod::Y20),
            50 => Ok(ReturnPeriod::Y50),
            100 => Ok(ReturnPeriod::Y100),
            500 => Ok(ReturnPeriod::Y500),
            other => Err(ClimateRiskError::InvalidInput {
                field: "return_period".into(),
                reason: format!(
                    "Unsupported return period {other}. Use: 10, 20, 50, 100, 500"
                ),
            }),
        }
    }
}

/// User-supplied scenario definition, immutable for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub hazard_type: HazardType,
    pub return_period: ReturnPeriod,
    /// Hazard intensity on the 0–5 scale. Pass-through at the per-zone
    /// projection level; modulates the aggregate run only.
    pub intensity: Decimal,
    pub timeframe: TimeframeYear,
    /// Restrict the run to one region; `None` spans the whole book.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl ScenarioParameters {
    pub fn validate(&self) -> ClimateRiskResult<()> {
        if self.intensity < Decimal::ZERO || self.intensity > dec!(5) {
            return Err(ClimateRiskError::InvalidInput {
                field: "intensity".into(),
                reason: format!("Intensity {} outside the 0–5 scale", self.intensity),
            });
        }
        Ok(())
    }
}

/// A zone with its metrics projected to a timeframe. Derived from a base
/// [`RiskZone`], which is left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectedZone {
    pub zone_id: u32,
    pub region: String,
    pub hazard: HazardType,
    pub risk_level: RiskLevel,
    pub radius_meters: Decimal,
    pub expected_loss: Money,
    pub affected_properties: u32,
}

/// Project a single zone's metrics to a timeframe.
///
/// Radius and loss scale by the fixed multiplier table. Affected-property
/// count scales damped relative to area: `round(base × (1 + (rm − 1) × 0.7))`.
pub fn project_zone(zone: &RiskZone, timeframe: TimeframeYear) -> ProjectedZone {
    let (radius_multiplier, loss_multiplier) = timeframe.multipliers();

    let affected = Decimal::from(zone.base_affected_properties)
        * (Decimal::ONE + (radius_multiplier - Decimal::ONE) * dec!(0.7));

    ProjectedZone {
        zone_id: zone.id,
        region: zone.region.clone(),
        hazard: zone.hazard,
        risk_level: zone.base_risk_level,
        radius_meters: zone.base_radius_meters * radius_multiplier,
        expected_loss: zone.base_expected_loss * loss_multiplier,
        affected_properties: decimal_round_u32(affected),
    }
}

/// Project every eligible zone under the scenario. Eligibility requires a
/// hazard match and, when the scenario names a region, a region match;
/// ineligible zones are excluded from the result set entirely.
pub fn project_scenario(
    zones: &[RiskZone],
    params: &ScenarioParameters,
) -> ClimateRiskResult<Vec<ProjectedZone>> {
    params.validate()?;
    Ok(zones
        .iter()
        .filter(|z| z.hazard == params.hazard_type)
        .filter(|z| {
            params
                .region
                .as_deref()
                .map_or(true, |r| z.region.eq_ignore_ascii_case(r))
        })
        .map(|z| project_zone(z, params.timeframe))
        .collect())
}

/// Round half-away-from-zero to the nearest whole count.
fn decimal_round_u32(value: Decimal) -> u32 {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::RoundingStrategy;
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(u32::MAX)
}
