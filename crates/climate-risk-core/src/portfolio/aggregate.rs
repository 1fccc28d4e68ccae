use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ClimateRiskError;
use crate::hazard::RiskZone;
use crate::scenarios::{project_scenario, ScenarioParameters};
use crate::types::{with_metadata, ComputationOutput, Money, Rate, RiskLevel};
use crate::weather::observation::WeatherObservation;
use crate::weather::scoring::{assess, RiskAssessment};
use crate::ClimateRiskResult;

/// One loan paired with its weather-risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAssessment {
    pub loan_id: String,
    pub address: String,
    pub property_value: Money,
    pub assessment: RiskAssessment,
}

/// Portfolio-level fold of per-loan assessments for one region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRiskSummary {
    pub total_value: Money,
    pub total_expected_loss: Money,
    /// total expected loss / total value, as a percentage
    pub percentage_at_risk: Rate,
    pub high_risk_count: u32,
    pub loan_assessments: Vec<LoanAssessment>,
}

/// Assess a region's loan set under one weather observation.
///
/// Folds the per-loan scorer over the set. An empty set or a zero-value set
/// is an explicit error, never a silent 0% at risk.
pub fn assess_region(
    loans: &[crate::portfolio::Loan],
    observation: &WeatherObservation,
) -> ClimateRiskResult<ComputationOutput<PortfolioRiskSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    observation.validate()?;
    if loans.is_empty() {
        return Err(ClimateRiskError::EmptyPortfolio(
            "Cannot assess a region with no loans".into(),
        ));
    }

    let mut total_value = Decimal::ZERO;
    let mut total_expected_loss = Decimal::ZERO;
    let mut high_risk_count = 0u32;
    let mut loan_assessments = Vec::with_capacity(loans.len());

    for loan in loans {
        if loan.value < Decimal::ZERO {
            return Err(ClimateRiskError::InvalidInput {
                field: format!("loan:{}", loan.id),
                reason: "Property value cannot be negative".into(),
            });
        }
        let assessment = assess(observation, loan.value);
        total_value += loan.value;
        total_expected_loss += assessment.expected_loss;
        if assessment.risk_level == RiskLevel::High {
            high_risk_count += 1;
        }
        loan_assessments.push(LoanAssessment {
            loan_id: loan.id.clone(),
            address: loan.address.clone(),
            property_value: loan.value,
            assessment,
        });
    }

    if total_value.is_zero() {
        return Err(ClimateRiskError::DivisionByZero {
            context: "percentage at risk over a zero-value loan set".into(),
        });
    }

    let percentage_at_risk = total_expected_loss / total_value * dec!(100);
    if percentage_at_risk > dec!(100) {
        warnings.push(format!(
            "Percentage at risk {percentage_at_risk}% exceeds 100% (uncapped risk factors)"
        ));
    }

    let summary = PortfolioRiskSummary {
        total_value,
        total_expected_loss,
        percentage_at_risk,
        high_risk_count,
        loan_assessments,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Regional Portfolio Weather-Risk Assessment",
        &serde_json::json!({
            "loans": loans.len(),
            "condition": observation.condition,
            "active_alerts": observation.active_alerts.len(),
        }),
        warnings,
        elapsed,
        summary,
    ))
}

/// Input for a scenario analysis run over the zone reference set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioAnalysisInput {
    pub params: ScenarioParameters,
    pub zones: Vec<RiskZone>,
    /// Total portfolio value the loss is expressed against
    pub portfolio_value: Money,
    /// Total outstanding balance, for the LTV impact figure
    pub outstanding_balance_total: Money,
    /// Optional seed for the bounded per-region perturbation. `None` runs
    /// the exact deterministic closed form with no perturbation at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Expected loss attributed to one region under the scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionImpact {
    pub region: String,
    pub expected_loss: Money,
}

/// Aggregate scenario outcome across the eligible zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub total_expected_loss: Money,
    /// Fraction of total portfolio value (0.087 = 8.7%)
    pub percentage_of_portfolio: Rate,
    pub affected_properties: u32,
    pub per_region_impact: Vec<RegionImpact>,
    /// Scenario-driven uplift to portfolio LTV from collateral value erosion
    pub ltv_impact: Rate,
}

/// Scale applied on top of the timeframe projection: return-period severity
/// times an intensity uplift of 15% per point on the 0–5 scale.
fn scenario_scale(params: &ScenarioParameters) -> Rate {
    params.return_period.severity_factor() * (Decimal::ONE + dec!(0.15) * params.intensity)
}

/// Run a scenario analysis: project the eligible zones to the scenario
/// timeframe, scale losses by return period and intensity, and aggregate
/// per region and in total.
///
/// With a seed, each region's loss takes a bounded ±10% perturbation from a
/// seeded `StdRng`, so identical seeds replay identical results. Without a
/// seed the result is the pure closed form of the declared parameters.
pub fn run_scenario_analysis(
    input: &ScenarioAnalysisInput,
) -> ClimateRiskResult<ComputationOutput<ScenarioResult>> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.portfolio_value <= Decimal::ZERO {
        return Err(ClimateRiskError::InvalidInput {
            field: "portfolio_value".into(),
            reason: "Portfolio value must be positive".into(),
        });
    }
    if input.outstanding_balance_total < Decimal::ZERO {
        return Err(ClimateRiskError::InvalidInput {
            field: "outstanding_balance_total".into(),
            reason: "Outstanding balance cannot be negative".into(),
        });
    }

    let projected = project_scenario(&input.zones, &input.params)?;
    if projected.is_empty() {
        warnings.push(format!(
            "No zones match hazard '{}'{}; scenario impact is zero",
            input.params.hazard_type,
            input
                .params
                .region
                .as_deref()
                .map(|r| format!(" in region '{r}'"))
                .unwrap_or_default()
        ));
    }

    let scale = scenario_scale(&input.params);
    let mut rng = input.seed.map(StdRng::seed_from_u64);

    let mut per_region_impact: Vec<RegionImpact> = Vec::new();
    let mut affected_properties = 0u32;

    for zone in &projected {
        let loss = zone.expected_loss * scale;
        affected_properties += zone.affected_properties;
        match per_region_impact.iter_mut().find(|r| r.region == zone.region) {
            Some(r) => r.expected_loss += loss,
            None => per_region_impact.push(RegionImpact {
                region: zone.region.clone(),
                expected_loss: loss,
            }),
        }
    }

    // Bounded perturbation: a seeded draw of ±1000 basis points per region.
    if let Some(rng) = rng.as_mut() {
        for impact in &mut per_region_impact {
            let bps: i64 = rng.gen_range(-1000..=1000);
            let factor = Decimal::ONE + Decimal::new(bps, 4);
            impact.expected_loss *= factor;
        }
    }

    let total_expected_loss: Decimal =
        per_region_impact.iter().map(|r| r.expected_loss).sum();
    let percentage_of_portfolio = total_expected_loss / input.portfolio_value;
    let ltv_impact = dec!(0.02) + dec!(0.005) * input.params.intensity;

    let result = ScenarioResult {
        total_expected_loss,
        percentage_of_portfolio,
        affected_properties,
        per_region_impact,
        ltv_impact,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Scenario Analysis (Deterministic Projection + Return-Period Scaling)",
        &serde_json::json!({
            "hazard_type": input.params.hazard_type,
            "return_period_years": input.params.return_period.years(),
            "intensity": input.params.intensity.to_string(),
            "timeframe": input.params.timeframe.to_string(),
            "scale": scale.to_string(),
            "seed": input.seed,
            "zones_considered": input.zones.len(),
        }),
        warnings,
        elapsed,
        result,
    ))
}
