use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates and risk factors expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Qualitative risk banding used across assessments and zone reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Fixed cutoffs on the additive risk factor. Boundaries are strict:
    /// exactly 0.20 is Medium, exactly 0.10 is Low.
    pub fn from_risk_factor(risk_factor: Rate) -> Self {
        if risk_factor > dec!(0.20) {
            RiskLevel::High
        } else if risk_factor > dec!(0.10) {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn risk_level_strict_boundaries() {
        assert_eq!(RiskLevel::from_risk_factor(dec!(0.10)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_risk_factor(dec!(0.1001)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_risk_factor(dec!(0.20)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_risk_factor(dec!(0.2001)), RiskLevel::High);
    }

    #[test]
    fn risk_level_extremes() {
        assert_eq!(RiskLevel::from_risk_factor(Decimal::ZERO), RiskLevel::Low);
        assert_eq!(RiskLevel::from_risk_factor(dec!(1.5)), RiskLevel::High);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
