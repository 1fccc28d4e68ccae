use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate, RiskLevel};

/// A mortgage loan against a single property. Reference data for scoring;
/// the loan itself has no lifecycle here beyond being read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub address: String,
    /// Current market value of the collateral property
    pub value: Money,
    pub outstanding_balance: Money,
    /// Loan-to-value ratio: outstanding balance / property value
    pub ltv: Rate,
    pub region: String,
    pub base_risk_level: RiskLevel,
}
