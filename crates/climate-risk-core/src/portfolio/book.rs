use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ClimateRiskError;
use crate::portfolio::loan::Loan;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, RiskLevel};
use crate::ClimateRiskResult;

/// Loan counts per risk category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCategoryCounts {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

/// Per-region slice of the book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionBreakdown {
    pub name: String,
    pub count: u32,
    pub value: Money,
}

/// Book-level portfolio summary, derived from the loan set, never hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioBookSummary {
    pub total_loans: u32,
    pub total_value: Money,
    pub total_outstanding_balance: Money,
    /// Balance-weighted: total outstanding balance / total property value
    pub average_ltv: Rate,
    pub risk_categories: RiskCategoryCounts,
    pub regions: Vec<RegionBreakdown>,
}

/// Summarize the loan book: totals, weighted LTV, risk-category counts, and
/// a per-region breakdown in first-seen order.
pub fn summarize_book(
    loans: &[Loan],
) -> ClimateRiskResult<ComputationOutput<PortfolioBookSummary>> {
    let start = Instant::now();

    if loans.is_empty() {
        return Err(ClimateRiskError::EmptyPortfolio(
            "Cannot summarize a book with no loans".into(),
        ));
    }

    let mut total_value = Decimal::ZERO;
    let mut total_balance = Decimal::ZERO;
    let mut categories = RiskCategoryCounts { low: 0, medium: 0, high: 0 };
    let mut regions: Vec<RegionBreakdown> = Vec::new();

    for loan in loans {
        if loan.value < Decimal::ZERO || loan.outstanding_balance < Decimal::ZERO {
            return Err(ClimateRiskError::InvalidInput {
                field: format!("loan:{}", loan.id),
                reason: "Value and outstanding balance cannot be negative".into(),
            });
        }
        total_value += loan.value;
        total_balance += loan.outstanding_balance;
        match loan.base_risk_level {
            RiskLevel::Low => categories.low += 1,
            RiskLevel::Medium => categories.medium += 1,
            RiskLevel::High => categories.high += 1,
        }
        match regions.iter_mut().find(|r| r.name == loan.region) {
            Some(r) => {
                r.count += 1;
                r.value += loan.value;
            }
            None => regions.push(RegionBreakdown {
                name: loan.region.clone(),
                count: 1,
                value: loan.value,
            }),
        }
    }

    if total_value.is_zero() {
        return Err(ClimateRiskError::DivisionByZero {
            context: "average LTV over a zero-value book".into(),
        });
    }

    let summary = PortfolioBookSummary {
        total_loans: loans.len() as u32,
        total_value,
        total_outstanding_balance: total_balance,
        average_ltv: total_balance / total_value,
        risk_categories: categories,
        regions,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Loan Book Summary",
        &serde_json::json!({
            "loans": loans.len(),
            "ltv_method": "total balance / total value",
        }),
        Vec::new(),
        elapsed,
        summary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn loan(id: &str, region: &str, value: Money, balance: Money, risk: RiskLevel) -> Loan {
        Loan {
            id: id.into(),
            address: format!("{id} Test St"),
            value,
            outstanding_balance: balance,
            ltv: if value.is_zero() { Decimal::ZERO } else { balance / value },
            region: region.into(),
            base_risk_level: risk,
        }
    }

    #[test]
    fn test_totals_and_weighted_ltv() {
        let loans = vec![
            loan("L1", "Miami", dec!(450000), dec!(306000), RiskLevel::High),
            loan("L2", "Miami", dec!(320000), dec!(230400), RiskLevel::Medium),
            loan("L3", "Houston", dec!(380000), dec!(285000), RiskLevel::High),
        ];
        let summary = summarize_book(&loans).unwrap().result;

        assert_eq!(summary.total_loans, 3);
        assert_eq!(summary.total_value, dec!(1150000));
        assert_eq!(summary.total_outstanding_balance, dec!(821400));
        assert_eq!(summary.average_ltv, dec!(821400) / dec!(1150000));
    }

    #[test]
    fn test_risk_categories_and_regions() {
        let loans = vec![
            loan("L1", "Miami", dec!(100000), dec!(50000), RiskLevel::High),
            loan("L2", "Miami", dec!(200000), dec!(100000), RiskLevel::Low),
            loan("L3", "Houston", dec!(300000), dec!(150000), RiskLevel::Medium),
        ];
        let summary = summarize_book(&loans).unwrap().result;

        assert_eq!(summary.risk_categories.low, 1);
        assert_eq!(summary.risk_categories.medium, 1);
        assert_eq!(summary.risk_categories.high, 1);

        assert_eq!(summary.regions.len(), 2);
        assert_eq!(summary.regions[0].name, "Miami");
        assert_eq!(summary.regions[0].count, 2);
        assert_eq!(summary.regions[0].value, dec!(300000));
    }

    #[test]
    fn test_empty_book_is_an_error() {
        assert!(matches!(
            summarize_book(&[]),
            Err(ClimateRiskError::EmptyPortfolio(_))
        ));
    }

    #[test]
    fn test_zero_value_book_is_division_by_zero() {
        let loans = vec![loan("L1", "Miami", Decimal::ZERO, Decimal::ZERO, RiskLevel::Low)];
        assert!(matches!(
            summarize_book(&loans),
            Err(ClimateRiskError::DivisionByZero { .. })
        ));
    }
}
