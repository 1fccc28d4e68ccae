use rust_decimal_macros::dec;

use crate::error::ClimateRiskError;
use crate::portfolio::Loan;
use crate::types::{Money, Rate, RiskLevel};
use crate::ClimateRiskResult;

/// Source of loan reference data, keyed by region name. Injected at call
/// time, never a module-level global.
pub trait LoanProvider {
    /// All loans in the book.
    fn all_loans(&self) -> ClimateRiskResult<Vec<Loan>>;

    /// Loans in one region. A region with no coverage is an explicit miss.
    fn loans_in(&self, region: &str) -> ClimateRiskResult<Vec<Loan>> {
        let loans: Vec<Loan> = self
            .all_loans()?
            .into_iter()
            .filter(|l| l.region.eq_ignore_ascii_case(region))
            .collect();
        if loans.is_empty() {
            return Err(ClimateRiskError::DataUnavailable {
                resource: "loans".into(),
                key: region.to_string(),
            });
        }
        Ok(loans)
    }
}

/// In-memory loan book with the reference mortgage set.
#[derive(Debug, Default)]
pub struct StaticLoanBook;

impl StaticLoanBook {
    pub fn new() -> Self {
        StaticLoanBook
    }
}

fn loan(
    id: &str,
    address: &str,
    value: Money,
    balance: Money,
    ltv: Rate,
    region: &str,
    risk: RiskLevel,
) -> Loan {
    Loan {
        id: id.to_string(),
        address: address.to_string(),
        value,
        outstanding_balance: balance,
        ltv,
        region: region.to_string(),
        base_risk_level: risk,
    }
}

impl LoanProvider for StaticLoanBook {
    fn all_loans(&self) -> ClimateRiskResult<Vec<Loan>> {
        Ok(vec![
            loan("L001", "123 Ocean Dr, Miami, FL", dec!(450000), dec!(306000), dec!(0.68), "Miami", RiskLevel::High),
            loan("L002", "456 Biscayne Blvd, Miami, FL", dec!(320000), dec!(230400), dec!(0.72), "Miami", RiskLevel::Medium),
            loan("L003", "789 Collins Ave, Miami, FL", dec!(275000), dec!(178750), dec!(0.65), "Miami", RiskLevel::Low),
            loan("L004", "321 Main St, Houston, TX", dec!(380000), dec!(285000), dec!(0.75), "Houston", RiskLevel::High),
            loan("L005", "654 Travis St, Houston, TX", dec!(290000), dec!(203000), dec!(0.70), "Houston", RiskLevel::Medium),
            loan("L006", "876 Broadway, New York, NY", dec!(920000), dec!(717600), dec!(0.78), "NewYork", RiskLevel::Medium),
            loan("L007", "987 Market St, San Francisco, CA", dec!(850000), dec!(680000), dec!(0.80), "SanFrancisco", RiskLevel::Medium),
            loan("L008", "234 Canal St, New Orleans, LA", dec!(310000), dec!(223200), dec!(0.72), "NewOrleans", RiskLevel::High),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn book_has_eight_loans() {
        assert_eq!(StaticLoanBook::new().all_loans().unwrap().len(), 8);
    }

    #[test]
    fn loans_in_filters_by_region() {
        let miami = StaticLoanBook::new().loans_in("Miami").unwrap();
        assert_eq!(miami.len(), 3);
        assert!(miami.iter().all(|l| l.region == "Miami"));
    }

    #[test]
    fn loans_in_unknown_region_is_explicit_miss() {
        let err = StaticLoanBook::new().loans_in("Chicago").unwrap_err();
        assert!(matches!(err, ClimateRiskError::DataUnavailable { .. }));
    }

    #[test]
    fn ltv_is_consistent_with_balance_and_value() {
        for l in StaticLoanBook::new().all_loans().unwrap() {
            let implied = l.outstanding_balance / l.value;
            let diff = (implied - l.ltv).abs();
            assert!(diff < dec!(0.005), "loan {} LTV {} vs implied {}", l.id, l.ltv, implied);
        }
    }
}
