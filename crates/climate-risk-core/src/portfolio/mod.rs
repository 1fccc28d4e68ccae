pub mod aggregate;
pub mod book;
pub mod loan;

pub use aggregate::{
    assess_region, run_scenario_analysis, LoanAssessment, PortfolioRiskSummary, RegionImpact,
    ScenarioAnalysisInput, ScenarioResult,
};
pub use book::{summarize_book, PortfolioBookSummary, RegionBreakdown, RiskCategoryCounts};
pub use loan::Loan;
