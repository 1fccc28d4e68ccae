use clap::Args;
use serde_json::Value;

use climate_risk_core::portfolio::{summarize_book, Loan};
use climate_risk_core::providers::{LoanProvider, StaticLoanBook};

use crate::input;

/// Arguments for the loan book summary
#[derive(Args)]
pub struct PortfolioArgs {
    /// Path to a JSON file with a loan array (defaults to the built-in book)
    #[arg(long)]
    pub input: Option<String>,

    /// Restrict the summary to one region of the built-in book
    #[arg(long)]
    pub region: Option<String>,
}

pub fn run_portfolio(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loans: Vec<Loan> = match (&args.input, &args.region) {
        (Some(_), _) => input::from_file_or_stdin(&args.input)?
            .ok_or("Failed to read loans from --input")?,
        (None, Some(region)) => StaticLoanBook::new().loans_in(region)?,
        (None, None) => match input::from_file_or_stdin(&args.input)? {
            Some(loans) => loans,
            None => StaticLoanBook::new().all_loans()?,
        },
    };

    let output = summarize_book(&loans)?;
    Ok(serde_json::to_value(output)?)
}
