pub mod loans;
pub mod weather;

pub use loans::{LoanProvider, StaticLoanBook};
pub use weather::{StaticWeatherProvider, WeatherProvider};
