pub mod error;
pub mod types;

#[cfg(feature = "hazard")]
pub mod hazard;

#[cfg(feature = "weather")]
pub mod weather;

#[cfg(feature = "scenarios")]
pub mod scenarios;

#[cfg(feature = "portfolio")]
pub mod portfolio;

#[cfg(feature = "providers")]
pub mod providers;

pub use error::ClimateRiskError;
pub use types::*;

/// Standard result type for all climate-risk operations
pub type ClimateRiskResult<T> = Result<T, ClimateRiskError>;
