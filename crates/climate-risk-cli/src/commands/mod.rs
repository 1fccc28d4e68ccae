pub mod hazard;
pub mod portfolio;
pub mod scenario;
pub mod weather;
