pub mod catalog;
pub mod zones;

pub use catalog::{find_region, historical_events, regions, HazardType, HistoricalEvent, Region};
pub use zones::{default_risk_zones, zones_for, RiskZone};
