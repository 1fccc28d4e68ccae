pub mod projection;

pub use projection::{
    project_scenario, project_zone, ProjectedZone, ReturnPeriod, ScenarioParameters, TimeframeYear,
};
