pub mod observation;
pub mod scoring;

pub use observation::{
    alerts_from_event, AlertCategory, WeatherAlert, WeatherCondition, WeatherObservation,
};
pub use scoring::{score_weather_risk, RiskAssessment, WeatherRiskInput};
