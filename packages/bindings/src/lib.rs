use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Weather risk
// ---------------------------------------------------------------------------

#[napi]
pub fn score_weather_risk(input_json: String) -> NapiResult<String> {
    let input: climate_risk_core::weather::WeatherRiskInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        climate_risk_core::weather::score_weather_risk(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[napi]
pub fn assess_region(region: String) -> NapiResult<String> {
    use climate_risk_core::providers::{
        LoanProvider, StaticLoanBook, StaticWeatherProvider, WeatherProvider,
    };

    let loans = StaticLoanBook::new().loans_in(&region).map_err(to_napi_error)?;
    let observation = StaticWeatherProvider::new()
        .observation(&region)
        .map_err(to_napi_error)?;
    let output = climate_risk_core::portfolio::assess_region(&loans, &observation)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn run_scenario_analysis(input_json: String) -> NapiResult<String> {
    let input: climate_risk_core::portfolio::ScenarioAnalysisInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = climate_risk_core::portfolio::run_scenario_analysis(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn summarize_book(loans_json: String) -> NapiResult<String> {
    let loans: Vec<climate_risk_core::portfolio::Loan> =
        serde_json::from_str(&loans_json).map_err(to_napi_error)?;
    let output =
        climate_risk_core::portfolio::summarize_book(&loans).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Scenarios and hazard catalog
// ---------------------------------------------------------------------------

#[napi]
pub fn project_scenario(zones_json: String, params_json: String) -> NapiResult<String> {
    let zones: Vec<climate_risk_core::hazard::RiskZone> =
        serde_json::from_str(&zones_json).map_err(to_napi_error)?;
    let params: climate_risk_core::scenarios::ScenarioParameters =
        serde_json::from_str(&params_json).map_err(to_napi_error)?;
    let projected = climate_risk_core::scenarios::project_scenario(&zones, &params)
        .map_err(to_napi_error)?;
    serde_json::to_string(&projected).map_err(to_napi_error)
}

#[napi]
pub fn list_risk_zones() -> NapiResult<String> {
    let zones = climate_risk_core::hazard::default_risk_zones();
    serde_json::to_string(&zones).map_err(to_napi_error)
}
