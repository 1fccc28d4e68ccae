use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateRiskError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Empty portfolio: {0}")]
    EmptyPortfolio(String),

    #[error("No data available for {resource} '{key}'")]
    DataUnavailable { resource: String, key: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ClimateRiskError {
    fn from(e: serde_json::Error) -> Self {
        ClimateRiskError::SerializationError(e.to_string())
    }
}
