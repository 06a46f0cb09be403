/// Errors raised at the request boundary.
///
/// The rule engine and the history normalizer are total and never return
/// these. They only surface when a caller hands over input that cannot be
/// coerced into engine inputs at all (broken JSON, a history that is not a
/// list, an unknown fuel type).
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Maintenance history must be a JSON list, found {found}")]
    HistoryNotAList { found: &'static str },

    #[error("Unknown fuel type '{0}' (expected benzine, diesel, hybride or elektrisch)")]
    UnknownFuelType(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Short JSON type name for error messages.
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null      => "null",
        serde_json::Value::Bool(_)   => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_)  => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}
