/// Raw advice request, as produced by an intake form or read from a JSON file.
///
/// Every field is kept as an untyped JSON value and coerced here, so the engine
/// only ever sees well-formed inputs:
///
///   identifier   text, "" when missing
///   odometer_km  coerced like history odometers; 0 when unusable (logged)
///   fuel_type    case-insensitive; benzine when missing, error when unknown
///   complaints   list of strings (a single string is one complaint)
///   history      list of records, or the same list as JSON text
///
/// Dutch field names from the original intake form are accepted as aliases.
use crate::{
    error::{json_kind, AdvisorError},
    history::{self, coerce_odometer, coerce_text, MaintenanceEvent},
    vehicle::{FuelType, VehicleState},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    #[serde(default, alias = "kenteken")]
    pub identifier:  Value,
    #[serde(default, alias = "km_stand")]
    pub odometer_km: Value,
    #[serde(default, alias = "brandstof")]
    pub fuel_type:   Value,
    #[serde(default, alias = "klachten")]
    pub complaints:  Value,
    #[serde(default, alias = "historie")]
    pub history:     Value,
}

/// Engine inputs after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationInputs {
    pub vehicle: VehicleState,
    pub history: Vec<MaintenanceEvent>,
}

impl AdviceRequest {
    pub fn from_json(text: &str) -> Result<Self, AdvisorError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The intake form's initial values.
    pub fn demo() -> Self {
        Self {
            identifier:  json!("VW-TIGUAN-TEST"),
            odometer_km: json!(61500),
            fuel_type:   json!("benzine"),
            complaints:  json!([]),
            history:     json!([
                { "datum": "2023-05-10", "type": "Olie + filter",          "km_stand": 48000 },
                { "datum": "2022-09-01", "type": "Remvloeistof verversen", "km_stand": 40000 },
            ]),
        }
    }

    pub fn into_inputs(self) -> Result<EvaluationInputs, AdvisorError> {
        let identifier = coerce_text(&self.identifier).unwrap_or_default();
        let vehicle = VehicleState::new(identifier, self.odometer(), self.fuel()?)
            .with_complaints(self.complaint_list());

        let unknown = vehicle.unknown_complaints();
        if !unknown.is_empty() {
            tracing::debug!("Complaints outside the vocabulary: {:?}", unknown);
        }

        Ok(EvaluationInputs {
            history: self.history_events()?,
            vehicle,
        })
    }

    fn odometer(&self) -> u64 {
        match coerce_odometer(&self.odometer_km) {
            Some(km) => km,
            None => {
                tracing::warn!(
                    "Vehicle odometer {} is not a usable number, evaluating with 0 km",
                    self.odometer_km
                );
                0
            }
        }
    }

    fn fuel(&self) -> Result<FuelType, AdvisorError> {
        match &self.fuel_type {
            Value::Null => Ok(FuelType::default()),
            Value::String(s) if s.trim().is_empty() => Ok(FuelType::default()),
            Value::String(s) => s.parse(),
            other => Err(AdvisorError::UnknownFuelType(other.to_string())),
        }
    }

    fn complaint_list(&self) -> Vec<String> {
        match &self.complaints {
            Value::Array(items) => items.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect(),
            Value::String(s)    => vec![s.clone()],
            Value::Null         => Vec::new(),
            other => {
                tracing::debug!("Ignoring complaints given as {}", json_kind(other));
                Vec::new()
            }
        }
    }

    fn history_events(&self) -> Result<Vec<MaintenanceEvent>, AdvisorError> {
        match &self.history {
            Value::Array(records) => Ok(history::normalize_records(records)),
            Value::Null => Ok(Vec::new()),
            Value::String(s) if s.trim().is_empty() => Ok(Vec::new()),
            Value::String(s) => history::parse_history_json(s),
            other => Err(AdvisorError::HistoryNotAList { found: json_kind(other) }),
        }
    }
}
