/// Vehicle state as supplied by the caller for a single evaluation.
///
/// The identifier is free text (usually a license plate or a tag like
/// "VW-TIGUAN-TEST"). Rules only look at it for known model markers, matched
/// case-insensitively as substrings.
use crate::error::AdvisorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Complaint vocabulary offered by the intake form.
pub const KNOWN_COMPLAINTS: &[&str] = &[
    "trillen",
    "piepen",
    "scheef trekken",
    "zwakke remmen",
    "lange remweg",
    "onregelmatig stationair",
];

/// Identifier markers for VAG models with a serviceable DSG/automatic gearbox.
const VW_MARKERS: &[&str] = &["TIGUAN", "VW"];

// ---------------------------------------------------------------------------
// Fuel type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Benzine,
    Diesel,
    Hybride,
    Elektrisch,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [Self::Benzine, Self::Diesel, Self::Hybride, Self::Elektrisch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Benzine    => "benzine",
            Self::Diesel     => "diesel",
            Self::Hybride    => "hybride",
            Self::Elektrisch => "elektrisch",
        }
    }
}

impl Default for FuelType {
    fn default() -> Self { Self::Benzine }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AdvisorError::UnknownFuelType(wanted.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// VehicleState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleState {
    pub identifier:  String,
    pub odometer_km: u64,
    pub fuel_type:   FuelType,
    /// Reported complaints. Kept as a set: order and duplicates carry no meaning.
    #[serde(default)]
    pub complaints:  BTreeSet<String>,
}

impl VehicleState {
    pub fn new(identifier: impl Into<String>, odometer_km: u64, fuel_type: FuelType) -> Self {
        Self {
            identifier: identifier.into(),
            odometer_km,
            fuel_type,
            complaints: BTreeSet::new(),
        }
    }

    /// Builder-style helper; trims each complaint and skips empty ones.
    pub fn with_complaints<I, S>(mut self, complaints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.complaints = complaints
            .into_iter()
            .map(|c| c.as_ref().trim().to_owned())
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    /// True if the identifier carries a VW / Tiguan marker.
    pub fn is_vw_model(&self) -> bool {
        let upper = self.identifier.to_uppercase();
        VW_MARKERS.iter().any(|m| upper.contains(m))
    }

    /// Complaints outside the known vocabulary. They are still evaluated
    /// (matching is by substring), this is only used for diagnostics.
    pub fn unknown_complaints(&self) -> Vec<&str> {
        self.complaints
            .iter()
            .filter(|c| !KNOWN_COMPLAINTS.iter().any(|k| k.eq_ignore_ascii_case(c)))
            .map(String::as_str)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fuel_type_case_insensitively() {
        assert_eq!("BENZINE".parse::<FuelType>().unwrap(), FuelType::Benzine);
        assert_eq!(" Diesel ".parse::<FuelType>().unwrap(), FuelType::Diesel);
        assert_eq!("elektrisch".parse::<FuelType>().unwrap(), FuelType::Elektrisch);
        assert!(matches!(
            "lpg".parse::<FuelType>(),
            Err(AdvisorError::UnknownFuelType(s)) if s == "lpg"
        ));
    }

    #[test]
    fn fuel_type_serializes_lowercase() {
        let json = serde_json::to_string(&FuelType::Hybride).unwrap();
        assert_eq!(json, "\"hybride\"");
    }

    #[test]
    fn detects_vw_markers() {
        assert!(VehicleState::new("VW-TIGUAN-TEST", 0, FuelType::Benzine).is_vw_model());
        assert!(VehicleState::new("my tiguan", 0, FuelType::Diesel).is_vw_model());
        assert!(VehicleState::new("vw golf", 0, FuelType::Diesel).is_vw_model());
        assert!(!VehicleState::new("12-ABC-3", 0, FuelType::Diesel).is_vw_model());
    }

    #[test]
    fn complaints_are_deduplicated_and_trimmed() {
        let v = VehicleState::new("X", 0, FuelType::Benzine)
            .with_complaints(["piepen", " piepen ", "", "trillen"]);
        assert_eq!(v.complaints.len(), 2);
        assert!(v.complaints.contains("piepen"));
    }

    #[test]
    fn reports_unknown_complaints() {
        let v = VehicleState::new("X", 0, FuelType::Benzine)
            .with_complaints(["Piepen", "rammelt"]);
        assert_eq!(v.unknown_complaints(), vec!["rammelt"]);
    }
}
