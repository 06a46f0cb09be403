/// Normalizes loosely typed maintenance history records into `MaintenanceEvent`s.
///
/// History comes from a hand-edited table or a pasted JSON list, so any field
/// may be missing, blank or malformed. Every field is coerced on its own:
///
///   date         "2023-05-10" or a complete ISO datetime on that day, else None
///   service type trimmed text, "" when missing
///   odometer     integer, float (truncated) or numeric string, else None
///   notes        trimmed text, None when blank
///
/// A bad field never discards the rest of its record. Records whose fields are
/// all blank are dropped, and non-object list elements are skipped.
use crate::error::{json_kind, AdvisorError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

const DATE_KEYS:     &[&str] = &["date", "datum"];
const TYPE_KEYS:     &[&str] = &["service_type", "type"];
const ODOMETER_KEYS: &[&str] = &["odometer_km", "km_stand"];
const NOTES_KEYS:    &[&str] = &["notes", "notities", "opmerking"];

/// One entry of the maintenance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    /// Serialized as `YYYY-MM-DD`; None hides the event from date-based rules.
    pub date:         Option<NaiveDate>,
    pub service_type: String,
    pub odometer_km:  Option<u64>,
    pub notes:        Option<String>,
}

impl MaintenanceEvent {
    pub fn new(date: Option<NaiveDate>, service_type: impl Into<String>) -> Self {
        Self {
            date,
            service_type: service_type.into(),
            odometer_km:  None,
            notes:        None,
        }
    }
}

// ---------------------------------------------------------------------------
// Field coercion helpers
// ---------------------------------------------------------------------------

/// First value among `keys` that is present and not null.
fn field<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .find(|v| !v.is_null())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null      => true,
        Value::String(s) => s.trim().is_empty(),
        _                => false,
    }
}

/// Accepts "YYYY-MM-DD" and full ISO datetimes such as "2023-05-10T08:30:00"
/// or "2023-05-10 08:30:00+02:00". The date is taken as written, before any
/// offset conversion.
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

pub fn coerce_odometer(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return Some(u);
            }
            let f = n.as_f64()?;
            (f.is_finite() && f >= 0.0).then(|| f.trunc() as u64)
        }
        Value::String(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != '_').collect();
            if cleaned.is_empty() {
                return None;
            }
            if let Ok(u) = cleaned.parse::<u64>() {
                return Some(u);
            }
            // "48.000" is a Dutch thousands separator, not a fraction
            if is_grouped_thousands(&cleaned) {
                return cleaned.replace('.', "").parse::<u64>().ok();
            }
            let f = cleaned.parse::<f64>().ok()?;
            (f.is_finite() && f >= 0.0).then(|| f.trunc() as u64)
        }
        _ => None,
    }
}

/// "48.000", "1.250.000": groups of exactly three digits after each dot.
fn is_grouped_thousands(s: &str) -> bool {
    let mut parts = s.split('.');
    let Some(head) = parts.next() else { return false };
    if head.is_empty() || head.len() > 3 || !head.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut groups = 0;
    for p in parts {
        if p.len() != 3 || !p.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups > 0
}

/// Trimmed text; numbers and booleans are rendered, containers are ignored.
pub fn coerce_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b)   => b.to_string(),
        _                => return None,
    };
    (!text.is_empty()).then_some(text)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Normalize one record. Returns None for non-objects and blank records.
pub fn normalize_record(raw: &Value) -> Option<MaintenanceEvent> {
    let Value::Object(record) = raw else {
        tracing::debug!("Skipping history element that is {}", json_kind(raw));
        return None;
    };

    if record.values().all(is_blank) {
        tracing::debug!("Dropping blank history record");
        return None;
    }

    let date = field(record, DATE_KEYS).and_then(|v| {
        let parsed = coerce_date(v);
        if parsed.is_none() && !is_blank(v) {
            tracing::debug!("Unparseable history date {}, treated as absent", v);
        }
        parsed
    });

    Some(MaintenanceEvent {
        date,
        service_type: field(record, TYPE_KEYS).and_then(coerce_text).unwrap_or_default(),
        odometer_km:  field(record, ODOMETER_KEYS).and_then(coerce_odometer),
        notes:        field(record, NOTES_KEYS).and_then(coerce_text),
    })
}

/// Normalize a list of raw records, preserving their order.
pub fn normalize_records(records: &[Value]) -> Vec<MaintenanceEvent> {
    let events: Vec<MaintenanceEvent> = records.iter().filter_map(normalize_record).collect();
    tracing::debug!("Normalized {} of {} history records", events.len(), records.len());
    events
}

/// Parse history pasted as JSON text. The top level must be a list.
pub fn parse_history_json(text: &str) -> Result<Vec<MaintenanceEvent>, AdvisorError> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(records) => Ok(normalize_records(&records)),
        other => Err(AdvisorError::HistoryNotAList { found: json_kind(&other) }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn normalizes_well_formed_record() {
        let e = normalize_record(&json!({
            "date": "2023-05-10", "type": " Olie + filter ", "odometer_km": 48000, "notes": "garage"
        }))
        .expect("should normalize");
        assert_eq!(e.date, Some(ymd(2023, 5, 10)));
        assert_eq!(e.service_type, "Olie + filter");
        assert_eq!(e.odometer_km, Some(48000));
        assert_eq!(e.notes.as_deref(), Some("garage"));
    }

    #[test]
    fn accepts_dutch_field_names() {
        let e = normalize_record(&json!({
            "datum": "2022-09-01", "type": "Remvloeistof verversen", "km_stand": "40000"
        }))
        .unwrap();
        assert_eq!(e.date, Some(ymd(2022, 9, 1)));
        assert_eq!(e.odometer_km, Some(40000));
        assert_eq!(e.notes, None);
    }

    #[test]
    fn bad_fields_degrade_independently() {
        let e = normalize_record(&json!({
            "date": "10-05-2023", "type": "Pollenfilter", "odometer_km": "veel", "notes": "   "
        }))
        .unwrap();
        assert_eq!(e.date, None);
        assert_eq!(e.service_type, "Pollenfilter");
        assert_eq!(e.odometer_km, None);
        assert_eq!(e.notes, None);
    }

    #[test]
    fn datetime_strings_keep_the_date() {
        assert_eq!(coerce_date(&json!("2024-01-31T09:15:00")), Some(ymd(2024, 1, 31)));
        assert_eq!(coerce_date(&json!("2024-01-31 09:15:00")), Some(ymd(2024, 1, 31)));
        assert_eq!(coerce_date(&json!("2024-02-30")), None);
        assert_eq!(coerce_date(&json!(20240131)), None);
    }

    #[test]
    fn datetime_strings_must_be_complete() {
        assert_eq!(coerce_date(&json!("2023-05-10Tgarbage")), None);
        assert_eq!(coerce_date(&json!("2023-05-10 xyz")), None);
        assert_eq!(coerce_date(&json!("2023-05-10T25:00:00")), None);
        assert_eq!(coerce_date(&json!("2023-05-10 08:30")), Some(ymd(2023, 5, 10)));
        assert_eq!(coerce_date(&json!("2023-05-10T08:30:00.250")), Some(ymd(2023, 5, 10)));
        assert_eq!(coerce_date(&json!("2023-05-10T23:30:00+02:00")), Some(ymd(2023, 5, 10)));
        assert_eq!(coerce_date(&json!("2023-05-10T08:30:00Z")), Some(ymd(2023, 5, 10)));
    }

    #[test]
    fn record_with_trailing_garbage_date_keeps_other_fields() {
        let records = json!([{ "date": "2023-05-10Tgarbage", "type": "Olie + filter", "km_stand": 48000 }]);
        let events = normalize_records(records.as_array().unwrap());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, None);
        assert_eq!(events[0].odometer_km, Some(48_000));
    }

    #[test]
    fn odometer_coercion() {
        assert_eq!(coerce_odometer(&json!(61500)), Some(61500));
        assert_eq!(coerce_odometer(&json!(61500.9)), Some(61500));
        assert_eq!(coerce_odometer(&json!(" 48.000 ")), Some(48000));
        assert_eq!(coerce_odometer(&json!("1.250.000")), Some(1_250_000));
        assert_eq!(coerce_odometer(&json!("123.5")), Some(123));
        assert_eq!(coerce_odometer(&json!("")), None);
        assert_eq!(coerce_odometer(&json!(-5)), None);
        assert_eq!(coerce_odometer(&json!(null)), None);
    }

    #[test]
    fn drops_blank_and_non_object_records() {
        let raw = vec![
            json!({}),
            json!({"date": null, "type": "  ", "odometer_km": "", "notes": null}),
            json!("Olie"),
            json!(42),
            json!({"type": "Olie"}),
        ];
        let events = normalize_records(&raw);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].service_type, "Olie");
    }

    #[test]
    fn record_with_only_malformed_date_is_kept() {
        let e = normalize_record(&json!({"date": "gisteren"})).unwrap();
        assert_eq!(e.date, None);
        assert_eq!(e.service_type, "");
    }

    #[test]
    fn parses_history_text() {
        let events = parse_history_json(
            r#"[{"datum":"2023-05-10","type":"Olie + filter","km_stand":48000}]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].odometer_km, Some(48000));
    }

    #[test]
    fn rejects_non_list_history_text() {
        assert!(matches!(
            parse_history_json(r#"{"type":"Olie"}"#),
            Err(AdvisorError::HistoryNotAList { found: "an object" })
        ));
        assert!(matches!(parse_history_json("[oops"), Err(AdvisorError::InvalidJson(_))));
    }
}
