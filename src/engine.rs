/// Maintenance rule evaluator.
///
/// `evaluate` is a pure function of the vehicle state, the normalized history
/// and the evaluation date. It runs every rule in `rules::RULES` in order,
/// independently of one another, and collects the advice of the rules that
/// hold. It never fails: malformed input has already been degraded by the
/// history normalizer and the request layer.
///
/// `today` is passed in explicitly. Callers that want the wall clock use
/// `evaluate_now`, which reads it exactly once.
use crate::{
    history::MaintenanceEvent,
    rules::{RuleContext, RULES},
    vehicle::{FuelType, VehicleState},
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Laag,
    Normaal,
    Hoog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceItem {
    pub category:       String,
    pub recommendation: String,
    pub urgency:        Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale:      Option<String>,
    /// Indicative price in euros.
    pub estimated_cost: u32,
}

/// Vehicle identity echoed back next to the advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub identifier: String,
    pub fuel_type:  FuelType,
}

/// Advice list plus the context it was computed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceReport {
    pub vehicle:              VehicleSummary,
    /// Serialized as `YYYY-MM-DD`.
    pub evaluation_date:      NaiveDate,
    pub odometer_km:          u64,
    pub advice:               Vec<AdviceItem>,
    pub total_estimated_cost: u64,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

pub fn evaluate(
    vehicle: &VehicleState,
    history: &[MaintenanceEvent],
    today:   NaiveDate,
) -> Vec<AdviceItem> {
    let ctx = RuleContext { vehicle, history, today };

    RULES
        .iter()
        .filter_map(|rule| {
            let advice = rule.evaluate(&ctx);
            if advice.is_some() {
                tracing::debug!("Rule '{}' fired for {}", rule.key, vehicle.identifier);
            }
            advice
        })
        .collect()
}

/// Evaluate against the local calendar date, captured once.
pub fn evaluate_now(vehicle: &VehicleState, history: &[MaintenanceEvent]) -> Vec<AdviceItem> {
    evaluate(vehicle, history, Local::now().date_naive())
}

/// Evaluate and wrap the result with the evaluation context.
pub fn build_report(
    vehicle: &VehicleState,
    history: &[MaintenanceEvent],
    today:   NaiveDate,
) -> AdviceReport {
    let advice = evaluate(vehicle, history, today);
    let total_estimated_cost: u64 = advice.iter().map(|a| u64::from(a.estimated_cost)).sum();

    tracing::info!(
        "Evaluated {} on {}: {} advice item(s), est. EUR {}",
        vehicle.identifier, today, advice.len(), total_estimated_cost
    );

    AdviceReport {
        vehicle: VehicleSummary {
            identifier: vehicle.identifier.clone(),
            fuel_type:  vehicle.fuel_type,
        },
        evaluation_date: today,
        odometer_km:     vehicle.odometer_km,
        advice,
        total_estimated_cost,
    }
}
