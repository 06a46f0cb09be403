/// DSG / automatic gearbox oil for VAG models, roughly every 60.000 km.
///
/// The model is only known through the free-text identifier, so any
/// identifier carrying a VW or Tiguan marker qualifies.
use super::{predicates::near_threshold, AdvicePayload, RuleContext};
use crate::engine::Urgency;

pub const KEY: &str = "transmission";
const INTERVAL_KM: u64 = 60_000;
const WINDOW_KM:   u64 = 5_000;

pub const ADVICE: AdvicePayload = AdvicePayload {
    category:       "Transmissie",
    recommendation: "Ververs automaat-/DSG-olie indien van toepassing",
    urgency:        Urgency::Normaal,
    rationale:      Some("Veel VAG-automaten: elke ~60.000 km"),
    estimated_cost: 350,
};

pub fn applies(ctx: &RuleContext) -> bool {
    ctx.vehicle.is_vw_model() && near_threshold(ctx.vehicle.odometer_km, INTERVAL_KM, WINDOW_KM)
}
