/// Engine air filter every 30.000 km.
use super::{predicates::near_threshold, AdvicePayload, RuleContext};
use crate::engine::Urgency;

pub const KEY: &str = "air_filter";
const INTERVAL_KM: u64 = 30_000;
const WINDOW_KM:   u64 = 5_000;

pub const ADVICE: AdvicePayload = AdvicePayload {
    category:       "Luchtfilter",
    recommendation: "Vervang luchtfilter",
    urgency:        Urgency::Normaal,
    rationale:      Some("Elke 30.000 km of bij vermogensverlies"),
    estimated_cost: 35,
};

pub fn applies(ctx: &RuleContext) -> bool {
    near_threshold(ctx.vehicle.odometer_km, INTERVAL_KM, WINDOW_KM)
}
