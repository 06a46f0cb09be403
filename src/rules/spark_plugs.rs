/// Spark plugs on petrol engines, roughly every 60.000 km.
use super::{predicates::near_threshold, AdvicePayload, RuleContext};
use crate::{engine::Urgency, vehicle::FuelType};

pub const KEY: &str = "spark_plugs";
const INTERVAL_KM: u64 = 60_000;
const WINDOW_KM:   u64 = 5_000;

pub const ADVICE: AdvicePayload = AdvicePayload {
    category:       "Bougies",
    recommendation: "Vervang bougies",
    urgency:        Urgency::Normaal,
    rationale:      Some("Benzinemotor, elke ~60.000 km"),
    estimated_cost: 140,
};

pub fn applies(ctx: &RuleContext) -> bool {
    ctx.vehicle.fuel_type == FuelType::Benzine
        && near_threshold(ctx.vehicle.odometer_km, INTERVAL_KM, WINDOW_KM)
}
