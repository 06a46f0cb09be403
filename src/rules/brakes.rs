/// Brake inspection, driven purely by reported complaints.
use super::{predicates::mentions_any, AdvicePayload, RuleContext};
use crate::engine::Urgency;

pub const KEY: &str = "brakes";

const BRAKE_COMPLAINTS: &[&str] = &[
    "trillen",
    "piepen",
    "scheef trekken",
    "zwakke remmen",
    "lange remweg",
];

pub const ADVICE: AdvicePayload = AdvicePayload {
    category:       "Remmen",
    recommendation: "Controleer schijven/blokken en remvloeistof",
    urgency:        Urgency::Hoog,
    rationale:      Some("Klachten duiden op verhoogde slijtage of ongelijkmatige aanname"),
    estimated_cost: 250,
};

pub fn applies(ctx: &RuleContext) -> bool {
    ctx.vehicle
        .complaints
        .iter()
        .any(|c| mentions_any(c, BRAKE_COMPLAINTS))
}
