/// Throttle body / PCV valve check on a rough idle complaint.
use super::{predicates::mentions_any, AdvicePayload, RuleContext};
use crate::engine::Urgency;

pub const KEY: &str = "intake_pcv";
const ROUGH_IDLE: &[&str] = &["onregelmatig stationair"];

pub const ADVICE: AdvicePayload = AdvicePayload {
    category:       "Inlaat/PCV",
    recommendation: "Controleer gasklepbehuizing en PCV-klep op vervuiling/defect",
    urgency:        Urgency::Normaal,
    rationale:      None,
    estimated_cost: 120,
};

pub fn applies(ctx: &RuleContext) -> bool {
    ctx.vehicle.complaints.iter().any(|c| mentions_any(c, ROUGH_IDLE))
}
