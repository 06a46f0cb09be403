/// Cabin (pollen) filter, yearly.
use super::{predicates::had_event_within, AdvicePayload, RuleContext};
use crate::engine::Urgency;

pub const KEY: &str = "cabin_filter";
const LOOKBACK_DAYS: i64 = 365;
const KEYWORDS: &[&str] = &["pollenfilter", "interieurfilter"];

pub const ADVICE: AdvicePayload = AdvicePayload {
    category:       "Interieur/pollenfilter",
    recommendation: "Vervang interieurfilter",
    urgency:        Urgency::Laag,
    rationale:      Some("Aanbevolen jaarlijks voor schone lucht in de cabine"),
    estimated_cost: 30,
};

pub fn applies(ctx: &RuleContext) -> bool {
    !had_event_within(ctx.history, KEYWORDS, LOOKBACK_DAYS, ctx.today)
}
