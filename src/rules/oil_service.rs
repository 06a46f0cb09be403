/// Small service (oil + oil filter): yearly or every 15.000 km.
///
/// Fires when the most recent oil service in the history is more than a year
/// old, when no dated oil service is recorded at all, or when the odometer is
/// within 3.000 km of a 15.000 km multiple. Either condition alone is enough.
///
/// Keywords match as substrings, so a gearbox entry such as "DSG-olie
/// verversen" also counts as an oil service and quiets this rule.
use super::{
    predicates::{last_event_age_days, near_threshold},
    AdvicePayload, RuleContext,
};
use crate::engine::Urgency;

pub const KEY: &str = "oil_service";
const INTERVAL_KM:  u64 = 15_000;
const WINDOW_KM:    u64 = 3_000;
const MAX_AGE_DAYS: i64 = 365;

/// Service types that include an oil change.
const KEYWORDS: &[&str] = &["olie", "oil", "kleine beurt", "grote beurt"];

pub const ADVICE: AdvicePayload = AdvicePayload {
    category:       "Motorolie & filter",
    recommendation: "Plan een kleine beurt (olie + oliefilter)",
    urgency:        Urgency::Normaal,
    rationale:      Some("Richtlijn elke 15.000 km of jaarlijks"),
    estimated_cost: 180,
};

pub fn applies(ctx: &RuleContext) -> bool {
    let overdue_by_age = match last_event_age_days(ctx.history, KEYWORDS, ctx.today) {
        Some(age) => age > MAX_AGE_DAYS,
        None      => true,
    };
    overdue_by_age || near_threshold(ctx.vehicle.odometer_km, INTERVAL_KM, WINDOW_KM)
}
