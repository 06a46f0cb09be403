/// Brake fluid every two years; it absorbs moisture over time.
use super::{predicates::had_event_within, AdvicePayload, RuleContext};
use crate::engine::Urgency;

pub const KEY: &str = "brake_fluid";
const LOOKBACK_DAYS: i64 = 730;
const KEYWORDS: &[&str] = &["remvloeistof"];

pub const ADVICE: AdvicePayload = AdvicePayload {
    category:       "Remvloeistof",
    recommendation: "Ververs remvloeistof",
    urgency:        Urgency::Normaal,
    rationale:      Some("Elke 2 jaar i.v.m. hygroscopische werking"),
    estimated_cost: 70,
};

pub fn applies(ctx: &RuleContext) -> bool {
    !had_event_within(ctx.history, KEYWORDS, LOOKBACK_DAYS, ctx.today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MaintenanceEvent;
    use crate::rules::testing::{ctx, days_ago, vehicle};

    #[test]
    fn recent_flush_is_quiet() {
        let v = vehicle(50_000);
        let history = [MaintenanceEvent::new(Some(days_ago(30)), "Remvloeistof verversen")];
        assert!(!applies(&ctx(&v, &history)));
    }

    #[test]
    fn old_flush_fires() {
        let v = vehicle(50_000);
        let history = [MaintenanceEvent::new(Some(days_ago(800)), "Remvloeistof verversen")];
        assert!(applies(&ctx(&v, &history)));
    }

    #[test]
    fn dateless_flush_fires() {
        let v = vehicle(50_000);
        let history = [MaintenanceEvent::new(None, "Remvloeistof verversen")];
        assert!(applies(&ctx(&v, &history)));
    }

    #[test]
    fn combined_service_entry_matches() {
        let v = vehicle(50_000);
        let history = [MaintenanceEvent::new(Some(days_ago(700)), "Remvloeistof + olie verversen")];
        assert!(!applies(&ctx(&v, &history)));
    }

    #[test]
    fn history_order_does_not_matter() {
        let v = vehicle(50_000);
        let mut history = vec![
            MaintenanceEvent::new(Some(days_ago(800)), "Remvloeistof"),
            MaintenanceEvent::new(Some(days_ago(5)), "APK"),
            MaintenanceEvent::new(Some(days_ago(729)), "remvloeistof vervangen"),
        ];
        assert!(!applies(&ctx(&v, &history)));
        history.reverse();
        assert!(!applies(&ctx(&v, &history)));
    }
}
