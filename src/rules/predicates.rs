/// Helper predicates shared across rules.
///
/// Odometer windows are symmetric around every multiple of the service
/// interval: a car 1.500 km past its 60.000 km service is as "due" as one
/// 1.500 km short of it.
///
/// History lookback works on whole days between the event date and `today`.
/// The difference is not clamped, so an event dated in the future counts as
/// recent. Events without a date never match.
use crate::history::MaintenanceEvent;
use chrono::NaiveDate;

/// True if `odometer` lies within `window` of a multiple of `interval`.
pub fn near_threshold(odometer: u64, interval: u64, window: u64) -> bool {
    if interval == 0 {
        return false;
    }
    let r = odometer % interval;
    r <= window || interval - r <= window
}

/// Case-insensitive substring match of any keyword.
pub fn mentions_any(haystack: &str, keywords: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords.iter().any(|k| haystack.contains(&k.to_lowercase()))
}

/// Day-ages of dated events whose service type mentions a keyword.
fn matching_ages<'a>(
    history:  &'a [MaintenanceEvent],
    keywords: &'a [&'a str],
    today:    NaiveDate,
) -> impl Iterator<Item = i64> + 'a {
    history
        .iter()
        .filter(move |e| mentions_any(&e.service_type, keywords))
        .filter_map(move |e| e.date.map(|d| today.signed_duration_since(d).num_days()))
}

pub fn had_event_within(
    history:  &[MaintenanceEvent],
    keywords: &[&str],
    days:     i64,
    today:    NaiveDate,
) -> bool {
    matching_ages(history, keywords, today).any(|age| age <= days)
}

/// Age of the most recent matching event, or None if no dated event matches.
pub fn last_event_age_days(
    history:  &[MaintenanceEvent],
    keywords: &[&str],
    today:    NaiveDate,
) -> Option<i64> {
    matching_ages(history, keywords, today).min()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{days_ago, today};
    use chrono::Days;

    #[test]
    fn near_threshold_at_cycle_edges() {
        for (interval, window) in [(15_000, 3_000), (30_000, 5_000), (60_000, 5_000)] {
            assert!(near_threshold(0, interval, window));
            assert!(near_threshold(interval, interval, window));
            assert!(near_threshold(interval - window, interval, window));
            assert!(near_threshold(window, interval, window));
            assert!(!near_threshold(interval / 2, interval, window));
        }
    }

    #[test]
    fn near_threshold_just_outside_window() {
        assert!(!near_threshold(3_001, 15_000, 3_000));
        assert!(!near_threshold(11_999, 15_000, 3_000));
        assert!(near_threshold(61_500, 15_000, 3_000));
        assert!(near_threshold(121_000, 60_000, 5_000));
    }

    #[test]
    fn near_threshold_zero_interval_is_never_near() {
        assert!(!near_threshold(0, 0, 5_000));
        assert!(!near_threshold(10_000, 0, 5_000));
    }

    #[test]
    fn mentions_any_is_case_insensitive_substring() {
        assert!(mentions_any("Remvloeistof + olie verversen", &["remvloeistof"]));
        assert!(mentions_any("Remvloeistof + olie verversen", &["OLIE"]));
        assert!(!mentions_any("Banden wisselen", &["olie", "remvloeistof"]));
        assert!(!mentions_any("", &["olie"]));
    }

    #[test]
    fn had_event_within_respects_window() {
        let history = vec![MaintenanceEvent::new(Some(days_ago(30)), "Remvloeistof verversen")];
        assert!(had_event_within(&history, &["remvloeistof"], 730, today()));
        assert!(had_event_within(&history, &["remvloeistof"], 30, today()));
        assert!(!had_event_within(&history, &["remvloeistof"], 29, today()));
        assert!(!had_event_within(&history, &["pollenfilter"], 730, today()));
    }

    #[test]
    fn dateless_events_never_match() {
        let history = vec![MaintenanceEvent::new(None, "Remvloeistof verversen")];
        assert!(!had_event_within(&history, &["remvloeistof"], i64::MAX, today()));
        assert_eq!(last_event_age_days(&history, &["remvloeistof"], today()), None);
    }

    #[test]
    fn future_dated_events_count_as_recent() {
        let future = today().checked_add_days(Days::new(10)).unwrap();
        let history = vec![MaintenanceEvent::new(Some(future), "Pollenfilter")];
        assert!(had_event_within(&history, &["pollenfilter"], 365, today()));
        assert_eq!(last_event_age_days(&history, &["pollenfilter"], today()), Some(-10));
    }

    #[test]
    fn last_event_age_picks_most_recent_regardless_of_order() {
        let history = vec![
            MaintenanceEvent::new(Some(days_ago(400)), "Olie + filter"),
            MaintenanceEvent::new(Some(days_ago(90)), "Kleine beurt, olie"),
            MaintenanceEvent::new(None, "Olie"),
            MaintenanceEvent::new(Some(days_ago(10)), "APK"),
        ];
        assert_eq!(last_event_age_days(&history, &["olie"], today()), Some(90));

        let mut reversed = history.clone();
        reversed.reverse();
        assert_eq!(last_event_age_days(&reversed, &["olie"], today()), Some(90));
    }
}
