use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Event, Monument, TimeOfDay};

/// Category affinity score (0 or 1)
///
/// Exact, case-sensitive string equality against the visitor's preferred
/// category. There is no partial credit for related categories; a
/// preference no monument carries simply scores 0 everywhere.
#[inline]
pub fn category_match_score(category: &str, preferred_category: &str) -> f64 {
    if category == preferred_category {
        1.0
    } else {
        0.0
    }
}

/// Popularity score (0-1)
///
/// Pass-through of the stored value; the catalog author owns the
/// normalization.
#[inline]
pub fn popularity_score(monument: &Monument) -> f64 {
    monument.popularity
}

/// Relevance of a single event window on a given date
///
/// 1.0 while the event is running (both endpoints inclusive), 0.5 when it
/// starts within a week, 0.2 when it starts within two weeks, otherwise
/// 0.0. An event that has already ended scores 0.0 — there is no
/// post-end decay window.
#[inline]
pub fn single_event_score(event: &Event, date: NaiveDate) -> f64 {
    if date >= event.start_date && date <= event.end_date {
        return 1.0;
    }

    if date < event.start_date {
        let days_until = (event.start_date - date).num_days();
        if days_until <= 7 {
            return 0.5;
        }
        if days_until <= 14 {
            return 0.2;
        }
    }

    0.0
}

/// Best event-relevance score across a monument's associated events
///
/// A monument tied to several festivals takes the best-matching one.
/// Names that resolve to no known event contribute 0.0 rather than
/// failing; monuments with no events score 0.0.
pub fn event_relevance_score(
    monument: &Monument,
    events_by_name: &HashMap<String, Event>,
    date: NaiveDate,
) -> f64 {
    monument
        .events
        .iter()
        .filter_map(|name| events_by_name.get(name))
        .map(|event| single_event_score(event, date))
        .fold(0.0, f64::max)
}

/// Time-of-day fit for the hour of the evaluation instant
///
/// Morning window (hour < 12): morning monuments 1.0, afternoon 0.5.
/// Afternoon window (12-16): afternoon monuments 0.5. Evening window
/// (hour >= 17): evening monuments 0.5. Only the morning window ever
/// awards a full 1.0.
#[inline]
pub fn time_of_day_score(best_time: TimeOfDay, hour: u32) -> f64 {
    if hour < 12 {
        match best_time {
            TimeOfDay::Morning => 1.0,
            TimeOfDay::Afternoon => 0.5,
            TimeOfDay::Evening => 0.0,
        }
    } else if hour < 17 {
        match best_time {
            TimeOfDay::Afternoon => 0.5,
            _ => 0.0,
        }
    } else {
        match best_time {
            TimeOfDay::Evening => 0.5,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Season, TimeOfDay};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(name: &str, start: NaiveDate, end: NaiveDate) -> Event {
        Event {
            name: name.to_string(),
            start_date: start,
            end_date: end,
            related_category: "Hindu Temples".to_string(),
        }
    }

    fn monument_with_events(events: Vec<&str>) -> Monument {
        Monument {
            id: 1,
            name: "Taleju Temple".to_string(),
            latitude: 27.7108,
            longitude: 85.2980,
            location: "Kathmandu, Nepal".to_string(),
            category: "Hindu Temple".to_string(),
            popularity: 0.9,
            indoor: false,
            best_season: Season::All,
            best_time: TimeOfDay::Morning,
            events: events.into_iter().map(String::from).collect(),
            description: String::new(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_category_match_is_exact_and_case_sensitive() {
        assert_eq!(category_match_score("Hindu Temple", "Hindu Temple"), 1.0);
        assert_eq!(category_match_score("hindu temple", "Hindu Temple"), 0.0);
        assert_eq!(category_match_score("Museum", "Hindu Temple"), 0.0);
    }

    #[test]
    fn test_event_active_scores_one() {
        let e = event("Dashain Festival", date(2025, 10, 10), date(2025, 10, 24));

        assert_eq!(single_event_score(&e, date(2025, 10, 15)), 1.0);
        // Both endpoints are inclusive
        assert_eq!(single_event_score(&e, date(2025, 10, 10)), 1.0);
        assert_eq!(single_event_score(&e, date(2025, 10, 24)), 1.0);
    }

    #[test]
    fn test_event_upcoming_tiers() {
        let e = event("Tihar Festival", date(2025, 11, 1), date(2025, 11, 5));

        // 5 days out
        assert_eq!(single_event_score(&e, date(2025, 10, 27)), 0.5);
        // Exactly a week out
        assert_eq!(single_event_score(&e, date(2025, 10, 25)), 0.5);
        // 10 days out
        assert_eq!(single_event_score(&e, date(2025, 10, 22)), 0.2);
        // Exactly two weeks out
        assert_eq!(single_event_score(&e, date(2025, 10, 18)), 0.2);
        // 15 days out
        assert_eq!(single_event_score(&e, date(2025, 10, 17)), 0.0);
    }

    #[test]
    fn test_event_over_scores_zero_without_decay() {
        let e = event("Holi Festival", date(2025, 3, 10), date(2025, 3, 11));

        // The day after the window closes the score drops straight to zero
        assert_eq!(single_event_score(&e, date(2025, 3, 12)), 0.0);
        assert_eq!(single_event_score(&e, date(2025, 6, 1)), 0.0);
    }

    #[test]
    fn test_monument_takes_best_event() {
        let mut events_by_name = HashMap::new();
        events_by_name.insert(
            "Maha Shivaratri".to_string(),
            event("Maha Shivaratri", date(2025, 2, 25), date(2025, 2, 26)),
        );
        events_by_name.insert(
            "Tihar Festival".to_string(),
            event("Tihar Festival", date(2025, 11, 1), date(2025, 11, 5)),
        );

        let monument = monument_with_events(vec!["Maha Shivaratri", "Tihar Festival"]);

        // Tihar is active; the long-finished Shivaratri must not drag it down
        assert_eq!(
            event_relevance_score(&monument, &events_by_name, date(2025, 11, 2)),
            1.0
        );
    }

    #[test]
    fn test_unknown_event_name_contributes_zero() {
        let events_by_name = HashMap::new();
        let monument = monument_with_events(vec!["No Such Festival"]);

        assert_eq!(
            event_relevance_score(&monument, &events_by_name, date(2025, 11, 2)),
            0.0
        );
    }

    #[test]
    fn test_no_events_scores_zero() {
        let events_by_name = HashMap::new();
        let monument = monument_with_events(vec![]);

        assert_eq!(
            event_relevance_score(&monument, &events_by_name, date(2025, 11, 2)),
            0.0
        );
    }

    #[test]
    fn test_morning_window() {
        assert_eq!(time_of_day_score(TimeOfDay::Morning, 9), 1.0);
        assert_eq!(time_of_day_score(TimeOfDay::Afternoon, 9), 0.5);
        assert_eq!(time_of_day_score(TimeOfDay::Evening, 9), 0.0);
        assert_eq!(time_of_day_score(TimeOfDay::Morning, 0), 1.0);
        assert_eq!(time_of_day_score(TimeOfDay::Morning, 11), 1.0);
    }

    #[test]
    fn test_afternoon_window_caps_at_half() {
        assert_eq!(time_of_day_score(TimeOfDay::Afternoon, 12), 0.5);
        assert_eq!(time_of_day_score(TimeOfDay::Afternoon, 16), 0.5);
        assert_eq!(time_of_day_score(TimeOfDay::Morning, 14), 0.0);
        assert_eq!(time_of_day_score(TimeOfDay::Evening, 14), 0.0);
    }

    #[test]
    fn test_evening_window_caps_at_half() {
        assert_eq!(time_of_day_score(TimeOfDay::Evening, 17), 0.5);
        assert_eq!(time_of_day_score(TimeOfDay::Evening, 23), 0.5);
        assert_eq!(time_of_day_score(TimeOfDay::Morning, 19), 0.0);
        assert_eq!(time_of_day_score(TimeOfDay::Afternoon, 19), 0.0);
    }
}
