//! Window membership, ordering and the edit window for dashboard records.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::window::{CustomRange, DateRange, TimeWindow, WeekStart, resolve_window};
use crate::types::Timestamped;

/// How long after submitting an employee may still change a response.
pub const EDIT_WINDOW_HOURS: i64 = 3;

/// Inclusive range test with open sides for missing bounds.
pub fn in_range(
    instant: DateTime<Utc>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> bool {
    DateRange { start, end }.contains(instant)
}

/// Keep the items inside `range`, preserving their order.
///
/// Items without a timestamp are only kept when the range is unbounded.
pub fn filter_in_range<'a, T: Timestamped>(items: &'a [T], range: &DateRange) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| match item.timestamp() {
            Some(ts) => range.contains(ts),
            None => range.is_unbounded(),
        })
        .collect()
}

/// Resolve `window` once against `now` and filter `items` with it.
pub fn filter_by_window<'a, T: Timestamped, Tz: TimeZone>(
    items: &'a [T],
    window: TimeWindow,
    now: &DateTime<Tz>,
    custom: Option<&CustomRange>,
    week_start: WeekStart,
) -> Vec<&'a T> {
    let range = resolve_window(window, now, custom, week_start);
    filter_in_range(items, &range)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

/// Stable sort on the millisecond timestamp; equal timestamps keep their
/// input order in both directions.
pub fn sort_by_timestamp<T: Timestamped>(items: &mut [T], order: SortOrder) {
    let key = |item: &T| item.timestamp().map(|ts| ts.timestamp_millis());
    match order {
        SortOrder::Asc => items.sort_by(|a, b| key(a).cmp(&key(b))),
        SortOrder::Desc => items.sort_by(|a, b| key(b).cmp(&key(a))),
    }
}

/// A response stays editable while less than three hours have passed.
pub fn is_editable<Tz: TimeZone>(submitted_at: DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    let cutoff = now.with_timezone(&Utc) - TimeDelta::hours(EDIT_WINDOW_HOURS);
    submitted_at > cutoff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Employee, Form};

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, Option<&'static str>);

    impl Timestamped for Item {
        fn timestamp(&self) -> Option<DateTime<Utc>> {
            self.1.map(at)
        }
    }

    fn form(id: &str, created_at: &str) -> Form {
        Form {
            id: id.to_string(),
            title: format!("Form {}", id),
            description: None,
            created_at: at(created_at),
            assigned_to: Vec::new(),
            time_restrictions: None,
        }
    }

    fn employee(id: &str, created_at: Option<&str>) -> Employee {
        Employee {
            id: id.to_string(),
            name: None,
            created_at: created_at.map(at),
            is_approved: None,
        }
    }

    #[test]
    fn test_in_range_matches_date_range() {
        let start = at("2024-06-01T00:00:00Z");
        let end = at("2024-06-30T00:00:00Z");
        assert!(in_range(at("2024-06-15T00:00:00Z"), Some(start), Some(end)));
        assert!(in_range(end, Some(start), Some(end)));
        assert!(!in_range(at("2024-07-01T00:00:00Z"), Some(start), Some(end)));
        assert!(in_range(at("1900-01-01T00:00:00Z"), None, None));
    }

    #[test]
    fn test_filter_by_window_keeps_order() {
        let forms = vec![
            form("a", "2024-06-15T09:00:00Z"),
            form("b", "2024-06-10T09:00:00Z"),
            form("c", "2024-06-15T01:00:00Z"),
            form("d", "2024-06-16T00:00:00Z"),
        ];
        let now = at("2024-06-15T10:00:00Z");

        let today: Vec<_> =
            filter_by_window(&forms, TimeWindow::Today, &now, None, WeekStart::Sunday)
                .into_iter()
                .map(|f| f.id.as_str())
                .collect();
        // Midnight of the next day is still inside the inclusive upper bound.
        assert_eq!(today, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_employees_without_date_only_shown_unfiltered() {
        let employees = vec![
            employee("dated", Some("2024-06-14T12:00:00Z")),
            employee("undated", None),
        ];
        let now = at("2024-06-15T10:00:00Z");

        let all = filter_by_window(&employees, TimeWindow::All, &now, None, WeekStart::Sunday);
        assert_eq!(all.len(), 2);

        let recent =
            filter_by_window(&employees, TimeWindow::Last7Days, &now, None, WeekStart::Sunday);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, "dated");
    }

    #[test]
    fn test_custom_empty_behaves_like_all() {
        let employees = vec![
            employee("dated", Some("2001-01-01T00:00:00Z")),
            employee("undated", None),
        ];
        let now = at("2024-06-15T10:00:00Z");
        let empty = CustomRange::default();

        let all = filter_by_window(&employees, TimeWindow::All, &now, None, WeekStart::Sunday);
        let custom =
            filter_by_window(&employees, TimeWindow::Custom, &now, Some(&empty), WeekStart::Sunday);
        assert_eq!(all.len(), custom.len());
        assert!(all.iter().zip(&custom).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_sort_is_stable_both_ways() {
        let mut items = vec![
            Item("first", Some("2024-06-01T00:00:00Z")),
            Item("late", Some("2024-06-03T00:00:00Z")),
            Item("second", Some("2024-06-01T00:00:00Z")),
            Item("early", Some("2024-05-01T00:00:00Z")),
            Item("third", Some("2024-06-01T00:00:00Z")),
        ];

        sort_by_timestamp(&mut items, SortOrder::Asc);
        let names: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["early", "first", "second", "third", "late"]);

        sort_by_timestamp(&mut items, SortOrder::Desc);
        let names: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["late", "first", "second", "third", "early"]);
    }

    #[test]
    fn test_sort_references() {
        let items = [
            Item("b", Some("2024-06-02T00:00:00Z")),
            Item("a", Some("2024-06-01T00:00:00Z")),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();
        sort_by_timestamp(&mut refs, SortOrder::Asc);
        assert_eq!(refs[0].0, "a");
    }

    #[test]
    fn test_edit_window() {
        let now = at("2024-06-15T12:00:00Z");
        assert!(is_editable(at("2024-06-15T09:01:00Z"), &now));
        assert!(!is_editable(at("2024-06-15T08:59:00Z"), &now));
        // Exactly three hours is already too late.
        assert!(!is_editable(at("2024-06-15T09:00:00Z"), &now));
        assert!(is_editable(at("2024-06-15T09:00:00.001Z"), &now));
    }
}
