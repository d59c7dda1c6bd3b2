//! Named dashboard periods and the date ranges they stand for.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::calendar::{local_midnight, month_start};

/// Period picked in the dashboard's filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    All,
    Today,
    Yesterday,
    Last7Days,
    Last30Days,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
    /// Uses the [`CustomRange`] entered by the user.
    Custom,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 14] = [
        TimeWindow::All,
        TimeWindow::Today,
        TimeWindow::Yesterday,
        TimeWindow::Last7Days,
        TimeWindow::Last30Days,
        TimeWindow::ThisWeek,
        TimeWindow::LastWeek,
        TimeWindow::ThisMonth,
        TimeWindow::LastMonth,
        TimeWindow::ThisQuarter,
        TimeWindow::LastQuarter,
        TimeWindow::ThisYear,
        TimeWindow::LastYear,
        TimeWindow::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::All => "all",
            TimeWindow::Today => "today",
            TimeWindow::Yesterday => "yesterday",
            TimeWindow::Last7Days => "last7days",
            TimeWindow::Last30Days => "last30days",
            TimeWindow::ThisWeek => "thisweek",
            TimeWindow::LastWeek => "lastweek",
            TimeWindow::ThisMonth => "thismonth",
            TimeWindow::LastMonth => "lastmonth",
            TimeWindow::ThisQuarter => "thisquarter",
            TimeWindow::LastQuarter => "lastquarter",
            TimeWindow::ThisYear => "thisyear",
            TimeWindow::LastYear => "lastyear",
            TimeWindow::Custom => "custom",
        }
    }

    /// Parse a dropdown token. Anything unrecognized means no filtering.
    pub fn from_token(token: &str) -> TimeWindow {
        let token = token.trim().to_lowercase();
        TimeWindow::ALL
            .into_iter()
            .find(|w| w.as_str() == token)
            .unwrap_or_else(|| {
                warn!(token = %token, "unknown time window, showing all");
                TimeWindow::All
            })
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeWindow {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TimeWindow::from_token(s))
    }
}

/// Which weekday opens a week for `thisweek` / `lastweek`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    fn days_into_week(&self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

/// Raw start/end strings from the custom date picker. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// A resolved interval. `None` leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive on both present bounds.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        match (self.start, self.end) {
            (None, None) => true,
            (None, Some(end)) => instant <= end,
            (Some(start), None) => instant >= start,
            (Some(start), Some(end)) => start <= instant && instant <= end,
        }
    }
}

/// Resolve `window` relative to `now`, in the time zone `now` carries.
///
/// `custom` is only read for [`TimeWindow::Custom`].
pub fn resolve_window<Tz: TimeZone>(
    window: TimeWindow,
    now: &DateTime<Tz>,
    custom: Option<&CustomRange>,
    week_start: WeekStart,
) -> DateRange {
    let tz = now.timezone();
    let today_date = now.date_naive();
    let today = local_midnight(&tz, today_date);
    let tomorrow = today + TimeDelta::hours(24);

    let calendar_start = |date: Option<NaiveDate>| date.map(|d| local_midnight(&tz, d));
    let month0 = today_date.month0() as i32;
    let quarter_month0 = (month0 / 3) * 3;
    let week_start_date = today_date
        .checked_sub_days(chrono::Days::new(u64::from(week_start.days_into_week(today_date))));

    let (start, end) = match window {
        TimeWindow::All => (None, None),
        TimeWindow::Today => (Some(today), Some(tomorrow)),
        TimeWindow::Yesterday => (Some(today - TimeDelta::hours(24)), Some(today)),
        TimeWindow::Last7Days => (Some(today - TimeDelta::days(7)), Some(tomorrow)),
        TimeWindow::Last30Days => (Some(today - TimeDelta::days(30)), Some(tomorrow)),
        TimeWindow::ThisWeek => (calendar_start(week_start_date), Some(tomorrow)),
        TimeWindow::LastWeek => (
            calendar_start(week_start_date.and_then(|d| d.checked_sub_days(chrono::Days::new(7)))),
            calendar_start(week_start_date),
        ),
        TimeWindow::ThisMonth => (
            calendar_start(month_start(now.year(), month0)),
            Some(tomorrow),
        ),
        TimeWindow::LastMonth => (
            calendar_start(month_start(now.year(), month0 - 1)),
            calendar_start(month_start(now.year(), month0)),
        ),
        TimeWindow::ThisQuarter => (
            calendar_start(month_start(now.year(), quarter_month0)),
            Some(tomorrow),
        ),
        TimeWindow::LastQuarter => (
            calendar_start(month_start(now.year(), quarter_month0 - 3)),
            calendar_start(month_start(now.year(), quarter_month0)),
        ),
        TimeWindow::ThisYear => (calendar_start(month_start(now.year(), 0)), Some(tomorrow)),
        TimeWindow::LastYear => (
            calendar_start(month_start(now.year() - 1, 0)),
            calendar_start(month_start(now.year(), 0)),
        ),
        TimeWindow::Custom => {
            let range = custom.cloned().unwrap_or_default();
            (parse_bound(&tz, &range.start), parse_bound(&tz, &range.end))
        }
    };

    DateRange { start, end }
}

/// Parse one side of a custom range.
///
/// Accepts RFC 3339, a local `YYYY-MM-DDTHH:MM[:SS]`, or a bare `YYYY-MM-DD`
/// which is read as UTC midnight like the browser date input does. Blank or
/// unparseable input leaves the side open.
fn parse_bound<Tz: TimeZone>(tz: &Tz, raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    warn!(value = raw, "unparseable custom date, leaving bound open");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn resolve(window: TimeWindow, now: &str) -> DateRange {
        resolve_window(window, &at(now), None, WeekStart::Sunday)
    }

    #[test]
    fn test_today() {
        let range = resolve(TimeWindow::Today, "2024-06-15T10:00:00Z");
        assert_eq!(range, DateRange::new(at("2024-06-15T00:00:00Z"), at("2024-06-16T00:00:00Z")));
    }

    #[test]
    fn test_today_in_viewer_time_zone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let range = resolve_window(TimeWindow::Today, &now, None, WeekStart::Sunday);
        assert_eq!(range.start, Some(at("2024-06-14T22:00:00Z")));
        assert_eq!(range.end, Some(at("2024-06-15T22:00:00Z")));
    }

    #[test]
    fn test_yesterday_and_rolling_windows() {
        let now = "2024-06-15T10:00:00Z";
        assert_eq!(
            resolve(TimeWindow::Yesterday, now),
            DateRange::new(at("2024-06-14T00:00:00Z"), at("2024-06-15T00:00:00Z"))
        );
        assert_eq!(
            resolve(TimeWindow::Last7Days, now),
            DateRange::new(at("2024-06-08T00:00:00Z"), at("2024-06-16T00:00:00Z"))
        );
        assert_eq!(
            resolve(TimeWindow::Last30Days, now),
            DateRange::new(at("2024-05-16T00:00:00Z"), at("2024-06-16T00:00:00Z"))
        );
    }

    #[test]
    fn test_weeks_sunday_start() {
        // 2024-06-15 is a Saturday.
        let now = "2024-06-15T10:00:00Z";
        assert_eq!(
            resolve(TimeWindow::ThisWeek, now),
            DateRange::new(at("2024-06-09T00:00:00Z"), at("2024-06-16T00:00:00Z"))
        );
        assert_eq!(
            resolve(TimeWindow::LastWeek, now),
            DateRange::new(at("2024-06-02T00:00:00Z"), at("2024-06-09T00:00:00Z"))
        );
    }

    #[test]
    fn test_weeks_monday_start() {
        let now = at("2024-06-15T10:00:00Z");
        let this_week = resolve_window(TimeWindow::ThisWeek, &now, None, WeekStart::Monday);
        assert_eq!(this_week.start, Some(at("2024-06-10T00:00:00Z")));

        let last_week = resolve_window(TimeWindow::LastWeek, &now, None, WeekStart::Monday);
        assert_eq!(
            last_week,
            DateRange::new(at("2024-06-03T00:00:00Z"), at("2024-06-10T00:00:00Z"))
        );
    }

    #[test]
    fn test_week_on_first_day_of_week() {
        // Sunday: the week starts today.
        let range = resolve(TimeWindow::ThisWeek, "2024-06-16T08:00:00Z");
        assert_eq!(range.start, Some(at("2024-06-16T00:00:00Z")));
    }

    #[test]
    fn test_months() {
        assert_eq!(
            resolve(TimeWindow::ThisMonth, "2024-03-20T12:00:00Z"),
            DateRange::new(at("2024-03-01T00:00:00Z"), at("2024-03-21T00:00:00Z"))
        );
        assert_eq!(
            resolve(TimeWindow::LastMonth, "2024-03-20T12:00:00Z"),
            DateRange::new(at("2024-02-01T00:00:00Z"), at("2024-03-01T00:00:00Z"))
        );
        assert_eq!(
            resolve(TimeWindow::LastMonth, "2024-01-05T12:00:00Z"),
            DateRange::new(at("2023-12-01T00:00:00Z"), at("2024-01-01T00:00:00Z"))
        );
    }

    #[test]
    fn test_quarters() {
        assert_eq!(
            resolve(TimeWindow::ThisQuarter, "2024-08-10T12:00:00Z"),
            DateRange::new(at("2024-07-01T00:00:00Z"), at("2024-08-11T00:00:00Z"))
        );
        assert_eq!(
            resolve(TimeWindow::LastQuarter, "2024-08-10T12:00:00Z"),
            DateRange::new(at("2024-04-01T00:00:00Z"), at("2024-07-01T00:00:00Z"))
        );
        assert_eq!(
            resolve(TimeWindow::LastQuarter, "2024-02-10T12:00:00Z"),
            DateRange::new(at("2023-10-01T00:00:00Z"), at("2024-01-01T00:00:00Z"))
        );
    }

    #[test]
    fn test_years() {
        assert_eq!(
            resolve(TimeWindow::ThisYear, "2024-06-15T10:00:00Z"),
            DateRange::new(at("2024-01-01T00:00:00Z"), at("2024-06-16T00:00:00Z"))
        );
        assert_eq!(
            resolve(TimeWindow::LastYear, "2024-06-15T10:00:00Z"),
            DateRange::new(at("2023-01-01T00:00:00Z"), at("2024-01-01T00:00:00Z"))
        );
    }

    #[test]
    fn test_all_is_unbounded() {
        assert!(resolve(TimeWindow::All, "2024-06-15T10:00:00Z").is_unbounded());
    }

    #[test]
    fn test_unknown_token_means_all() {
        assert_eq!(TimeWindow::from_token("fortnight"), TimeWindow::All);
        assert_eq!(TimeWindow::from_token(" Last7Days "), TimeWindow::Last7Days);
        assert_eq!("lastquarter".parse::<TimeWindow>().unwrap(), TimeWindow::LastQuarter);
    }

    #[test]
    fn test_custom_bounds() {
        let now = at("2024-06-15T10:00:00Z");
        let custom = CustomRange {
            start: "2024-06-01".to_string(),
            end: "2024-06-10T18:30".to_string(),
        };
        let range = resolve_window(TimeWindow::Custom, &now, Some(&custom), WeekStart::Sunday);
        assert_eq!(range.start, Some(at("2024-06-01T00:00:00Z")));
        assert_eq!(range.end, Some(at("2024-06-10T18:30:00Z")));
    }

    #[test]
    fn test_custom_local_time_uses_viewer_zone() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        let custom = CustomRange {
            start: "2024-06-01T08:00:00".to_string(),
            end: "2024-06-02T00:00:00+02:00".to_string(),
        };
        let range = resolve_window(TimeWindow::Custom, &now, Some(&custom), WeekStart::Sunday);
        assert_eq!(range.start, Some(at("2024-06-01T13:00:00Z")));
        assert_eq!(range.end, Some(at("2024-06-01T22:00:00Z")));
    }

    #[test]
    fn test_custom_empty_or_malformed_is_open() {
        let now = at("2024-06-15T10:00:00Z");
        let empty = CustomRange::default();
        let range = resolve_window(TimeWindow::Custom, &now, Some(&empty), WeekStart::Sunday);
        assert!(range.is_unbounded());
        assert!(resolve_window(TimeWindow::Custom, &now, None, WeekStart::Sunday).is_unbounded());

        let half = CustomRange {
            start: "not a date".to_string(),
            end: "2024-06-10".to_string(),
        };
        let range = resolve_window(TimeWindow::Custom, &now, Some(&half), WeekStart::Sunday);
        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(at("2024-06-10T00:00:00Z")));
    }

    #[test]
    fn test_custom_ignored_for_named_windows() {
        let now = at("2024-06-15T10:00:00Z");
        let custom = CustomRange {
            start: "2020-01-01".to_string(),
            end: "2020-01-02".to_string(),
        };
        let range = resolve_window(TimeWindow::All, &now, Some(&custom), WeekStart::Sunday);
        assert!(range.is_unbounded());
    }

    #[test]
    fn test_contains_inclusive_bounds() {
        let range = DateRange::new(at("2024-06-15T00:00:00Z"), at("2024-06-16T00:00:00Z"));
        assert!(range.contains(at("2024-06-15T00:00:00Z")));
        assert!(range.contains(at("2024-06-16T00:00:00Z")));
        assert!(!range.contains(at("2024-06-16T00:00:00.001Z")));
        assert!(!range.contains(at("2024-06-14T23:59:59Z")));
    }

    #[test]
    fn test_contains_half_open_sides() {
        let pivot = at("2024-06-15T00:00:00Z");
        let up_to = DateRange {
            start: None,
            end: Some(pivot),
        };
        assert!(up_to.contains(at("1970-01-01T00:00:00Z")));
        assert!(up_to.contains(pivot));
        assert!(!up_to.contains(at("2024-06-15T00:00:01Z")));

        let from = DateRange {
            start: Some(pivot),
            end: None,
        };
        assert!(from.contains(at("2999-01-01T00:00:00Z")));
        assert!(!from.contains(at("2024-06-14T23:59:59Z")));
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let range = DateRange::unbounded();
        assert!(range.contains(DateTime::<Utc>::MIN_UTC));
        assert!(range.contains(DateTime::<Utc>::MAX_UTC));
    }
}
