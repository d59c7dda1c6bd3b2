//! Calendar arithmetic in the viewer's time zone.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

/// Start of `date` in `tz`, as an instant.
///
/// Where a DST jump skips midnight the day begins at the first valid hour.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// First day of a month given a zero-based month that may run past either
/// end of the year (`-1` is December of `year - 1`, `12` is January of
/// `year + 1`).
pub fn month_start(year: i32, month0: i32) -> Option<NaiveDate> {
    let year = year + month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Moves `date` by `months`, keeping the day of month and letting an
/// impossible day spill into the following month (Mar 31 - 1 month is
/// Mar 2 or Mar 3 depending on leap year).
pub fn shift_months_overflowing(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let first = month_start(date.year(), date.month0() as i32 + months)?;
    first.checked_add_days(chrono::Days::new(u64::from(date.day0())))
}
