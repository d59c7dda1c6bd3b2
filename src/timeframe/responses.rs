//! Response listing for a single form: period filter, employee filter,
//! ordering and who may edit what.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::{local_midnight, shift_months_overflowing};
use super::filter::{SortOrder, is_editable, sort_by_timestamp};
use crate::types::{FormEntry, Role, User};

/// Coarse period filter of the response list.
///
/// Unlike the dashboard windows these only set a lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResponsePeriod {
    #[default]
    All,
    /// Since local midnight.
    Today,
    /// Since midnight seven calendar days ago.
    Week,
    /// Since midnight on the same day last month.
    Month,
}

impl ResponsePeriod {
    /// Earliest submission instant that passes, `None` for no bound.
    pub fn cutoff<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
        let tz = now.timezone();
        let today = now.date_naive();
        let date = match self {
            ResponsePeriod::All => return None,
            ResponsePeriod::Today => Some(today),
            ResponsePeriod::Week => today.checked_sub_days(chrono::Days::new(7)),
            ResponsePeriod::Month => shift_months_overflowing(today, -1),
        };
        date.map(|d| local_midnight(&tz, d))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponseQuery {
    pub period: ResponsePeriod,
    pub order: SortOrder,
    /// Only honoured for directors; employees always see their own list.
    pub employee: Option<String>,
}

/// Who is looking at the response list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer<'a> {
    pub role: Role,
    pub id: &'a str,
}

impl<'a> Viewer<'a> {
    pub fn new(role: Role, id: &'a str) -> Self {
        Self { role, id }
    }

    /// A session user without role or id cannot view responses.
    pub fn from_user(user: &'a User) -> Option<Self> {
        Some(Self::new(user.role?, user.id.as_deref()?))
    }

    fn owns(&self, entry: &FormEntry) -> bool {
        entry.user_id == self.id
    }
}

/// Filter and order `entries` for `viewer`.
///
/// Directors see every response, optionally narrowed to one employee.
/// Employees only ever see their own. Without a viewer nothing is listed.
pub fn list_responses<'a, Tz: TimeZone>(
    entries: &'a [FormEntry],
    viewer: Option<Viewer<'_>>,
    query: &ResponseQuery,
    now: &DateTime<Tz>,
) -> Vec<&'a FormEntry> {
    let Some(viewer) = viewer else {
        return Vec::new();
    };
    let cutoff = query.period.cutoff(now);

    let mut listed: Vec<&FormEntry> = entries
        .iter()
        .filter(|entry| match viewer.role {
            Role::Director => query
                .employee
                .as_deref()
                .is_none_or(|id| entry.user_id == id),
            Role::Employee => viewer.owns(entry),
        })
        .filter(|entry| cutoff.is_none_or(|c| entry.submitted_at >= c))
        .collect();

    sort_by_timestamp(&mut listed, query.order);
    listed
}

/// Employees edit their own responses, and only inside the edit window.
pub fn can_edit_response<Tz: TimeZone>(
    viewer: Option<Viewer<'_>>,
    entry: &FormEntry,
    now: &DateTime<Tz>,
) -> bool {
    viewer.is_some_and(|v| v.role == Role::Employee && v.owns(entry))
        && is_editable(entry.submitted_at, now)
}
