//! Headline counts of the director dashboard for the selected period.

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::debug;

use super::clock::Clock;
use super::filter::filter_in_range;
use super::window::{CustomRange, DateRange, TimeWindow, WeekStart, resolve_window};
use crate::types::{DashboardData, Employee, Form, FormEntry};

/// The three dashboard collections, restricted to one period.
#[derive(Debug, Clone)]
pub struct FilteredData<'a> {
    pub range: DateRange,
    pub forms: Vec<&'a Form>,
    pub form_entries: Vec<&'a FormEntry>,
    pub employees: Vec<&'a Employee>,
}

impl<'a> FilteredData<'a> {
    /// Apply one resolved range to every collection.
    pub fn new(data: &'a DashboardData, range: DateRange) -> Self {
        Self {
            range,
            forms: filter_in_range(&data.forms, &range),
            form_entries: filter_in_range(&data.form_entries, &range),
            employees: filter_in_range(&data.employees, &range),
        }
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            range: self.range,
            forms: self.forms.len(),
            active_employees: self.employees.iter().filter(|e| e.is_active()).count(),
            form_entries: self.form_entries.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub range: DateRange,
    pub forms: usize,
    /// Employees not marked as pending/rejected.
    pub active_employees: usize,
    pub form_entries: usize,
}

/// Period selection as made in the dashboard header.
#[derive(Debug, Clone, Default)]
pub struct PeriodSelection {
    pub window: TimeWindow,
    pub custom: Option<CustomRange>,
    pub week_start: WeekStart,
}

impl PeriodSelection {
    pub fn resolve<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateRange {
        resolve_window(self.window, now, self.custom.as_ref(), self.week_start)
    }
}

/// Filter `data` for `selection`, reading the clock exactly once.
pub fn filter_dashboard<'a>(
    data: &'a DashboardData,
    selection: &PeriodSelection,
    clock: &dyn Clock,
) -> FilteredData<'a> {
    let now = clock.now();
    let range = selection.resolve(&now);
    debug!(
        window = %selection.window,
        start = ?range.start,
        end = ?range.end,
        "filtering dashboard"
    );
    FilteredData::new(data, range)
}
