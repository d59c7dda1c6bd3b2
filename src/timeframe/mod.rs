//! Time-window filtering for dashboard records.
//!
//! Every entry point takes "now" as an argument (or reads a [`Clock`] once)
//! so one call never sees the time move under it.

mod calendar;
mod clock;
mod display;
mod filter;
mod responses;
mod summary;
mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use display::{UNKNOWN_EMPLOYEE, employee_name, format_file_size, format_time_restrictions};
pub use filter::{
    EDIT_WINDOW_HOURS, SortOrder, filter_by_window, filter_in_range, in_range, is_editable,
    sort_by_timestamp,
};
pub use responses::{ResponsePeriod, ResponseQuery, Viewer, can_edit_response, list_responses};
pub use summary::{DashboardSummary, FilteredData, PeriodSelection, filter_dashboard};
pub use window::{CustomRange, DateRange, TimeWindow, WeekStart, resolve_window};
