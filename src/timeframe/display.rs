//! Text shown next to filtered records.

use crate::types::{Employee, TimeRestrictions};

pub const UNKNOWN_EMPLOYEE: &str = "Unknown employee";

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Name of the employee with `id`, or a placeholder.
pub fn employee_name<'a>(employees: &'a [Employee], id: &str) -> &'a str {
    employees
        .iter()
        .find(|e| e.id == id)
        .and_then(|e| e.name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_EMPLOYEE)
}

/// Attachment size with 1024-based units, e.g. `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Human summary of when a form accepts submissions, empty if unrestricted.
pub fn format_time_restrictions(restrictions: Option<&TimeRestrictions>) -> String {
    let Some(r) = restrictions else {
        return String::new();
    };

    let time = match (r.start_time.as_deref(), r.end_time.as_deref()) {
        (Some(start), Some(end)) => format!("{} - {}", start, end),
        (Some(start), None) => format!("From {}", start),
        (None, Some(end)) => format!("Until {}", end),
        (None, None) => return String::new(),
    };

    let mut days: Vec<u8> = r
        .allowed_days
        .iter()
        .flatten()
        .copied()
        .filter(|d| usize::from(*d) < DAY_NAMES.len())
        .collect();
    if days.is_empty() {
        return time;
    }
    days.sort_unstable();

    let names: Vec<&str> = days.iter().map(|d| DAY_NAMES[usize::from(*d)]).collect();
    format!("{} ({})", time, names.join(", "))
}
