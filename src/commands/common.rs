//! Arguments shared by the period-based commands.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local};
use clap::Args;

use dashgate::local::LocalConfig;
use dashgate::timeframe::{
    Clock, CustomRange, FixedClock, PeriodSelection, SystemClock, TimeWindow, WeekStart,
};

#[derive(Args, Debug, Clone)]
pub struct ClockArgs {
    /// Evaluate as of this instant (RFC 3339) instead of the current time
    #[arg(long)]
    pub now: Option<DateTime<FixedOffset>>,
}

impl ClockArgs {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.now {
            Some(now) => Box::new(FixedClock(now.with_timezone(&Local))),
            None => Box::new(SystemClock),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    /// Period: all, today, yesterday, last7days, last30days, thisweek, lastweek,
    /// thismonth, lastmonth, thisquarter, lastquarter, thisyear, lastyear, custom
    #[arg(long, short = 'w', default_value = "all")]
    pub window: String,

    /// Custom period start (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub start: Option<String>,

    /// Custom period end (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub end: Option<String>,

    /// First day of the week (default: from config)
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStart>,
}

impl PeriodArgs {
    pub fn selection(&self) -> Result<PeriodSelection> {
        let week_start = match self.week_start {
            Some(week_start) => week_start,
            None => LocalConfig::load()?.week_start,
        };

        let custom = (self.start.is_some() || self.end.is_some()).then(|| CustomRange {
            start: self.start.clone().unwrap_or_default(),
            end: self.end.clone().unwrap_or_default(),
        });

        Ok(PeriodSelection {
            window: TimeWindow::from_token(&self.window),
            custom,
            week_start,
        })
    }
}

/// Local rendering of an optional bound.
pub fn format_bound(bound: Option<DateTime<chrono::Utc>>) -> String {
    bound
        .map(|b| b.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %:z").to_string())
        .unwrap_or_else(|| "(open)".to_string())
}
