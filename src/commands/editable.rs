//! Editable command - is a submission still inside the edit window?

use anyhow::Result;
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use clap::Args;

use dashgate::timeframe::{Clock, EDIT_WINDOW_HOURS, is_editable};

use super::common::ClockArgs;

#[derive(Args)]
pub struct EditableCmd {
    /// Submission time (RFC 3339)
    pub submitted_at: DateTime<FixedOffset>,

    #[command(flatten)]
    pub clock: ClockArgs,
}

impl EditableCmd {
    pub async fn run(&self) -> Result<()> {
        let now = self.clock.clock().now();
        let submitted_at = self.submitted_at.with_timezone(&Utc);

        if is_editable(submitted_at, &now) {
            let closes = submitted_at + TimeDelta::hours(EDIT_WINDOW_HOURS);
            let left = closes - now.with_timezone(&Utc);
            println!(
                "editable ({}h{:02}m left)",
                left.num_hours(),
                left.num_minutes() % 60
            );
        } else {
            println!("locked (edit window is {} hours)", EDIT_WINDOW_HOURS);
        }

        Ok(())
    }
}
