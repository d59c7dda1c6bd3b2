//! Window command - show the date range a period token resolves to.

use anyhow::Result;
use clap::Args;

use dashgate::timeframe::Clock;

use super::common::{ClockArgs, PeriodArgs, format_bound};

#[derive(Args)]
pub struct WindowCmd {
    #[command(flatten)]
    pub period: PeriodArgs,

    #[command(flatten)]
    pub clock: ClockArgs,

    /// Print the range as JSON
    #[arg(long)]
    pub json: bool,
}

impl WindowCmd {
    pub async fn run(&self) -> Result<()> {
        let selection = self.period.selection()?;
        let now = self.clock.clock().now();
        let range = selection.resolve(&now);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&range)?);
            return Ok(());
        }

        println!("Window: {} (week starts {})", selection.window, selection.week_start);
        println!("Now:    {}", now.format("%Y-%m-%d %H:%M:%S %:z"));
        println!("Start:  {}", format_bound(range.start));
        println!("End:    {}", format_bound(range.end));

        Ok(())
    }
}
