//! Summary command - dashboard headline counts for a period.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dashgate::local;
use dashgate::timeframe::{filter_dashboard, format_time_restrictions};

use super::common::{ClockArgs, PeriodArgs, format_bound};

#[derive(Args)]
pub struct SummaryCmd {
    /// Dashboard snapshot (JSON with forms, formEntries, employees)
    pub data: PathBuf,

    #[command(flatten)]
    pub period: PeriodArgs,

    #[command(flatten)]
    pub clock: ClockArgs,

    /// List the forms in the period
    #[arg(long)]
    pub forms: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl SummaryCmd {
    pub async fn run(&self) -> Result<()> {
        let data = local::load_dashboard(&self.data)
            .await
            .with_context(|| format!("Failed to load {}", self.data.display()))?;
        let selection = self.period.selection()?;

        let clock = self.clock.clock();
        let filtered = filter_dashboard(&data, &selection, &*clock);
        let summary = filtered.summary();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        println!("Period:     {}", selection.window);
        println!("  from      {}", format_bound(summary.range.start));
        println!("  to        {}", format_bound(summary.range.end));
        println!();
        println!("Forms:      {}", summary.forms);
        println!("Employees:  {}", summary.active_employees);
        println!("Responses:  {}", summary.form_entries);

        if self.forms {
            if filtered.forms.is_empty() {
                println!("\nNo forms in this period.");
                return Ok(());
            }
            println!();
            for form in &filtered.forms {
                let responses = filtered
                    .form_entries
                    .iter()
                    .filter(|e| e.form_id == form.id)
                    .count();
                println!(
                    "  {}  {} ({} responses)",
                    form.created_at.format("%Y-%m-%d"),
                    form.title,
                    responses
                );
                let window = format_time_restrictions(form.time_restrictions.as_ref());
                if !window.is_empty() {
                    println!("      open {}", window);
                }
            }
        }

        Ok(())
    }
}
