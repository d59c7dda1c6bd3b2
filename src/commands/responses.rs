//! Responses command - list a form's responses the way the detail page does.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;

use dashgate::local;
use dashgate::timeframe::{
    Clock, ResponsePeriod, ResponseQuery, SortOrder, Viewer, can_edit_response, employee_name,
    format_file_size, list_responses,
};
use dashgate::types::Role;

use super::common::ClockArgs;

#[derive(Args)]
pub struct ResponsesCmd {
    /// Dashboard snapshot (JSON with forms, formEntries, employees)
    pub data: PathBuf,

    /// Only responses to this form
    #[arg(long, short = 'f')]
    pub form: Option<String>,

    /// Period filter
    #[arg(long, short = 'p', value_enum, default_value_t = ResponsePeriod::All)]
    pub period: ResponsePeriod,

    /// Sort order by submission time
    #[arg(long, short = 'o', value_enum, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,

    /// Only responses from this employee id (directors only)
    #[arg(long, short = 'e')]
    pub employee: Option<String>,

    /// Who is looking at the list
    #[arg(long, value_enum, default_value_t = Role::Director)]
    pub role: Role,

    /// Id of the viewing user (required for employees, who only see their own)
    #[arg(long, required_if_eq("role", "employee"))]
    pub viewer: Option<String>,

    #[command(flatten)]
    pub clock: ClockArgs,
}

impl ResponsesCmd {
    pub async fn run(&self) -> Result<()> {
        let data = local::load_dashboard(&self.data)
            .await
            .with_context(|| format!("Failed to load {}", self.data.display()))?;

        let entries: Vec<_> = match &self.form {
            Some(form_id) => data
                .form_entries
                .iter()
                .filter(|e| &e.form_id == form_id)
                .cloned()
                .collect(),
            None => data.form_entries.clone(),
        };

        let query = ResponseQuery {
            period: self.period,
            order: self.order,
            employee: self.employee.clone(),
        };
        let viewer = Some(Viewer::new(self.role, self.viewer.as_deref().unwrap_or_default()));
        let now = self.clock.clock().now();
        let listed = list_responses(&entries, viewer, &query, &now);

        if listed.is_empty() {
            println!("No responses.");
            return Ok(());
        }

        for entry in &listed {
            let submitted = entry.submitted_at.with_timezone(&Local);
            let status = if can_edit_response(viewer, entry, &now) {
                " [editable]"
            } else {
                ""
            };
            println!(
                "{} at {}  {}  ({} answers){}",
                submitted.format("%Y-%m-%d"),
                submitted.format("%H:%M:%S"),
                employee_name(&data.employees, &entry.user_id),
                entry.answers.len(),
                status
            );
            for attachment in &entry.file_attachments {
                println!(
                    "    {} ({})",
                    attachment.file_name,
                    format_file_size(attachment.file_size)
                );
            }
        }

        println!("\n{} responses", listed.len());

        Ok(())
    }
}
