//! Access command - show what a user's package allows.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use dashgate::access::PackageAccess;
use dashgate::local::{self, LocalConfig};
use dashgate::types::{PackageTier, UNLIMITED, User};

#[derive(Args)]
pub struct AccessCmd {
    /// Session user document (JSON)
    #[arg(long, short = 'u', conflicts_with = "package")]
    pub user: Option<PathBuf>,

    /// Evaluate a bare package instead of a user document
    #[arg(long, short = 'p', value_enum)]
    pub package: Option<PackageTier>,

    /// Current number of forms, to check whether one more may be created
    #[arg(long)]
    pub forms: Option<i64>,

    /// Current number of dashboards
    #[arg(long)]
    pub dashboards: Option<i64>,

    /// Current number of users
    #[arg(long)]
    pub users: Option<i64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl AccessCmd {
    pub async fn run(&self) -> Result<()> {
        let catalog = LocalConfig::load()?.catalog()?;

        let user = match (&self.user, self.package) {
            (Some(path), _) => Some(
                local::load_user(path)
                    .await
                    .with_context(|| format!("Failed to load user {}", path.display()))?,
            ),
            (None, Some(package)) => Some(User::with_package(package)),
            (None, None) => None,
        };

        let access = PackageAccess::new(user.as_ref(), &catalog);
        let report = access.entitlement_report();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        match report.package {
            Some(package) => println!("Package: {}", package),
            None => println!("Package: (none)"),
        }
        println!();

        println!("Features:");
        for entry in &report.features {
            let mark = if entry.enabled { "yes" } else { "no" };
            println!("  {:<20} {}", entry.feature.as_str(), mark);
        }
        println!();

        println!("Limits:");
        for entry in &report.limits {
            if entry.total == UNLIMITED {
                println!("  {:<20} unlimited", entry.limit.as_str());
            } else if entry.pay_as_you_go > 0 {
                println!(
                    "  {:<20} {} (+{} pay-as-you-go = {})",
                    entry.limit.as_str(),
                    entry.package,
                    entry.pay_as_you_go,
                    entry.total
                );
            } else {
                println!("  {:<20} {}", entry.limit.as_str(), entry.total);
            }
        }

        let checks = [
            ("form", self.forms.map(|n| (n, access.can_create_form(n)))),
            ("dashboard", self.dashboards.map(|n| (n, access.can_create_dashboard(n)))),
            ("user", self.users.map(|n| (n, access.can_add_user(n)))),
        ];
        if checks.iter().any(|(_, check)| check.is_some()) {
            println!();
            for (kind, check) in checks {
                if let Some((current, allowed)) = check {
                    let verdict = if allowed { "allowed" } else { "limit reached" };
                    println!("  new {:<10} with {} existing: {}", kind, current, verdict);
                }
            }
        }

        println!();
        println!(
            "Advanced AI: {}",
            if access.can_use_advanced_ai() { "yes" } else { "no" }
        );

        Ok(())
    }
}
