//! Config command - manage local configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use dashgate::access::PackageCatalog;
use dashgate::local::LocalConfig;
use dashgate::timeframe::WeekStart;

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Set the first day of the week (default: sunday)
    SetWeekStart(SetWeekStartCmd),

    /// Use a package catalog file instead of the built-in tables
    SetPackages(SetPackagesCmd),

    /// Go back to the built-in package catalog
    ResetPackages,

    /// Show current configuration
    Show,

    /// Print the config file path
    Path,
}

#[derive(Args)]
pub struct SetWeekStartCmd {
    #[arg(value_enum)]
    pub day: WeekStart,
}

#[derive(Args)]
pub struct SetPackagesCmd {
    /// Catalog file (TOML with [tier.features] and [tier.limits] tables)
    pub path: PathBuf,
}

impl ConfigCmd {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::SetWeekStart(cmd) => {
                let mut config = LocalConfig::load()?;
                config.week_start = cmd.day;
                config.save()?;
                println!("Week starts on {}.", cmd.day);
            }
            ConfigSubCmd::SetPackages(cmd) => {
                let path = std::fs::canonicalize(&cmd.path)
                    .with_context(|| format!("Cannot find {}", cmd.path.display()))?;
                // Refuse to save a catalog that would fail on every later command
                PackageCatalog::load(&path)
                    .with_context(|| format!("Invalid package catalog {}", path.display()))?;

                let mut config = LocalConfig::load()?;
                config.packages_file = Some(path.clone());
                config.save()?;
                println!("Package catalog set to: {}", path.display());
            }
            ConfigSubCmd::ResetPackages => {
                let mut config = LocalConfig::load()?;
                config.packages_file = None;
                config.save()?;
                println!("Using the built-in package catalog.");
            }
            ConfigSubCmd::Show => {
                let config = LocalConfig::load()?;
                println!("Config: {}", LocalConfig::config_path()?.display());
                println!();
                println!("week_start:     {}", config.week_start);
                println!(
                    "packages_file:  {}",
                    config
                        .packages_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(built-in)".to_string())
                );
            }
            ConfigSubCmd::Path => {
                println!("{}", LocalConfig::config_path()?.display());
            }
        }
        Ok(())
    }
}
