//! Local mode - configuration on disk and exported data files.

mod config;
mod data;

pub use config::LocalConfig;
pub use data::{load_dashboard, load_user};
