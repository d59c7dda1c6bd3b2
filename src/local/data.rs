//! Reading exported session users and dashboard snapshots.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{DashboardData, DataError, User};

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a session user document.
pub async fn load_user(path: &Path) -> Result<User, DataError> {
    let user: User = read_json(path).await?;
    debug!(path = %path.display(), package = ?user.package, "loaded user");
    Ok(user)
}

/// Load a dashboard snapshot (`forms`, `formEntries`, `employees`).
pub async fn load_dashboard(path: &Path) -> Result<DashboardData, DataError> {
    let data: DashboardData = read_json(path).await?;
    debug!(
        path = %path.display(),
        forms = data.forms.len(),
        entries = data.form_entries.len(),
        employees = data.employees.len(),
        "loaded dashboard snapshot"
    );
    Ok(data)
}
