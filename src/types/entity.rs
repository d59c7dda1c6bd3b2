use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything that can be placed on the dashboard's time axis.
pub trait Timestamped {
    /// The instant used for window membership and ordering.
    ///
    /// `None` means the record carries no date and only shows up when no
    /// window is applied.
    fn timestamp(&self) -> Option<DateTime<Utc>>;
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        (**self).timestamp()
    }
}

/// A form built by a director.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub assigned_to: Vec<String>,
    #[serde(default)]
    pub time_restrictions: Option<TimeRestrictions>,
}

/// Hours/days during which a form accepts submissions.
///
/// Times are kept as the `HH:MM` strings entered by the director.
/// Days use 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRestrictions {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub allowed_days: Option<Vec<u8>>,
}

/// One submitted response to a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub id: String,
    pub form_id: String,
    /// The employee who submitted.
    pub user_id: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub answers: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub file_attachments: Vec<FileAttachment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub file_name: String,
    pub file_size: u64,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// An employee record of the director's organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Older records were imported without a creation date.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Pending invitations are `Some(false)`; legacy records have no flag.
    #[serde(default)]
    pub is_approved: Option<bool>,
}

impl Employee {
    /// Counted as active unless explicitly rejected/pending.
    pub fn is_active(&self) -> bool {
        self.is_approved != Some(false)
    }
}

impl Timestamped for Form {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

impl Timestamped for FormEntry {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.submitted_at)
    }
}

impl Timestamped for Employee {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Everything the dashboard reads from the data store in one snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub forms: Vec<Form>,
    #[serde(default)]
    pub form_entries: Vec<FormEntry>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_data_deserialize() {
        let json = r#"{
            "forms": [{ "id": "f1", "title": "Daily check", "createdAt": "2024-06-01T08:00:00Z" }],
            "formEntries": [{
                "id": "e1",
                "formId": "f1",
                "userId": "emp1",
                "submittedAt": "2024-06-02T09:30:00Z",
                "answers": { "q1": "ok" },
                "fileAttachments": [{ "fileName": "report.pdf", "fileSize": 2048 }]
            }],
            "employees": [{ "id": "emp1", "name": "Amina" }, { "id": "emp2", "isApproved": false }]
        }"#;

        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.forms.len(), 1);
        assert_eq!(data.form_entries[0].file_attachments[0].file_size, 2048);
        assert!(data.employees[0].timestamp().is_none());
        assert!(data.employees[0].is_active());
        assert!(!data.employees[1].is_active());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let data: DashboardData = serde_json::from_str("{}").unwrap();
        assert!(data.forms.is_empty());
        assert!(data.form_entries.is_empty());
        assert!(data.employees.is_empty());
    }
}
