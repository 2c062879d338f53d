use serde::{Deserialize, Serialize};

use crate::domain::EntryId;
use crate::entities::log_entries;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<log_entries::Model> for LogEntry {
    fn from(model: log_entries::Model) -> Self {
        Self {
            id: EntryId::new(model.id),
            name: model.name,
            description: model.description,
            date: model.date,
            location: model.location,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// The four user-editable fields as received, before the required-field check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogEntryDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
}

/// The four user-editable fields, all present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntryFields {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

impl LogEntryDraft {
    #[must_use]
    pub fn new(name: &str, description: &str, date: &str, location: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            date: Some(date.to_string()),
            location: Some(location.to_string()),
        }
    }

    /// Returns the complete field set, or the names of the missing fields.
    ///
    /// Absent, `null` and empty-string values all count as missing.
    pub fn into_fields(self) -> Result<LogEntryFields, Vec<&'static str>> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        let name = present(self.name);
        let description = present(self.description);
        let date = present(self.date);
        let location = present(self.location);

        match (name, description, date, location) {
            (Some(name), Some(description), Some(date), Some(location)) => Ok(LogEntryFields {
                name,
                description,
                date,
                location,
            }),
            (name, description, date, location) => {
                let missing = [
                    ("name", name.is_none()),
                    ("description", description.is_none()),
                    ("date", date.is_none()),
                    ("location", location.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect();
                Err(missing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_validates() {
        let fields = LogEntryDraft::new("Ann", "Walked", "2026-10-18", "Park")
            .into_fields()
            .unwrap();
        assert_eq!(fields.name, "Ann");
        assert_eq!(fields.location, "Park");
    }

    #[test]
    fn missing_and_empty_fields_are_reported() {
        let draft = LogEntryDraft {
            name: Some(String::new()),
            description: Some("d".to_string()),
            date: None,
            location: Some("l".to_string()),
        };
        assert_eq!(draft.into_fields().unwrap_err(), vec!["name", "date"]);
    }

    #[test]
    fn draft_deserializes_with_absent_and_null_fields() {
        let draft: LogEntryDraft =
            serde_json::from_str(r#"{"name":"Ann","description":null}"#).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Ann"));
        assert!(draft.description.is_none());
        assert_eq!(
            draft.into_fields().unwrap_err(),
            vec!["description", "date", "location"]
        );
    }
}
