use serde::{Deserialize, Serialize};

use crate::domain::Page;
use crate::models::LogEntry;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntryDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<LogEntry> for LogEntryDto {
    fn from(entry: LogEntry) -> Self {
        Self {
            id: entry.id.value(),
            name: entry.name,
            description: entry.description,
            date: entry.date,
            location: entry.location,
            active: entry.active,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPageResponse {
    pub logs: Vec<LogEntryDto>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl From<Page<LogEntry>> for LogPageResponse {
    fn from(page: Page<LogEntry>) -> Self {
        let page = page.map(LogEntryDto::from);
        Self {
            logs: page.items,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

/// Raw query values; parsed leniently by `PageRequest::from_query`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LogsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl LogsQuery {
    /// Picks `page` and `limit` out of the decoded pairs. The first value of a
    /// repeated key wins; unknown keys are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChangesResponse {
    pub changes: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsernameDto {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryId, PageRequest};

    #[test]
    fn page_response_uses_camel_case_total_pages() {
        let entry = LogEntry {
            id: EntryId::new(3),
            name: "Ann".to_string(),
            description: "d".to_string(),
            date: "2026-10-18".to_string(),
            location: "l".to_string(),
            active: true,
            created_at: "2026-10-18T10:00:00.000000Z".to_string(),
            updated_at: "2026-10-18T10:00:00.000000Z".to_string(),
        };
        let response = LogPageResponse::from(Page::new(vec![entry], 6, PageRequest::new(1, 5)));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["total"], 6);
        assert_eq!(json["logs"][0]["id"], 3);
        assert_eq!(json["logs"][0]["created_at"], "2026-10-18T10:00:00.000000Z");
        assert!(json.get("total_pages").is_none());
    }

    #[test]
    fn query_pairs_keep_first_value() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("sort".to_string(), "name".to_string()),
            ("page".to_string(), "3".to_string()),
            ("limit".to_string(), "5".to_string()),
            ("limit".to_string(), "2".to_string()),
        ];

        assert_eq!(
            LogsQuery::from_pairs(pairs),
            LogsQuery {
                page: Some("2".to_string()),
                limit: Some("5".to_string()),
            }
        );
        assert_eq!(LogsQuery::from_pairs(Vec::new()), LogsQuery::default());
    }
}
