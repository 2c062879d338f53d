use super::ApiError;
use crate::domain::EntryId;
use crate::services::LogEntryError;

pub fn validate_entry_id(raw: &str) -> Result<EntryId, ApiError> {
    raw.parse::<EntryId>()
        .map_err(|e| ApiError::from(LogEntryError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entry_id() {
        assert_eq!(validate_entry_id("7").unwrap(), EntryId::new(7));
        assert_eq!(validate_entry_id(" 12 ").unwrap(), EntryId::new(12));
        assert!(validate_entry_id("-1").is_ok());
    }

    #[test]
    fn test_validate_entry_id_rejects_garbage() {
        for raw in ["wrong-id", "", "12abc"] {
            assert!(
                matches!(validate_entry_id(raw), Err(ApiError::InvalidId)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_entry_id_fraction_is_not_found() {
        for raw in ["1.5", "99999999999999999999"] {
            assert!(
                matches!(validate_entry_id(raw), Err(ApiError::NotFound(_))),
                "{raw:?} should match no row"
            );
        }
    }
}
