//! Tests for account domain models including the draft record.

#[cfg(test)]
mod tests {
    use crate::accounts::{statuses, DraftAccount, NewAccount, REQUIRED_FIELDS};
    use crate::errors::{Error, ValidationError};

    fn complete_draft() -> DraftAccount {
        DraftAccount {
            name: "Alice".to_string(),
            account_type: "residential".to_string(),
            address: "12 Canal Road".to_string(),
            status: statuses::ACTIVE.to_string(),
            area_id: "A-07".to_string(),
            meter_size: "15mm".to_string(),
            meter_no: "MTR-0001".to_string(),
        }
    }

    // ==================== NewAccount Validation Tests ====================

    #[test]
    fn test_validate_accepts_complete_account() {
        let new_account = NewAccount::from(&complete_draft());
        assert!(new_account.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut new_account = NewAccount::from(&complete_draft());
        new_account.name = String::new();
        match new_account.validate() {
            Err(Error::Validation(ValidationError::MissingField(field))) => {
                assert_eq!(field, "name");
            }
            other => panic!("expected MissingField error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_validate_rejects_blank_meter_no() {
        let mut new_account = NewAccount::from(&complete_draft());
        new_account.meter_no = "   ".to_string();
        match new_account.validate() {
            Err(Error::Validation(ValidationError::MissingField(field))) => {
                assert_eq!(field, "meterno");
            }
            other => panic!("expected MissingField error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_validate_does_not_enforce_status_values() {
        let mut new_account = NewAccount::from(&complete_draft());
        new_account.status = "suspended pending review".to_string();
        assert!(new_account.validate().is_ok());
    }

    // ==================== DraftAccount Tests ====================

    #[test]
    fn test_empty_draft_is_incomplete() {
        let draft = DraftAccount::default();
        assert!(!draft.is_complete());
        assert_eq!(draft.missing_fields(), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn test_complete_draft_reports_no_missing_fields() {
        let draft = complete_draft();
        assert!(draft.is_complete());
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_single_blank_field_is_reported() {
        let mut draft = complete_draft();
        draft.area_id = String::new();
        assert!(!draft.is_complete());
        assert_eq!(draft.missing_fields(), vec!["areaid"]);
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut draft = complete_draft();
        draft.reset();
        assert_eq!(draft, DraftAccount::default());
        assert_eq!(draft.name, "");
        assert_eq!(draft.meter_no, "");
    }

    #[test]
    fn test_new_account_conversion_copies_all_fields() {
        let draft = complete_draft();
        let new_account = NewAccount::from(&draft);
        assert_eq!(new_account.name, draft.name);
        assert_eq!(new_account.account_type, draft.account_type);
        assert_eq!(new_account.address, draft.address);
        assert_eq!(new_account.status, draft.status);
        assert_eq!(new_account.area_id, draft.area_id);
        assert_eq!(new_account.meter_size, draft.meter_size);
        assert_eq!(new_account.meter_no, draft.meter_no);
    }
}
