//! Account domain models.

use serde::{Deserialize, Serialize};

use super::accounts_constants::REQUIRED_FIELDS;
use crate::errors::ValidationError;
use crate::Result;

/// Domain model representing a stored utility account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Store-assigned row id, unique and monotonically increasing.
    pub id: i32,
    pub name: String,
    pub account_type: String,
    pub address: String,
    pub status: String,
    pub area_id: String,
    pub meter_size: String,
    pub meter_no: String,
}

/// Input model for creating a new account.
///
/// All seven fields are required; `validate` enforces presence before the
/// record reaches the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub account_type: String,
    pub address: String,
    pub status: String,
    pub area_id: String,
    pub meter_size: String,
    pub meter_no: String,
}

impl NewAccount {
    /// Validates the new account data.
    ///
    /// Every field must be non-empty after trimming. Status is free text
    /// (e.g. "active"/"inactive") and is not checked against a list.
    pub fn validate(&self) -> Result<()> {
        let values = [
            &self.name,
            &self.account_type,
            &self.address,
            &self.status,
            &self.area_id,
            &self.meter_size,
            &self.meter_no,
        ];
        for (value, field) in values.into_iter().zip(REQUIRED_FIELDS) {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field.to_string()).into());
            }
        }
        Ok(())
    }
}

/// The draft record: a not-yet-saved account under construction in the form.
///
/// One explicit value object instead of seven loose mutable cells, so a save
/// either consumes a complete draft or touches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftAccount {
    pub name: String,
    pub account_type: String,
    pub address: String,
    pub status: String,
    pub area_id: String,
    pub meter_size: String,
    pub meter_no: String,
}

impl DraftAccount {
    /// Returns true when every field holds a non-blank value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Column names of the fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.name,
            &self.account_type,
            &self.address,
            &self.status,
            &self.area_id,
            &self.meter_size,
            &self.meter_no,
        ];
        values
            .into_iter()
            .zip(REQUIRED_FIELDS)
            .filter(|(value, _)| value.trim().is_empty())
            .map(|(_, field)| field)
            .collect()
    }

    /// Resets all seven fields to empty strings.
    pub fn reset(&mut self) {
        *self = DraftAccount::default();
    }
}

impl From<&DraftAccount> for NewAccount {
    fn from(draft: &DraftAccount) -> Self {
        Self {
            name: draft.name.clone(),
            account_type: draft.account_type.clone(),
            address: draft.address.clone(),
            status: draft.status.clone(),
            area_id: draft.area_id.clone(),
            meter_size: draft.meter_size.clone(),
            meter_no: draft.meter_no.clone(),
        }
    }
}
