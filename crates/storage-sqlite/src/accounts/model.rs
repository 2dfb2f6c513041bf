//! Database models for accounts.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use meterbook_core::accounts::{Account, NewAccount};

/// Database model for accounts
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Eq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: i32,
    pub name: String,
    pub account_type: String,
    pub address: String,
    pub status: String,
    pub areaid: String,
    pub metersize: String,
    pub meterno: String,
}

/// Insertable model for new accounts.
///
/// The `id` column is absent: SQLite assigns it on insert.
#[derive(Insertable, PartialEq, Eq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
pub struct NewAccountDB {
    pub name: String,
    pub account_type: String,
    pub address: String,
    pub status: String,
    pub areaid: String,
    pub metersize: String,
    pub meterno: String,
}

// Conversion implementations
impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            account_type: db.account_type,
            address: db.address,
            status: db.status,
            area_id: db.areaid,
            meter_size: db.metersize,
            meter_no: db.meterno,
        }
    }
}

impl From<NewAccount> for NewAccountDB {
    fn from(domain: NewAccount) -> Self {
        Self {
            name: domain.name,
            account_type: domain.account_type,
            address: domain.address,
            status: domain.status,
            areaid: domain.area_id,
            metersize: domain.meter_size,
            meterno: domain.meter_no,
        }
    }
}
