use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::accounts;
use crate::schema::accounts::dsl::*;

use super::model::{AccountDB, NewAccountDB};
use meterbook_core::accounts::{Account, AccountRepositoryTrait, NewAccount};
use meterbook_core::errors::Result;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    /// Inserts a new account through the writer actor and returns the stored
    /// row with its assigned id.
    ///
    /// Presence validation happens in the service layer; every field handed
    /// to this method is persisted as given.
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        self.writer.insert(NewAccountDB::from(new_account)).await
    }

    /// Lists every account, ordered by id ascending (insertion order).
    fn list_all(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let results = accounts::table
            .select(AccountDB::as_select())
            .order(id.asc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Account::from).collect())
    }
}
