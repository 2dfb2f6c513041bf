use diesel::prelude::*;
use log::error;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::accounts::{AccountDB, NewAccountDB};
use crate::errors::StorageError;
use crate::schema::accounts;
use meterbook_core::accounts::Account;
use meterbook_core::errors::{DatabaseError, Error, Result};

// The one write operation this store supports: insert a row, reply with the
// stored account. The oneshot carries the result back to the caller.
type InsertJob = (NewAccountDB, oneshot::Sender<Result<Account>>);

/// Handle for sending insert jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<InsertJob>,
}

impl WriteHandle {
    /// Inserts a new account on the writer actor's dedicated connection.
    ///
    /// Returns the stored row with its assigned id. If the actor has
    /// stopped (its connection could not be acquired, or the runtime is
    /// shutting down) the insert fails with a `Transaction` error instead
    /// of persisting anything.
    pub async fn insert(&self, new_account: NewAccountDB) -> Result<Account> {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((new_account, ret_tx))
            .await
            .map_err(|_| writer_stopped())?;

        ret_rx.await.map_err(|_| writer_stopped())?
    }
}

fn writer_stopped() -> Error {
    DatabaseError::TransactionFailed("writer task is no longer running".to_string()).into()
}

/// Spawns a background Tokio task that acts as the single writer to the database.
/// This actor owns one database connection from the pool and processes insert
/// jobs serially, each inside an immediate transaction.
///
/// # Arguments
/// * `pool`: The database connection pool.
///
/// # Returns
/// A `WriteHandle` to send jobs to the spawned actor.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    // The channel is bounded; 64 is plenty for a single-form app.
    let (tx, mut rx) = mpsc::channel::<InsertJob>(64);

    tokio::spawn(async move {
        // Acquire a single connection from the pool for this actor.
        // This connection is held for the lifetime of the actor. If it
        // cannot be acquired the actor exits and every pending or future
        // insert resolves to a writer-stopped error at the handle.
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((new_account, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<AccountDB, StorageError, _>(|c| {
                    Ok(diesel::insert_into(accounts::table)
                        .values(&new_account)
                        .returning(AccountDB::as_returning())
                        .get_result(c)?)
                })
                .map(Account::from)
                .map_err(|e: StorageError| e.into());

            // Ignore error if the receiver has dropped.
            let _ = reply_tx.send(result);
        }
        // If rx.recv() returns None, the sender (WriteHandle) was dropped,
        // so the actor can terminate.
    });

    WriteHandle { tx }
}

// Note: DbConnection (PooledConnection) derefs to SqliteConnection.
// The immediate_transaction method is on SqliteConnection via the Connection trait.
