//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations of this trait handle the persistence of account data.
/// The trait is database-agnostic - storage-specific details are handled
/// by concrete implementations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Inserts a new account and returns it with its assigned id.
    ///
    /// The implementation handles transaction management internally.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    /// Lists every stored account in insertion order.
    ///
    /// An empty store yields `Ok` with an empty vector, never an error.
    fn list_all(&self) -> Result<Vec<Account>>;
}

/// Trait defining the contract for Account service operations.
///
/// The service layer handles business validation and delegates persistence
/// to the repository.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Creates a new account after presence validation.
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    /// Gets all accounts.
    fn get_all_accounts(&self) -> Result<Vec<Account>>;
}
