//! The form shell: transient draft state, the two user actions, and the
//! text rendering of the last-fetched record set.
//!
//! The shell never surfaces store failures to the user. Every error is
//! logged and swallowed; the only user-visible consequence is that the
//! draft keeps its values and the list keeps its previous contents.

use std::sync::Arc;

use log::{error, info, warn};

use meterbook_core::accounts::{Account, AccountServiceTrait, DraftAccount, NewAccount};

/// Placeholder shown when the last fetch returned nothing.
pub const NO_DATA_PLACEHOLDER: &str = "no data";

/// Result of a Save action, for callers that want to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was persisted and the draft was reset.
    Saved,
    /// One or more required fields were blank; nothing was called.
    Incomplete,
    /// The store never opened this session; the action no-ops.
    StoreUnavailable,
    /// The insert failed; the draft keeps its values.
    Failed,
}

/// Holds the draft record and the last-fetched account list, and wires the
/// Save / View All Data actions to the account service.
pub struct FormShell {
    // None when the store failed to open at startup; it stays None for the
    // whole session and every action becomes a logged no-op.
    service: Option<Arc<dyn AccountServiceTrait>>,
    pub draft: DraftAccount,
    accounts: Vec<Account>,
}

impl FormShell {
    pub fn new(service: Option<Arc<dyn AccountServiceTrait>>) -> Self {
        Self {
            service,
            draft: DraftAccount::default(),
            accounts: Vec::new(),
        }
    }

    /// True when the store opened successfully at startup.
    pub fn store_available(&self) -> bool {
        self.service.is_some()
    }

    /// The last-fetched record set, replaced wholesale on every fetch.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Save action: validate presence, insert, reset the draft on success.
    pub async fn save(&mut self) -> SaveOutcome {
        let Some(service) = self.service.as_ref() else {
            warn!("Store is not open; ignoring save");
            return SaveOutcome::StoreUnavailable;
        };

        if !self.draft.is_complete() {
            info!(
                "Please fill in all fields (missing: {})",
                self.draft.missing_fields().join(", ")
            );
            return SaveOutcome::Incomplete;
        }

        match service.create_account(NewAccount::from(&self.draft)).await {
            Ok(account) => {
                info!("Data saved successfully (id {})", account.id);
                self.draft.reset();
                SaveOutcome::Saved
            }
            Err(e) => {
                // Draft is left populated so the user's input is not lost.
                error!("Error saving data: {}", e);
                SaveOutcome::Failed
            }
        }
    }

    /// View All Data action: fetch everything and replace the held list.
    ///
    /// Returns true when the list was refreshed. On failure the previous
    /// list is kept.
    pub fn view_all(&mut self) -> bool {
        let Some(service) = self.service.as_ref() else {
            warn!("Store is not open; ignoring fetch");
            return false;
        };

        match service.get_all_accounts() {
            Ok(accounts) => {
                info!("Data fetched successfully ({} records)", accounts.len());
                self.accounts = accounts;
                true
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                false
            }
        }
    }

    /// Renders the held record set as read-only text cards.
    pub fn render(&self) -> String {
        if self.accounts.is_empty() {
            return NO_DATA_PLACEHOLDER.to_string();
        }

        let mut out = String::new();
        for account in &self.accounts {
            out.push_str(&format!(
                "Account #{}\n  Name:       {}\n  Type:       {}\n  Address:    {}\n  Status:     {}\n  Area ID:    {}\n  Meter Size: {}\n  Meter No.:  {}\n",
                account.id,
                account.name,
                account.account_type,
                account.address,
                account.status,
                account.area_id,
                account.meter_size,
                account.meter_no,
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use meterbook_core::errors::{DatabaseError, Result};

    /// In-memory stand-in for the account service with failure switches.
    #[derive(Default)]
    struct MockAccountService {
        accounts: Mutex<Vec<Account>>,
        next_id: AtomicI32,
        create_calls: AtomicUsize,
        fail_writes: AtomicBool,
        fail_reads: AtomicBool,
    }

    #[async_trait::async_trait]
    impl AccountServiceTrait for MockAccountService {
        async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(DatabaseError::QueryFailed("disk I/O error".to_string()).into());
            }
            new_account.validate()?;
            let account = Account {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                name: new_account.name,
                account_type: new_account.account_type,
                address: new_account.address,
                status: new_account.status,
                area_id: new_account.area_id,
                meter_size: new_account.meter_size,
                meter_no: new_account.meter_no,
            };
            self.accounts.lock().unwrap().push(account.clone());
            Ok(account)
        }

        fn get_all_accounts(&self) -> Result<Vec<Account>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(DatabaseError::QueryFailed("disk I/O error".to_string()).into());
            }
            Ok(self.accounts.lock().unwrap().clone())
        }
    }

    fn shell_with_mock() -> (FormShell, Arc<MockAccountService>) {
        let service = Arc::new(MockAccountService::default());
        let shell = FormShell::new(Some(service.clone()));
        (shell, service)
    }

    fn fill_draft(draft: &mut DraftAccount, account_name: &str) {
        draft.name = account_name.to_string();
        draft.account_type = "residential".to_string();
        draft.address = "12 Canal Road".to_string();
        draft.status = "active".to_string();
        draft.area_id = "A-07".to_string();
        draft.meter_size = "15mm".to_string();
        draft.meter_no = format!("MTR-{account_name}");
    }

    #[tokio::test]
    async fn save_with_complete_draft_persists_and_resets() {
        let (mut shell, service) = shell_with_mock();
        fill_draft(&mut shell.draft, "Alice");

        assert_eq!(shell.save().await, SaveOutcome::Saved);
        assert_eq!(service.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(shell.draft, DraftAccount::default());
    }

    #[tokio::test]
    async fn save_with_blank_field_is_a_no_op() {
        let (mut shell, service) = shell_with_mock();
        fill_draft(&mut shell.draft, "Alice");
        shell.draft.status = String::new();
        let before = shell.draft.clone();

        assert_eq!(shell.save().await, SaveOutcome::Incomplete);
        assert_eq!(service.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(shell.draft, before);
    }

    #[tokio::test]
    async fn failed_save_keeps_the_draft_populated() {
        let (mut shell, service) = shell_with_mock();
        service.fail_writes.store(true, Ordering::SeqCst);
        fill_draft(&mut shell.draft, "Alice");
        let before = shell.draft.clone();

        assert_eq!(shell.save().await, SaveOutcome::Failed);
        assert_eq!(shell.draft, before);
    }

    #[tokio::test]
    async fn view_all_replaces_the_held_list() {
        let (mut shell, _service) = shell_with_mock();
        fill_draft(&mut shell.draft, "Alice");
        shell.save().await;
        fill_draft(&mut shell.draft, "Bob");
        shell.save().await;

        assert!(shell.view_all());
        let names: Vec<&str> = shell.accounts().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        let ids: Vec<i32> = shell.accounts().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn view_all_accepts_an_empty_result() {
        let (mut shell, _service) = shell_with_mock();
        assert!(shell.view_all());
        assert!(shell.accounts().is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_previous_list() {
        let (mut shell, service) = shell_with_mock();
        fill_draft(&mut shell.draft, "Alice");
        shell.save().await;
        shell.view_all();
        assert_eq!(shell.accounts().len(), 1);

        service.fail_reads.store(true, Ordering::SeqCst);
        assert!(!shell.view_all());
        assert_eq!(shell.accounts().len(), 1);
    }

    #[tokio::test]
    async fn unavailable_store_makes_every_action_a_no_op() {
        let mut shell = FormShell::new(None);
        assert!(!shell.store_available());
        fill_draft(&mut shell.draft, "Alice");
        let before = shell.draft.clone();

        assert_eq!(shell.save().await, SaveOutcome::StoreUnavailable);
        assert_eq!(shell.draft, before);
        assert!(!shell.view_all());
        assert!(shell.accounts().is_empty());
    }

    #[test]
    fn render_shows_placeholder_when_empty() {
        let shell = FormShell::new(None);
        assert_eq!(shell.render(), NO_DATA_PLACEHOLDER);
    }

    #[tokio::test]
    async fn render_shows_one_card_per_account() {
        let (mut shell, _service) = shell_with_mock();
        fill_draft(&mut shell.draft, "Alice");
        shell.save().await;
        shell.view_all();

        let rendered = shell.render();
        assert!(rendered.contains("Account #"));
        assert!(rendered.contains("Name:       Alice"));
        assert!(rendered.contains("Meter No.:  MTR-Alice"));
        assert!(!rendered.contains(NO_DATA_PLACEHOLDER));
    }
}
