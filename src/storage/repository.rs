use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tokio::sync::RwLock;

use crate::domain::{Account, AccountId};

/// In-memory store of accounts keyed by id.
///
/// All access goes through a single `RwLock`. Lookups share the read lock;
/// inserts and read-modify-write updates hold the write lock for their whole
/// duration, so concurrent updates to one account never interleave.
#[derive(Debug, Default)]
pub struct Repository {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Account operations
    // ========================

    /// Insert a new account.
    /// Returns `false` and leaves the store untouched if the id is taken.
    pub async fn save_account(&self, account: Account) -> bool {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(account);
                true
            }
        }
    }

    /// Get a snapshot of an account by id.
    pub async fn get_account(&self, id: &AccountId) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }

    /// Run `f` against the stored account while holding the write lock.
    /// Returns `None` if no account has this id.
    pub async fn update_account<F, R>(&self, id: &AccountId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Account) -> R,
    {
        let mut accounts = self.accounts.write().await;
        accounts.get_mut(id).map(f)
    }

    /// Number of accounts currently stored.
    pub async fn count_accounts(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AccountId {
        AccountId::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_get_account() {
        let repo = Repository::new();
        assert!(repo.save_account(Account::new(id("1234567890"), 500)).await);

        let account = repo.get_account(&id("1234567890")).await.unwrap();
        assert_eq!(account.balance, 500);
        assert!(repo.get_account(&id("0000000000")).await.is_none());
    }

    #[tokio::test]
    async fn test_save_account_rejects_duplicate_id() {
        let repo = Repository::new();
        assert!(repo.save_account(Account::new(id("1234567890"), 500)).await);
        assert!(!repo.save_account(Account::new(id("1234567890"), 9)).await);

        // Original account is untouched
        let account = repo.get_account(&id("1234567890")).await.unwrap();
        assert_eq!(account.balance, 500);
        assert_eq!(repo.count_accounts().await, 1);
    }

    #[tokio::test]
    async fn test_update_account() {
        let repo = Repository::new();
        repo.save_account(Account::new(id("1234567890"), 500)).await;

        let new_balance = repo
            .update_account(&id("1234567890"), |account| {
                account.balance += 250;
                account.balance
            })
            .await;
        assert_eq!(new_balance, Some(750));
        assert_eq!(repo.get_account(&id("1234567890")).await.unwrap().balance, 750);

        let missing = repo.update_account(&id("1111111111"), |_| ()).await;
        assert!(missing.is_none());
    }
}
