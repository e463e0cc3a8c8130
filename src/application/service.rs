use tracing::info;

use crate::domain::{Account, AccountId, AmountInput, Cents, ParseCentsError, format_cents};
use crate::storage::Repository;

use super::AppError;

/// Application service providing the ledger operations.
/// This is the primary interface for any client (HTTP API, tests, etc.).
pub struct LedgerService {
    repo: Repository,
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new(Repository::new())
    }
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    // ========================
    // Account operations
    // ========================

    /// Open a new account with an opening balance.
    ///
    /// Checks run in order: id shape, balance presence and format, balance
    /// sign, then id uniqueness. A zero opening balance is allowed.
    pub async fn create_account(
        &self,
        account_id: &str,
        balance: Option<&AmountInput>,
    ) -> Result<Account, AppError> {
        let id = AccountId::parse(account_id).ok_or(AppError::InvalidAccountId)?;

        let balance = balance
            .ok_or(AppError::InvalidBalance)?
            .to_cents()
            .map_err(|_| AppError::InvalidBalance)?;
        if balance < 0 {
            return Err(AppError::NegativeBalance);
        }

        let account = Account::new(id, balance);
        if !self.repo.save_account(account.clone()).await {
            return Err(AppError::AccountAlreadyExists(account.id));
        }

        info!(account_id = %account.id, balance = %format_cents(balance), "account created");
        Ok(account)
    }

    /// Get the current balance of an account.
    pub async fn get_balance(&self, account_id: &str) -> Result<Cents, AppError> {
        let id = lookup_id(account_id)?;
        self.repo
            .get_account(&id)
            .await
            .map(|account| account.balance)
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
    }

    /// Add `amount` to an account. Returns the new balance.
    ///
    /// An unknown account is reported before an invalid amount.
    pub async fn deposit(
        &self,
        account_id: &str,
        amount: Option<&AmountInput>,
    ) -> Result<Cents, AppError> {
        let id = lookup_id(account_id)?;
        let amount = parse_amount(amount);

        let new_balance = self
            .repo
            .update_account(&id, |account: &mut Account| -> Result<Cents, AppError> {
                let amount = amount?;
                account.balance = account
                    .balance
                    .checked_add(amount)
                    .ok_or(AppError::BalanceOverflow)?;
                Ok(account.balance)
            })
            .await
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))??;

        info!(account_id = %id, balance = %format_cents(new_balance), "deposit applied");
        Ok(new_balance)
    }

    /// Remove `amount` from an account. Returns the new balance.
    ///
    /// Fails with `InsufficientBalance`, leaving the balance untouched, when
    /// the account cannot cover the amount.
    pub async fn withdraw(
        &self,
        account_id: &str,
        amount: Option<&AmountInput>,
    ) -> Result<Cents, AppError> {
        let id = lookup_id(account_id)?;
        let amount = parse_amount(amount);

        let new_balance = self
            .repo
            .update_account(&id, |account: &mut Account| -> Result<Cents, AppError> {
                let amount = amount?;
                if !account.can_cover(amount) {
                    return Err(AppError::InsufficientBalance {
                        account_id: account.id.clone(),
                        balance: account.balance,
                        requested: amount,
                    });
                }
                account.balance -= amount;
                Ok(account.balance)
            })
            .await
            .ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))??;

        info!(account_id = %id, balance = %format_cents(new_balance), "withdrawal applied");
        Ok(new_balance)
    }

    /// Number of open accounts.
    pub async fn account_count(&self) -> usize {
        self.repo.count_accounts().await
    }
}

/// A malformed id can never match a stored account, so it reads as not found.
fn lookup_id(account_id: &str) -> Result<AccountId, AppError> {
    AccountId::parse(account_id).ok_or_else(|| AppError::AccountNotFound(account_id.to_string()))
}

/// Deposit and withdrawal amounts must be present, numeric and positive.
fn parse_amount(amount: Option<&AmountInput>) -> Result<Cents, AppError> {
    let cents = amount
        .ok_or(AppError::InvalidAmount)?
        .to_cents()
        .map_err(|e| match e {
            ParseCentsError::InvalidFormat => AppError::InvalidAmount,
            ParseCentsError::OutOfRange => AppError::BalanceOverflow,
        })?;
    if cents <= 0 {
        return Err(AppError::NonPositiveAmount);
    }
    Ok(cents)
}
