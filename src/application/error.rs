use thiserror::Error;

use crate::domain::{AccountId, Cents};

/// Broad class of an [`AppError`], used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    InsufficientBalance,
    Internal,
}

/// Errors raised by ledger operations.
/// The `Display` text is the message returned to clients.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid accountId. Must be exactly 10 digits")]
    InvalidAccountId,

    #[error("Invalid balance")]
    InvalidBalance,

    #[error("Balance must be a non-negative number")]
    NegativeBalance,

    #[error("An account with the same accountId already exists")]
    AccountAlreadyExists(AccountId),

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Amount must be a positive number")]
    NonPositiveAmount,

    #[error("Resulting balance is out of range")]
    BalanceOverflow,

    #[error("Account not found")]
    AccountNotFound(String),

    #[error("Insufficient balance")]
    InsufficientBalance {
        account_id: AccountId,
        balance: Cents,
        requested: Cents,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidAccountId
            | AppError::InvalidBalance
            | AppError::NegativeBalance
            | AppError::AccountAlreadyExists(_)
            | AppError::InvalidAmount
            | AppError::NonPositiveAmount
            | AppError::BalanceOverflow => ErrorKind::Validation,
            AppError::AccountNotFound(_) => ErrorKind::NotFound,
            AppError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}
