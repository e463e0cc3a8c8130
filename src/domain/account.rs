use std::fmt;
use std::str::FromStr;

use super::Cents;

/// Number of ASCII digits every account identifier must have.
pub const ACCOUNT_ID_LEN: usize = 10;

/// Identifier of an account: exactly ten ASCII digits, e.g. "1234567890".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    /// Returns `None` unless `s` is exactly ten ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        let valid = s.len() == ACCOUNT_ID_LEN && s.bytes().all(|b| b.is_ascii_digit());
        valid.then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAccountId;

impl fmt::Display for InvalidAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account id must be exactly {} digits", ACCOUNT_ID_LEN)
    }
}

impl std::error::Error for InvalidAccountId {}

impl FromStr for AccountId {
    type Err = InvalidAccountId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(InvalidAccountId)
    }
}

/// A ledger account. The balance is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub balance: Cents,
}

impl Account {
    pub fn new(id: AccountId, balance: Cents) -> Self {
        debug_assert!(balance >= 0, "Account balance must be non-negative");
        Self { id, balance }
    }

    pub fn can_cover(&self, amount: Cents) -> bool {
        self.balance >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_accepts_ten_digits() {
        let id = AccountId::parse("1234567890").unwrap();
        assert_eq!(id.as_str(), "1234567890");
        assert_eq!(id.to_string(), "1234567890");
        assert!(AccountId::parse("0000000000").is_some());
    }

    #[test]
    fn test_account_id_rejects_bad_shapes() {
        for bad in [
            "",
            "123",
            "12345678901",
            "abcdefghij",
            "12345 6789",
            "123456789a",
            "-123456789",
            "١٢٣٤٥٦٧٨٩٠", // non-ASCII digits
        ] {
            assert!(AccountId::parse(bad).is_none(), "accepted {:?}", bad);
            assert!(bad.parse::<AccountId>().is_err());
        }
    }

    #[test]
    fn test_can_cover() {
        let account = Account::new(AccountId::parse("1234567890").unwrap(), 1000);
        assert!(account.can_cover(1000));
        assert!(account.can_cover(1));
        assert!(!account.can_cover(1001));
    }
}
