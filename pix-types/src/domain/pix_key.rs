//! Payment key domain model.

use serde::{Deserialize, Serialize};

use super::account::{Account, AccountId};
use super::base::{Base, string_id};
use crate::error::ValidationError;

string_id!(
    /// Unique identifier for a PixKey.
    PixKeyId
);

/// The kind of alias a payment key carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyKind {
    Email,
    Cpf,
}

impl PixKeyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PixKeyKind::Email => "email",
            PixKeyKind::Cpf => "cpf",
        }
    }
}

impl std::fmt::Display for PixKeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PixKeyKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(PixKeyKind::Email),
            "cpf" => Ok(PixKeyKind::Cpf),
            other => Err(ValidationError::InvalidKeyKind(other.to_string())),
        }
    }
}

/// Whether a payment key can currently receive transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyStatus {
    Active,
    Inactive,
}

/// An alias that resolves to a destination account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixKey {
    pub base: Base<PixKeyId>,
    pub kind: PixKeyKind,
    /// The alias value (an email address, a CPF number)
    pub key: String,
    /// Account the key resolves to
    pub account_id: AccountId,
    pub status: PixKeyStatus,
}

impl PixKey {
    /// Creates a new active key pointing at `account`.
    pub fn new(
        kind: PixKeyKind,
        account: &Account,
        key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let pix_key = Self::from_parts(
            Base::new(PixKeyId::new()),
            kind,
            key.into(),
            account.id().clone(),
            PixKeyStatus::Active,
        );
        pix_key.validate()?;
        Ok(pix_key)
    }

    /// Creates a key with all fields specified (for stored records).
    pub fn from_parts(
        base: Base<PixKeyId>,
        kind: PixKeyKind,
        key: String,
        account_id: AccountId,
        status: PixKeyStatus,
    ) -> Self {
        Self {
            base,
            kind,
            key,
            account_id,
            status,
        }
    }

    pub fn id(&self) -> &PixKeyId {
        &self.base.id
    }

    /// Checks that every required field is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.base.id.is_empty() {
            missing.push("id");
        }
        if self.key.trim().is_empty() {
            missing.push("key");
        }
        if self.account_id.is_empty() {
            missing.push("account_id");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bank;

    #[test]
    fn test_new_key_is_active() {
        let bank = Bank::new("001", "First Bank").unwrap();
        let account = Account::new(&bank, "1234-5", "Bob").unwrap();
        let key = PixKey::new(PixKeyKind::Email, &account, "bob@example.com").unwrap();

        assert_eq!(key.status, PixKeyStatus::Active);
        assert_eq!(&key.account_id, account.id());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("cpf".parse::<PixKeyKind>().unwrap(), PixKeyKind::Cpf);
        assert_eq!(
            "phone".parse::<PixKeyKind>().unwrap_err(),
            ValidationError::InvalidKeyKind("phone".into())
        );
    }

    #[test]
    fn test_empty_key_fails() {
        let bank = Bank::new("001", "First Bank").unwrap();
        let account = Account::new(&bank, "1234-5", "Bob").unwrap();
        let result = PixKey::new(PixKeyKind::Cpf, &account, "");
        assert_eq!(result.unwrap_err(), ValidationError::MissingFields(vec!["key"]));
    }
}
