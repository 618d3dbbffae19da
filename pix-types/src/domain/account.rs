//! Account domain model.

use serde::{Deserialize, Serialize};

use super::bank::{Bank, BankId};
use super::base::{Base, string_id};
use crate::error::ValidationError;

string_id!(
    /// Unique identifier for an Account.
    AccountId
);

/// A financial account that can send and receive transfers.
///
/// Accounts are referenced by transactions but never modified by them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub base: Base<AccountId>,
    /// Name of the account holder
    pub owner_name: String,
    /// Bank holding the account
    pub bank_id: BankId,
    /// Account number within the bank
    pub number: String,
}

impl Account {
    /// Creates a new account at the given bank.
    ///
    /// # Validation
    /// - Owner name and number cannot be empty
    pub fn new(
        bank: &Bank,
        number: impl Into<String>,
        owner_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let account = Self::from_parts(
            Base::new(AccountId::new()),
            owner_name.into(),
            bank.id().clone(),
            number.into(),
        );
        account.validate()?;
        Ok(account)
    }

    /// Creates an account with all fields specified (for stored records).
    pub fn from_parts(
        base: Base<AccountId>,
        owner_name: String,
        bank_id: BankId,
        number: String,
    ) -> Self {
        Self {
            base,
            owner_name,
            bank_id,
            number,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.base.id
    }

    /// Checks that every required field is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.base.id.is_empty() {
            missing.push("id");
        }
        if self.owner_name.trim().is_empty() {
            missing.push("owner_name");
        }
        if self.bank_id.is_empty() {
            missing.push("bank_id");
        }
        if self.number.trim().is_empty() {
            missing.push("number");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}
