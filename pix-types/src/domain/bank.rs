//! Bank domain model.

use serde::{Deserialize, Serialize};

use super::base::{Base, string_id};
use crate::error::ValidationError;

string_id!(
    /// Unique identifier for a Bank.
    BankId
);

/// A financial institution holding accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    pub base: Base<BankId>,
    /// Institution code
    pub code: String,
    /// Display name
    pub name: String,
}

impl Bank {
    /// Creates a new bank.
    ///
    /// # Validation
    /// - Code and name cannot be empty
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let bank = Self::from_parts(Base::new(BankId::new()), code.into(), name.into());
        bank.validate()?;
        Ok(bank)
    }

    /// Creates a bank with all fields specified (for stored records).
    pub fn from_parts(base: Base<BankId>, code: String, name: String) -> Self {
        Self { base, code, name }
    }

    pub fn id(&self) -> &BankId {
        &self.base.id
    }

    /// Checks that every required field is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.base.id.is_empty() {
            missing.push("id");
        }
        if self.code.trim().is_empty() {
            missing.push("code");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}
