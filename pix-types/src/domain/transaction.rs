//! Transaction domain model.
//!
//! A transaction moves funds from a source account to the account a payment
//! key resolves to. It is created `pending` and then moved exactly once by
//! [`Transaction::complete`] or [`Transaction::cancel`]. Both transitions
//! re-run validation after mutating; a failed transition leaves the new status
//! in place and the instance must be discarded, not persisted.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::{Account, AccountId};
use super::base::{Base, string_id};
use super::pix_key::PixKey;
use crate::error::ValidationError;

string_id!(
    /// Unique identifier for a Transaction.
    TransactionId
);

/// Lifecycle status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    /// Set by settlement outside this crate; nothing here transitions to it.
    Confirmed,
    Error,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Confirmed => "confirmed",
            TransactionStatus::Error => "error",
        }
    }

    /// Statuses a transaction may hold while it passes through this core.
    fn is_assignable(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Pending | TransactionStatus::Completed | TransactionStatus::Error
        )
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TransactionStatus::Pending),
            "completed" => Ok(TransactionStatus::Completed),
            "confirmed" => Ok(TransactionStatus::Confirmed),
            "error" => Ok(TransactionStatus::Error),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// A transfer from an account to a payment key.
///
/// The source account and destination key are shared read-only handles; the
/// transaction never mutates them.
#[derive(Debug, Clone)]
pub struct Transaction {
    base: Base<TransactionId>,
    account_from: Arc<Account>,
    account_from_id: AccountId,
    amount: f64,
    pix_key_to: Arc<PixKey>,
    status: TransactionStatus,
    description: String,
    cancel_description: String,
}

impl Transaction {
    /// Creates a new pending transaction.
    ///
    /// A blank or absent `id` is replaced by a generated one.
    ///
    /// # Validation
    /// - Amount must be greater than zero
    /// - Source account and key owner must differ
    /// - Description cannot be empty
    pub fn new(
        account_from: Arc<Account>,
        amount: f64,
        pix_key_to: Arc<PixKey>,
        description: impl Into<String>,
        id: Option<TransactionId>,
    ) -> Result<Self, ValidationError> {
        let id = id.filter(|id| !id.is_empty()).unwrap_or_default();

        let transaction = Self {
            base: Base::new(id),
            account_from_id: account_from.id().clone(),
            account_from,
            amount,
            pix_key_to,
            status: TransactionStatus::Pending,
            description: description.into(),
            cancel_description: String::new(),
        };

        transaction.validate()?;
        Ok(transaction)
    }

    /// Reconstructs a transaction from stored fields without validating.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        base: Base<TransactionId>,
        account_from: Arc<Account>,
        amount: f64,
        pix_key_to: Arc<PixKey>,
        status: TransactionStatus,
        description: String,
        cancel_description: String,
    ) -> Self {
        Self {
            base,
            account_from_id: account_from.id().clone(),
            account_from,
            amount,
            pix_key_to,
            status,
            description,
            cancel_description,
        }
    }

    /// Marks the transaction as completed.
    pub fn complete(&mut self) -> Result<(), ValidationError> {
        self.status = TransactionStatus::Completed;
        self.base.touch();
        self.validate()
    }

    /// Marks the transaction as failed, recording why.
    pub fn cancel(&mut self, description: impl Into<String>) -> Result<(), ValidationError> {
        self.status = TransactionStatus::Error;
        self.cancel_description = description.into();
        self.base.touch();
        self.validate()
    }

    /// Checks every invariant, reporting the first violation.
    ///
    /// Business rules are checked in order (amount, status, same account)
    /// and win over missing-field errors.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }

        if !self.status.is_assignable() {
            return Err(ValidationError::InvalidStatus(self.status.to_string()));
        }

        if self.pix_key_to.account_id == *self.account_from.id() {
            return Err(ValidationError::SameAccount);
        }

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(())
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.base.id.is_empty() {
            missing.push("id");
        }
        if self.account_from_id.is_empty() {
            missing.push("account_from_id");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.status == TransactionStatus::Error && self.cancel_description.trim().is_empty() {
            missing.push("cancel_description");
        }
        missing
    }

    pub fn id(&self) -> &TransactionId {
        &self.base.id
    }

    pub fn base(&self) -> &Base<TransactionId> {
        &self.base
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.base.updated_at
    }

    pub fn account_from(&self) -> &Account {
        &self.account_from
    }

    pub fn account_from_id(&self) -> &AccountId {
        &self.account_from_id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn pix_key_to(&self) -> &PixKey {
        &self.pix_key_to
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cancel_description(&self) -> &str {
        &self.cancel_description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bank, Base, PixKeyId, PixKeyKind, PixKeyStatus};

    fn account(id: &str) -> Arc<Account> {
        let bank = Bank::new("001", "First Bank").unwrap();
        Arc::new(Account::from_parts(
            Base::new(AccountId::from(id)),
            format!("Owner {id}"),
            bank.id().clone(),
            "1234-5".to_string(),
        ))
    }

    fn key_for(account_id: &str) -> Arc<PixKey> {
        Arc::new(PixKey::from_parts(
            Base::new(PixKeyId::new()),
            PixKeyKind::Email,
            format!("{account_id}@example.com"),
            AccountId::from(account_id),
            PixKeyStatus::Active,
        ))
    }

    fn pending() -> Transaction {
        Transaction::new(account("A"), 100.0, key_for("B"), "payment", None).unwrap()
    }

    #[test]
    fn test_new_transaction_is_pending() {
        let tx = pending();

        assert_eq!(tx.status(), TransactionStatus::Pending);
        assert_eq!(tx.account_from_id().as_str(), "A");
        assert_eq!(tx.amount(), 100.0);
        assert_eq!(tx.description(), "payment");
        assert!(tx.cancel_description().is_empty());
        assert!(!tx.id().is_empty());
        assert_eq!(tx.created_at(), tx.updated_at());
    }

    #[test]
    fn test_caller_supplied_id_is_kept() {
        let tx = Transaction::new(
            account("A"),
            10.0,
            key_for("B"),
            "payment",
            Some(TransactionId::from("tx-42")),
        )
        .unwrap();
        assert_eq!(tx.id().as_str(), "tx-42");
    }

    #[test]
    fn test_blank_id_is_replaced() {
        let tx = Transaction::new(
            account("A"),
            10.0,
            key_for("B"),
            "payment",
            Some(TransactionId::from("")),
        )
        .unwrap();
        assert!(!tx.id().is_empty());
    }

    #[test]
    fn test_non_positive_amount_fails() {
        for amount in [0.0, -0.01, -100.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = Transaction::new(account("A"), amount, key_for("B"), "payment", None);
            let err = result.unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveAmount);
            assert_eq!(err.to_string(), "amount must be greater than 0");
        }
    }

    #[test]
    fn test_same_account_fails() {
        let result = Transaction::new(account("A"), 50.0, key_for("A"), "payment", None);
        let err = result.unwrap_err();
        assert_eq!(err, ValidationError::SameAccount);
        assert!(err.to_string().contains("cannot be the same"));
    }

    #[test]
    fn test_empty_description_fails() {
        let result = Transaction::new(account("A"), 50.0, key_for("B"), "", None);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::MissingFields(vec!["description"])
        );
    }

    #[test]
    fn test_business_rules_win_over_missing_fields() {
        let result = Transaction::new(account("A"), 0.0, key_for("A"), "", None);
        assert_eq!(result.unwrap_err(), ValidationError::NonPositiveAmount);

        let result = Transaction::new(account("A"), 5.0, key_for("A"), "", None);
        assert_eq!(result.unwrap_err(), ValidationError::SameAccount);
    }

    #[test]
    fn test_complete() {
        let mut tx = pending();
        let created = tx.created_at();

        tx.complete().unwrap();

        assert_eq!(tx.status(), TransactionStatus::Completed);
        assert_eq!(tx.created_at(), created);
        assert!(tx.updated_at() >= created);
    }

    #[test]
    fn test_complete_twice_is_accepted() {
        let mut tx = pending();
        tx.complete().unwrap();
        tx.complete().unwrap();
        assert_eq!(tx.status(), TransactionStatus::Completed);
    }

    #[test]
    fn test_cancel_records_reason() {
        let mut tx = pending();
        let created = tx.created_at();
        let before = tx.updated_at();

        tx.cancel("insufficient funds").unwrap();

        assert_eq!(tx.status(), TransactionStatus::Error);
        assert_eq!(tx.cancel_description(), "insufficient funds");
        assert_eq!(tx.created_at(), created);
        assert!(tx.updated_at() >= before);
    }

    #[test]
    fn test_cancel_after_complete_is_accepted() {
        let mut tx = pending();
        tx.complete().unwrap();

        tx.cancel("chargeback").unwrap();

        assert_eq!(tx.status(), TransactionStatus::Error);
        assert_eq!(tx.cancel_description(), "chargeback");
    }

    #[test]
    fn test_cancel_without_reason_fails_and_keeps_mutation() {
        let mut tx = pending();

        let err = tx.cancel("").unwrap_err();

        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["cancel_description"])
        );
        assert_eq!(tx.status(), TransactionStatus::Error);
    }

    #[test]
    fn test_transitions_fail_on_invalid_stored_amount() {
        let mut tx = Transaction::from_parts(
            Base::new(TransactionId::new()),
            account("A"),
            0.0,
            key_for("B"),
            TransactionStatus::Pending,
            "payment".into(),
            String::new(),
        );

        assert_eq!(tx.complete().unwrap_err(), ValidationError::NonPositiveAmount);
        assert_eq!(tx.status(), TransactionStatus::Completed);
        assert_eq!(
            tx.cancel("reason").unwrap_err(),
            ValidationError::NonPositiveAmount
        );
        assert_eq!(tx.status(), TransactionStatus::Error);
    }

    #[test]
    fn test_confirmed_is_not_assignable_here() {
        let tx = Transaction::from_parts(
            Base::new(TransactionId::new()),
            account("A"),
            10.0,
            key_for("B"),
            TransactionStatus::Confirmed,
            "payment".into(),
            String::new(),
        );

        assert_eq!(
            tx.validate().unwrap_err(),
            ValidationError::InvalidStatus("confirmed".into())
        );
    }

    #[test]
    fn test_status_literals() {
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Completed,
            TransactionStatus::Confirmed,
            TransactionStatus::Error,
        ] {
            assert_eq!(status.as_str().parse::<TransactionStatus>().unwrap(), status);
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status.as_str())
            );
        }
        assert_eq!(
            "settled".parse::<TransactionStatus>().unwrap_err(),
            ValidationError::InvalidStatus("settled".into())
        );
    }
}
