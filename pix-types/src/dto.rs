//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, PixKeyKind, Transaction, TransactionId, TransactionStatus};

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a new transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterTransactionRequest {
    /// Optional caller-supplied identifier; a UUID is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransactionId>,
    /// Source account ID
    pub account_id: AccountId,
    /// Amount to transfer, must be positive
    pub amount: f64,
    /// Destination payment key value
    pub pix_key_to: String,
    /// Kind of the destination payment key
    pub pix_key_kind_to: PixKeyKind,
    /// Reason for the transfer
    pub description: String,
}

/// Outward view of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: TransactionId,
    pub account_from_id: AccountId,
    /// Account the destination key resolves to
    pub account_to_id: AccountId,
    pub amount: f64,
    pub pix_key_to: String,
    pub pix_key_kind_to: PixKeyKind,
    pub status: TransactionStatus,
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub cancel_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id().clone(),
            account_from_id: tx.account_from_id().clone(),
            account_to_id: tx.pix_key_to().account_id.clone(),
            amount: tx.amount(),
            pix_key_to: tx.pix_key_to().key.clone(),
            pix_key_kind_to: tx.pix_key_to().kind,
            status: tx.status(),
            description: tx.description().to_string(),
            cancel_description: tx.cancel_description().to_string(),
            created_at: tx.created_at(),
            updated_at: tx.updated_at(),
        }
    }
}
