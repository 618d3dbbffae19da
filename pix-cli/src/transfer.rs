//! Single transfer against a seeded directory.

use anyhow::Result;

use pix_hex::TransactionService;
use pix_repo::{InMemoryDirectory, InMemoryTransactions, Seed};
use pix_types::{AccountId, PixKeyKind, RegisterTransactionRequest, Transaction, TransactionId};

/// What to do with the transaction once it is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Leave it pending
    Pending,
    Complete,
    Cancel(String),
}

impl Settlement {
    pub fn from_flags(complete: bool, cancel: Option<String>) -> Self {
        match (complete, cancel) {
            (true, _) => Settlement::Complete,
            (false, Some(reason)) => Settlement::Cancel(reason),
            (false, None) => Settlement::Pending,
        }
    }
}

/// Arguments of `pix transfer`.
#[derive(Debug, Clone)]
pub struct TransferArgs {
    pub from: String,
    pub key: String,
    pub kind: PixKeyKind,
    pub amount: f64,
    pub description: String,
    pub id: Option<String>,
    pub settlement: Settlement,
}

/// Registers one transfer against `seed` and applies the requested settlement.
pub async fn transfer(seed: Seed, args: TransferArgs) -> Result<Transaction> {
    let directory = InMemoryDirectory::from_seed(seed)?;
    let service = TransactionService::new(InMemoryTransactions::new(), directory);

    let tx = service
        .register(RegisterTransactionRequest {
            id: args.id.map(TransactionId::from),
            account_id: AccountId::from(args.from),
            amount: args.amount,
            pix_key_to: args.key,
            pix_key_kind_to: args.kind,
            description: args.description,
        })
        .await?;

    let tx = match args.settlement {
        Settlement::Pending => tx,
        Settlement::Complete => service.complete(tx.id()).await?,
        Settlement::Cancel(reason) => service.cancel(tx.id(), &reason).await?,
    };

    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pix_types::{AppError, TransactionStatus};

    const SEED: &str = r#"{
        "banks": [{ "id": "bank-1", "code": "001", "name": "First Bank" }],
        "accounts": [
            { "id": "A", "bank_id": "bank-1", "number": "0001", "owner_name": "Alice" },
            { "id": "B", "bank_id": "bank-1", "number": "0002", "owner_name": "Bob" }
        ],
        "pix_keys": [{ "kind": "email", "key": "bob@example.com", "account_id": "B" }]
    }"#;

    fn seed() -> Seed {
        serde_json::from_str(SEED).unwrap()
    }

    fn args(amount: f64, settlement: Settlement) -> TransferArgs {
        TransferArgs {
            from: "A".into(),
            key: "bob@example.com".into(),
            kind: PixKeyKind::Email,
            amount,
            description: "payment".into(),
            id: Some("tx-1".into()),
            settlement,
        }
    }

    #[test]
    fn test_settlement_from_flags() {
        assert_eq!(Settlement::from_flags(false, None), Settlement::Pending);
        assert_eq!(Settlement::from_flags(true, None), Settlement::Complete);
        assert_eq!(
            Settlement::from_flags(false, Some("late".into())),
            Settlement::Cancel("late".into())
        );
    }

    #[tokio::test]
    async fn test_transfer_left_pending() {
        let tx = transfer(seed(), args(10.0, Settlement::Pending)).await.unwrap();

        assert_eq!(tx.id().as_str(), "tx-1");
        assert_eq!(tx.status(), TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn test_transfer_and_complete() {
        let tx = transfer(seed(), args(100.0, Settlement::Complete))
            .await
            .unwrap();

        assert_eq!(tx.status(), TransactionStatus::Completed);
        assert_eq!(tx.account_from_id().as_str(), "A");
    }

    #[tokio::test]
    async fn test_transfer_and_cancel() {
        let settlement = Settlement::Cancel("insufficient funds".into());

        let tx = transfer(seed(), args(100.0, settlement)).await.unwrap();

        assert_eq!(tx.status(), TransactionStatus::Error);
        assert_eq!(tx.cancel_description(), "insufficient funds");
    }

    #[tokio::test]
    async fn test_transfer_rejects_invalid_amount() {
        let err = transfer(seed(), args(0.0, Settlement::Complete))
            .await
            .unwrap_err();

        let app = err.downcast_ref::<AppError>().unwrap();
        assert!(matches!(app, AppError::BadRequest(msg) if msg == "amount must be greater than 0"));
    }

    #[tokio::test]
    async fn test_transfer_rejects_empty_cancel_reason() {
        let err = transfer(seed(), args(5.0, Settlement::Cancel(String::new())))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("cancel_description"));
    }
}
