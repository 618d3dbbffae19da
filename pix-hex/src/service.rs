//! Transaction Application Service
//!
//! Orchestrates the Transaction entity through the repository ports.
//! Contains NO infrastructure logic - pure business orchestration.

use std::sync::Arc;

use pix_types::{
    AppError, PixKeyRepository, PixKeyStatus, RegisterTransactionRequest, RepoError, Transaction,
    TransactionId, TransactionRepository,
};

/// Application service for pix transfers.
///
/// Generic over the transaction store `T` and the account/key lookup `K`,
/// both injected at compile time.
pub struct TransactionService<T: TransactionRepository, K: PixKeyRepository> {
    transactions: T,
    keys: K,
}

impl<T: TransactionRepository, K: PixKeyRepository> TransactionService<T, K> {
    /// Creates a new service over the given adapters.
    pub fn new(transactions: T, keys: K) -> Self {
        Self { transactions, keys }
    }

    /// Returns a reference to the transaction repository.
    pub fn transactions(&self) -> &T {
        &self.transactions
    }

    /// Returns a reference to the account/key lookup.
    pub fn keys(&self) -> &K {
        &self.keys
    }

    /// Registers a new pending transfer.
    ///
    /// The destination key must be active.
    pub async fn register(&self, req: RegisterTransactionRequest) -> Result<Transaction, AppError> {
        let account = self
            .keys
            .find_account(&req.account_id)
            .await
            .map_err(|e| not_found_as(e, format!("Account {}", req.account_id)))?;

        let pix_key = self
            .keys
            .find_key_by_kind(&req.pix_key_to, req.pix_key_kind_to)
            .await
            .map_err(|e| {
                not_found_as(e, format!("Pix key {} ({})", req.pix_key_to, req.pix_key_kind_to))
            })?;

        if pix_key.status != PixKeyStatus::Active {
            return Err(AppError::BadRequest(format!(
                "Pix key {} ({}) is inactive",
                pix_key.key, pix_key.kind
            )));
        }

        let transaction = Transaction::new(
            Arc::new(account),
            req.amount,
            Arc::new(pix_key),
            req.description,
            req.id,
        )?;

        self.transactions.register(&transaction).await?;

        tracing::info!(
            transaction_id = %transaction.id(),
            account_from = %transaction.account_from_id(),
            amount = transaction.amount(),
            "transaction registered"
        );
        Ok(transaction)
    }

    /// Completes a stored transaction.
    ///
    /// A transaction that fails validation after the transition is not saved.
    pub async fn complete(&self, id: &TransactionId) -> Result<Transaction, AppError> {
        let mut transaction = self.find(id).await?;

        if let Err(e) = transaction.complete() {
            tracing::warn!(transaction_id = %id, error = %e, "completion rejected");
            return Err(e.into());
        }

        self.transactions.save(&transaction).await?;
        tracing::info!(transaction_id = %id, "transaction completed");
        Ok(transaction)
    }

    /// Cancels a stored transaction with the given reason.
    ///
    /// A transaction that fails validation after the transition is not saved.
    pub async fn cancel(&self, id: &TransactionId, reason: &str) -> Result<Transaction, AppError> {
        let mut transaction = self.find(id).await?;

        if let Err(e) = transaction.cancel(reason) {
            tracing::warn!(transaction_id = %id, error = %e, "cancellation rejected");
            return Err(e.into());
        }

        self.transactions.save(&transaction).await?;
        tracing::info!(transaction_id = %id, reason, "transaction cancelled");
        Ok(transaction)
    }

    /// Gets a transaction by ID.
    pub async fn find(&self, id: &TransactionId) -> Result<Transaction, AppError> {
        self.transactions
            .find(id)
            .await
            .map_err(|e| not_found_as(e, format!("Transaction {}", id)))
    }
}

/// Names the missing resource when a lookup reports `NotFound`.
fn not_found_as(err: RepoError, what: String) -> AppError {
    match err {
        RepoError::NotFound => AppError::NotFound(what),
        other => other.into(),
    }
}
