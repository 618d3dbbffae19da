//! Transaction repository port.
//!
//! This is the persistence boundary around the Transaction entity.
//! The domain never calls it; the service layer does.

use crate::domain::{Transaction, TransactionId};
use crate::error::RepoError;

/// Persistence port for transactions.
///
/// Implementations must serialize concurrent writes to the same transaction;
/// the entity itself provides no such guarantee.
#[async_trait::async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
    /// Persists a brand-new transaction.
    ///
    /// Fails with `Conflict` if the identifier is already stored.
    async fn register(&self, transaction: &Transaction) -> Result<(), RepoError>;

    /// Persists the current state of a stored transaction.
    ///
    /// Fails with `NotFound` if the identifier was never registered.
    async fn save(&self, transaction: &Transaction) -> Result<(), RepoError>;

    /// Gets a transaction by ID, failing with `NotFound` if absent.
    async fn find(&self, id: &TransactionId) -> Result<Transaction, RepoError>;
}
