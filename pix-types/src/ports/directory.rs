//! Lookup port for the entities a transaction references.

use crate::domain::{Account, AccountId, PixKey, PixKeyKind};
use crate::error::RepoError;

/// Read-only lookups for accounts and payment keys.
#[async_trait::async_trait]
pub trait PixKeyRepository: Send + Sync + 'static {
    /// Gets an account by ID, failing with `NotFound` if absent.
    async fn find_account(&self, id: &AccountId) -> Result<Account, RepoError>;

    /// Resolves a payment key by its value and kind, failing with `NotFound` if absent.
    async fn find_key_by_kind(&self, key: &str, kind: PixKeyKind) -> Result<PixKey, RepoError>;
}
