//! In-memory repository adapters.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use pix_types::{
    Account, AccountId, Bank, BankId, PixKey, PixKeyKind, PixKeyRepository, RepoError, Transaction,
    TransactionId, TransactionRepository,
};

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// Transaction store backed by a concurrent map.
///
/// Each write holds the shard lock for its key, so concurrent saves of the
/// same transaction are serialized (last write wins).
#[derive(Default)]
pub struct InMemoryTransactions {
    transactions: DashMap<TransactionId, Transaction>,
}

impl InMemoryTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactions {
    async fn register(&self, transaction: &Transaction) -> Result<(), RepoError> {
        match self.transactions.entry(transaction.id().clone()) {
            Entry::Occupied(_) => Err(RepoError::Conflict(format!(
                "transaction {} already exists",
                transaction.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(transaction.clone());
                tracing::debug!(transaction_id = %transaction.id(), "transaction stored");
                Ok(())
            }
        }
    }

    async fn save(&self, transaction: &Transaction) -> Result<(), RepoError> {
        let mut stored = self
            .transactions
            .get_mut(transaction.id())
            .ok_or(RepoError::NotFound)?;
        *stored = transaction.clone();
        tracing::debug!(
            transaction_id = %transaction.id(),
            status = %transaction.status(),
            "transaction updated"
        );
        Ok(())
    }

    async fn find(&self, id: &TransactionId) -> Result<Transaction, RepoError> {
        self.transactions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(RepoError::NotFound)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Banks, accounts and keys
// ─────────────────────────────────────────────────────────────────────────────

/// Directory of banks, accounts and payment keys.
#[derive(Default)]
pub struct InMemoryDirectory {
    pub(crate) banks: DashMap<BankId, Bank>,
    pub(crate) accounts: DashMap<AccountId, Account>,
    pub(crate) keys: DashMap<(PixKeyKind, String), PixKey>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bank.
    pub fn add_bank(&self, bank: Bank) -> Result<(), RepoError> {
        bank.validate()?;
        match self.banks.entry(bank.id().clone()) {
            Entry::Occupied(_) => Err(RepoError::Conflict(format!(
                "bank {} already exists",
                bank.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(bank);
                Ok(())
            }
        }
    }

    /// Adds an account; its bank must already be present.
    pub fn add_account(&self, account: Account) -> Result<(), RepoError> {
        account.validate()?;
        if !self.banks.contains_key(&account.bank_id) {
            return Err(RepoError::NotFound);
        }
        match self.accounts.entry(account.id().clone()) {
            Entry::Occupied(_) => Err(RepoError::Conflict(format!(
                "account {} already exists",
                account.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    /// Registers a payment key; its account must already be present and the
    /// key value must be unused for its kind.
    pub fn register_key(&self, pix_key: PixKey) -> Result<(), RepoError> {
        pix_key.validate()?;
        if !self.accounts.contains_key(&pix_key.account_id) {
            return Err(RepoError::NotFound);
        }
        match self.keys.entry((pix_key.kind, pix_key.key.clone())) {
            Entry::Occupied(_) => Err(RepoError::Conflict(format!(
                "{} key {} already registered",
                pix_key.kind, pix_key.key
            ))),
            Entry::Vacant(slot) => {
                slot.insert(pix_key);
                Ok(())
            }
        }
    }

    pub fn find_bank(&self, id: &BankId) -> Option<Bank> {
        self.banks.get(id).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl PixKeyRepository for InMemoryDirectory {
    async fn find_account(&self, id: &AccountId) -> Result<Account, RepoError> {
        self.accounts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(RepoError::NotFound)
    }

    async fn find_key_by_kind(&self, key: &str, kind: PixKeyKind) -> Result<PixKey, RepoError> {
        self.keys
            .get(&(kind, key.to_string()))
            .map(|entry| entry.value().clone())
            .ok_or(RepoError::NotFound)
    }
}
