//! Serializable seed records for populating an [`InMemoryDirectory`].

use serde::{Deserialize, Serialize};

use pix_types::{
    Account, AccountId, Bank, BankId, Base, PixKey, PixKeyId, PixKeyKind, PixKeyStatus, RepoError,
};

use crate::memory::InMemoryDirectory;

/// Banks, accounts and keys to load, in dependency order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub banks: Vec<BankRecord>,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
    #[serde(default)]
    pub pix_keys: Vec<PixKeyRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankRecord {
    pub id: BankId,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub bank_id: BankId,
    pub number: String,
    pub owner_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixKeyRecord {
    /// Generated when absent
    #[serde(default)]
    pub id: Option<PixKeyId>,
    pub kind: PixKeyKind,
    pub key: String,
    pub account_id: AccountId,
    #[serde(default = "default_key_status")]
    pub status: PixKeyStatus,
}

fn default_key_status() -> PixKeyStatus {
    PixKeyStatus::Active
}

impl InMemoryDirectory {
    /// Builds a directory from seed records, stopping at the first invalid one.
    pub fn from_seed(seed: Seed) -> Result<Self, RepoError> {
        let directory = Self::new();

        for record in seed.banks {
            directory.add_bank(Bank::from_parts(
                Base::new(record.id),
                record.code,
                record.name,
            ))?;
        }

        for record in seed.accounts {
            directory.add_account(Account::from_parts(
                Base::new(record.id),
                record.owner_name,
                record.bank_id,
                record.number,
            ))?;
        }

        for record in seed.pix_keys {
            directory.register_key(PixKey::from_parts(
                Base::new(record.id.unwrap_or_default()),
                record.kind,
                record.key,
                record.account_id,
                record.status,
            ))?;
        }

        tracing::debug!(
            banks = directory.banks.len(),
            accounts = directory.accounts.len(),
            pix_keys = directory.keys.len(),
            "directory seeded"
        );
        Ok(directory)
    }
}
