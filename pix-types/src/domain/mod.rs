//! Domain models for the pix transfer service.

pub mod account;
pub mod bank;
pub mod base;
pub mod pix_key;
pub mod transaction;

pub use account::{Account, AccountId};
pub use bank::{Bank, BankId};
pub use base::Base;
pub use pix_key::{PixKey, PixKeyId, PixKeyKind, PixKeyStatus};
pub use transaction::{Transaction, TransactionId, TransactionStatus};
