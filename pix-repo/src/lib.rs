//! # Pix Repository
//!
//! Repository implementations (adapters) for the pix transfer service.
//! Both adapters keep their state in memory and implement the ports from
//! `pix-types`:
//! - [`InMemoryTransactions`] implements `TransactionRepository`
//! - [`InMemoryDirectory`] implements `PixKeyRepository`, loadable from a [`Seed`]

pub mod memory;
pub mod seed;


pub use memory::{InMemoryDirectory, InMemoryTransactions};
pub use seed::{AccountRecord, BankRecord, PixKeyRecord, Seed};
