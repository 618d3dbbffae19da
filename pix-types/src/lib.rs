//! # Pix Types
//!
//! Domain types and port traits for the pix transfer service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Bank, Account, PixKey, Transaction)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the service boundary
//! - `error/` - Validation, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Account, AccountId, Bank, BankId, Base, PixKey, PixKeyId, PixKeyKind, PixKeyStatus,
    Transaction, TransactionId, TransactionStatus,
};
pub use dto::*;
pub use error::{AppError, RepoError, ValidationError};
pub use ports::{PixKeyRepository, TransactionRepository};
