//! # Pix Hex
//!
//! Application service layer for the pix transfer service.
//!
//! The service is generic over `T: TransactionRepository` and
//! `K: PixKeyRepository`, allowing different adapters to be injected.

pub mod service;


pub use service::TransactionService;
