//! # Trial Balance Core
//!
//! A storage-agnostic library for generating trial balance accounting
//! reports inside a larger ERP system.
//!
//! ## Features
//!
//! - **Balance queries**: beginning balance and period activity described as
//!   filter objects, executed by any [`LedgerRepository`] backend
//! - **Aggregation**: per-account derived balances, zero-activity
//!   suppression, grouping into localized report buckets, debit/credit totals
//! - **Payload assembly**: the complete field set the host PDF template
//!   relies on, with accounting-style formatted amounts
//! - **Storage abstraction**: database-agnostic design with trait-based
//!   repositories and an in-memory implementation for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use trial_balance_core::utils::MemoryLedger;
//! use trial_balance_core::{ReportParameters, TrialBalanceReport};
//!
//! // Wire the generator against any storage implementing the repositories
//! let storage = MemoryLedger::new();
//! let report = TrialBalanceReport::new(storage.clone(), storage);
//! let params = ReportParameters::default();
//! ```

pub mod locale;
pub mod report;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use locale::*;
pub use report::*;
pub use traits::*;
pub use types::*;
