//! # Expense Settler
//!
//! Computes, from a list of shared-expense payments, a small set of
//! person-to-person transfers that settles every debt.
//!
//! ## Design Principles
//!
//! - **Exact integer arithmetic**: whole-unit `i64` amounts, checked for overflow
//! - **Exact remainder distribution**: the last beneficiary absorbs the rounding leftover
//! - **Strict invariants**: balances always sum to zero
//! - **Deterministic output**: repayments sorted by debtor, then creditor
//! - **All or nothing**: any invalid payment rejects the whole input
//!
//! ## Example
//!
//! ```
//! use expense_settler::{solve, Payment, Repayment};
//!
//! let payments = vec![Payment::new(2000, "A", ["A", "B", "C", "D"])];
//! let repayments = solve(&payments).unwrap();
//!
//! assert_eq!(
//!     repayments,
//!     vec![
//!         Repayment::new(500, "B", "A"),
//!         Repayment::new(500, "C", "A"),
//!         Repayment::new(500, "D", "A"),
//!     ]
//! );
//! ```

pub mod balance;
pub mod engine;
pub mod error;
pub mod money;
pub mod payment;
pub mod record;
pub mod settlement;
pub mod validation;

pub use balance::Balances;
pub use engine::solve;
pub use error::{Result, SettleError};
pub use money::Money;
pub use payment::{Payment, PersonId, Repayment};
pub use record::{read_payments, write_repayments, PaymentRecord};
pub use settlement::{match_balances, sort_repayments};
pub use validation::{validate_payment, validate_payments};
