//! Error types for settlement computation and its CSV wrapper.

use crate::money::Money;
use crate::payment::PersonId;
use thiserror::Error;

/// Result type alias for settlement operations
pub type Result<T> = std::result::Result<T, SettleError>;

/// Errors that can occur while settling payments.
///
/// Any error rejects the entire input; no partial result is produced.
#[derive(Error, Debug)]
pub enum SettleError {
    /// A payment amount is below zero
    #[error("Invalid amount: {0} (must be non-negative)")]
    NegativeAmount(Money),

    /// A payment has an empty payer id
    #[error("Invalid payer: empty string")]
    EmptyPayer,

    /// A payment lists an empty beneficiary id
    #[error("Invalid beneficiary: empty string")]
    EmptyBeneficiary,

    /// The same beneficiary appears twice within one payment
    #[error("Duplicate beneficiary: '{0}'")]
    DuplicateBeneficiary(PersonId),

    /// A balance left the range of `Money`
    #[error("Balance overflow for '{person}'")]
    Overflow { person: PersonId },

    /// A balance table does not sum to zero and cannot be settled
    #[error("Balances must sum to zero (found {0})")]
    Unbalanced(i128),

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV row could not be turned into a payment
    #[error("Invalid payment record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: expense-settler <payments.csv>")]
    MissingArgument,
}

impl SettleError {
    /// Returns `true` for the four payment validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SettleError::NegativeAmount(_)
                | SettleError::EmptyPayer
                | SettleError::EmptyBeneficiary
                | SettleError::DuplicateBeneficiary(_)
        )
    }
}
