//! Settlement pipeline.
//!
//! Validates payments, accumulates balances, matches debtors with creditors
//! and sorts the result. Holds no state between calls.

use crate::balance::Balances;
use crate::error::Result;
use crate::payment::{Payment, Repayment};
use crate::settlement::{match_balances, sort_repayments};
use crate::validation::validate_payments;
use log::debug;

/// Computes the repayments that settle all debts created by `payments`.
///
/// # Output Ordering
///
/// Repayments are sorted by debtor id, then creditor id, by code point,
/// so the output is deterministic regardless of matching order.
///
/// # Errors
///
/// Fails on the first invalid payment (negative amount, empty payer, empty
/// or repeated beneficiary) or if a balance overflows. No partial result is
/// ever returned.
pub fn solve(payments: &[Payment]) -> Result<Vec<Repayment>> {
    validate_payments(payments)?;
    debug!("Validated {} payments", payments.len());

    let balances = Balances::from_payments(payments)?;
    debug!("Accumulated balances for {} people", balances.len());

    let mut repayments = match_balances(&balances)?;
    sort_repayments(&mut repayments);
    debug!("Emitted {} repayments", repayments.len());

    Ok(repayments)
}
