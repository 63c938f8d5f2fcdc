//! Structural checks on payment records.
//!
//! Every payment is checked before any balance is computed. The first
//! violation, in payment order and then beneficiary order, rejects the
//! whole input.

use crate::error::{Result, SettleError};
use crate::payment::Payment;
use std::collections::HashSet;

/// Validates every payment, failing on the first violation.
pub fn validate_payments(payments: &[Payment]) -> Result<()> {
    for payment in payments {
        validate_payment(payment)?;
    }
    Ok(())
}

/// Validates a single payment.
///
/// Checks, in order: amount sign, payer id, then each beneficiary for an
/// empty id or a repeat within this payment.
pub fn validate_payment(payment: &Payment) -> Result<()> {
    if payment.amount.is_negative() {
        return Err(SettleError::NegativeAmount(payment.amount));
    }

    if payment.payer.is_empty() {
        return Err(SettleError::EmptyPayer);
    }

    let mut seen = HashSet::with_capacity(payment.beneficiaries.len());
    for beneficiary in &payment.beneficiaries {
        if beneficiary.is_empty() {
            return Err(SettleError::EmptyBeneficiary);
        }
        if !seen.insert(beneficiary.as_str()) {
            return Err(SettleError::DuplicateBeneficiary(beneficiary.clone()));
        }
    }

    Ok(())
}
