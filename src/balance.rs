//! Per-person net balances accumulated from payments.
//!
//! Maintains the invariant: balances built from payments always sum to
//! exactly zero, since every amount credited to a payer is debited in full
//! from its beneficiaries. A payment is applied whole or not at all.

use crate::error::{Result, SettleError};
use crate::money::Money;
use crate::payment::{Payment, PersonId, Repayment};
use indexmap::IndexMap;
use log::trace;

/// Net balance per person: credit positive, debt negative.
///
/// # Ordering
///
/// Entries keep first-occurrence order: the order in which each person was
/// first credited or debited, scanning payments in input order and, within a
/// payment, the payer before the beneficiaries. Settlement relies on this
/// order to break ties between equal balances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balances {
    entries: IndexMap<PersonId, Money>,
}

impl Balances {
    /// Creates an empty balance table.
    pub fn new() -> Self {
        Balances {
            entries: IndexMap::new(),
        }
    }

    /// Accumulates balances for a sequence of payments, in order.
    ///
    /// Payments are expected to be validated already.
    pub fn from_payments(payments: &[Payment]) -> Result<Self> {
        let mut balances = Balances::new();
        for (idx, payment) in payments.iter().enumerate() {
            if !balances.apply(payment)? {
                trace!("Payment {}: nothing to share, skipped", idx);
            }
        }
        debug_assert!(balances.is_conserved());
        Ok(balances)
    }

    /// Applies a single payment.
    ///
    /// Credits the payer with the full amount and debits each beneficiary an
    /// equal share; the last beneficiary also absorbs the division
    /// remainder. A zero amount or an empty beneficiary list has no effect
    /// and returns `Ok(false)`. On error the table is left unchanged.
    pub fn apply(&mut self, payment: &Payment) -> Result<bool> {
        if payment.amount.is_negative() {
            return Err(SettleError::NegativeAmount(payment.amount));
        }
        if payment.amount.is_zero() || payment.beneficiaries.is_empty() {
            return Ok(false);
        }

        let count = payment.beneficiaries.len();
        let (share, remainder) = payment.amount.split(count).ok_or_else(|| SettleError::Overflow {
            person: payment.payer.clone(),
        })?;

        let mut staged = IndexMap::with_capacity(count + 1);
        self.stage(&mut staged, &payment.payer, |b| b.checked_add(payment.amount))?;

        let last = count - 1;
        for (idx, beneficiary) in payment.beneficiaries.iter().enumerate() {
            if idx == last {
                self.stage(&mut staged, beneficiary, |b| {
                    share.checked_add(remainder).and_then(|d| b.checked_sub(d))
                })?;
            } else {
                self.stage(&mut staged, beneficiary, |b| b.checked_sub(share))?;
            }
        }

        self.commit(staged);
        Ok(true)
    }

    /// Applies repayments: each debtor is credited and each creditor debited
    /// by the transferred amount. On error the table is left unchanged.
    pub fn settle_with(&mut self, repayments: &[Repayment]) -> Result<()> {
        let mut staged = IndexMap::new();
        for repayment in repayments {
            self.stage(&mut staged, &repayment.from, |b| b.checked_add(repayment.amount))?;
            self.stage(&mut staged, &repayment.to, |b| b.checked_sub(repayment.amount))?;
        }
        self.commit(staged);
        Ok(())
    }

    /// Returns the balance of a person, if they appeared in any payment.
    pub fn get(&self, person: &str) -> Option<Money> {
        self.entries.get(person).copied()
    }

    /// Iterates balances in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, Money)> {
        self.entries.iter().map(|(id, balance)| (id, *balance))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact sum of all balances.
    pub fn total(&self) -> i128 {
        self.entries
            .values()
            .map(|balance| i128::from(balance.amount()))
            .sum()
    }

    /// Verifies the invariant: all balances sum to zero.
    pub fn is_conserved(&self) -> bool {
        self.total() == 0
    }

    /// Returns `true` if every balance is zero.
    pub fn is_settled(&self) -> bool {
        self.entries.values().all(|balance| balance.is_zero())
    }

    /// Records the updated balance of `person` in `staged`, starting from
    /// any earlier staged value, else the committed one.
    fn stage<'a>(
        &self,
        staged: &mut IndexMap<&'a PersonId, Money>,
        person: &'a PersonId,
        update: impl FnOnce(Money) -> Option<Money>,
    ) -> Result<()> {
        let current = match staged.get(&person) {
            Some(balance) => *balance,
            None => self.entries.get(person).copied().unwrap_or(Money::ZERO),
        };
        let next = update(current).ok_or_else(|| SettleError::Overflow {
            person: person.clone(),
        })?;
        staged.insert(person, next);
        Ok(())
    }

    /// Writes staged balances; new people are appended in staging order.
    fn commit(&mut self, staged: IndexMap<&PersonId, Money>) {
        for (person, balance) in staged {
            self.entries.insert(person.clone(), balance);
        }
    }
}

impl FromIterator<(PersonId, Money)> for Balances {
    fn from_iter<I: IntoIterator<Item = (PersonId, Money)>>(iter: I) -> Self {
        Balances {
            entries: iter.into_iter().collect(),
        }
    }
}
