//! Greedy debtor/creditor matching and the final repayment ordering.
//!
//! The largest remaining creditor is always paired with the largest
//! remaining debtor. This does not guarantee the fewest possible transfers,
//! but never emits more than `creditors + debtors - 1` of them.

use crate::balance::Balances;
use crate::error::{Result, SettleError};
use crate::money::Money;
use crate::payment::{PersonId, Repayment};
use log::debug;

/// A person with an outstanding amount still to pay or receive.
#[derive(Debug, Clone)]
struct Party {
    id: PersonId,
    remaining: Money,
}

/// Pairs debtors with creditors until every balance is cancelled.
///
/// Ties between equal amounts keep the first-occurrence order of
/// `balances`. The result is in emission order; see [`sort_repayments`].
///
/// Fails with [`SettleError::Unbalanced`] if the balances do not sum to
/// zero, since some debt or credit could never be matched.
pub fn match_balances(balances: &Balances) -> Result<Vec<Repayment>> {
    let total = balances.total();
    if total != 0 {
        return Err(SettleError::Unbalanced(total));
    }

    let mut creditors = Vec::new();
    let mut debtors = Vec::new();

    for (id, balance) in balances.iter() {
        if balance.is_positive() {
            creditors.push(Party {
                id: id.clone(),
                remaining: balance,
            });
        } else if balance.is_negative() {
            let remaining = balance
                .checked_neg()
                .ok_or_else(|| SettleError::Overflow { person: id.clone() })?;
            debtors.push(Party {
                id: id.clone(),
                remaining,
            });
        }
    }

    // Stable sorts: equal amounts keep first-occurrence order.
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    debug!(
        "Matching {} creditors against {} debtors",
        creditors.len(),
        debtors.len()
    );

    let mut repayments = Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
    let mut ci = 0;
    let mut di = 0;

    while ci < creditors.len() && di < debtors.len() {
        let creditor = &mut creditors[ci];
        let debtor = &mut debtors[di];
        let amount = creditor.remaining.min(debtor.remaining);

        repayments.push(Repayment {
            from: debtor.id.clone(),
            to: creditor.id.clone(),
            amount,
        });

        // Both stay non-negative since `amount` is the smaller of the two.
        creditor.remaining = Money::new(creditor.remaining.amount() - amount.amount());
        debtor.remaining = Money::new(debtor.remaining.amount() - amount.amount());

        if creditor.remaining.is_zero() {
            ci += 1;
        }
        if debtor.remaining.is_zero() {
            di += 1;
        }
    }

    if ci != creditors.len() || di != debtors.len() {
        return Err(SettleError::Unbalanced(total));
    }
    Ok(repayments)
}

/// Orders repayments by `from`, then by `to`, comparing code points.
///
/// Entries with the same pair stay separate; amounts are never merged.
pub fn sort_repayments(repayments: &mut [Repayment]) {
    repayments.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.to.cmp(&b.to)));
}
