//! Payment input records and repayment output records.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a participant.
///
/// Equality is exact string equality. Ordering is by code point, which is
/// what byte-wise comparison of UTF-8 gives.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        PersonId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        PersonId(id.to_string())
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        PersonId(id)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shared expense: `payer` paid `amount` on behalf of `beneficiaries`.
///
/// The payer may also be a beneficiary. The order of `beneficiaries`
/// matters: the last one absorbs the rounding remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Amount paid. Must be non-negative.
    pub amount: Money,

    /// Who paid.
    pub payer: PersonId,

    /// Who the payment was for, in input order.
    pub beneficiaries: Vec<PersonId>,
}

impl Payment {
    pub fn new<P, I, B>(amount: impl Into<Money>, payer: P, beneficiaries: I) -> Self
    where
        P: Into<PersonId>,
        I: IntoIterator<Item = B>,
        B: Into<PersonId>,
    {
        Payment {
            amount: amount.into(),
            payer: payer.into(),
            beneficiaries: beneficiaries.into_iter().map(Into::into).collect(),
        }
    }
}

/// A transfer of `amount` from debtor `from` to creditor `to`.
///
/// `amount` is always strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repayment {
    pub from: PersonId,
    pub to: PersonId,
    pub amount: Money,
}

impl Repayment {
    pub fn new(amount: impl Into<Money>, from: impl Into<PersonId>, to: impl Into<PersonId>) -> Self {
        Repayment {
            from: from.into(),
            to: to.into(),
            amount: amount.into(),
        }
    }
}
