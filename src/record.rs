//! CSV input and output around the settlement pipeline.
//!
//! Input rows are `amount,payer,beneficiaries` where `beneficiaries` is a
//! `;`-separated list. Output rows are `from,to,amount`. Unlike a lenient
//! reader, any malformed row rejects the whole file.

use crate::error::{Result, SettleError};
use crate::money::Money;
use crate::payment::{Payment, PersonId, Repayment};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::debug;
use serde::Deserialize;
use std::io::{Read, Write};
use std::str::FromStr;

/// Separator between beneficiary ids within a single field.
pub const BENEFICIARY_SEPARATOR: char = ';';

/// Raw payment record as read from CSV.
///
/// Fields arrive already trimmed by the reader.
#[derive(Debug, Deserialize)]
pub struct PaymentRecord {
    /// Whole-unit amount, kept as text so parse failures name the row.
    pub amount: String,

    /// Payer id
    pub payer: PersonId,

    /// `;`-separated beneficiary ids; absent or empty means none
    pub beneficiaries: Option<String>,
}

impl PaymentRecord {
    /// Converts the raw record into a payment.
    ///
    /// Only the amount format is checked here. Sign, empty ids and repeated
    /// beneficiaries are left to validation so messages match `solve`.
    pub fn parse(self, row: usize) -> Result<Payment> {
        let amount = Money::from_str(&self.amount).map_err(|e| SettleError::InvalidRecord {
            row,
            message: format!("amount '{}' is not a whole number: {}", self.amount, e),
        })?;

        let beneficiaries = self.parse_beneficiaries();
        Ok(Payment {
            amount,
            payer: self.payer,
            beneficiaries,
        })
    }

    fn parse_beneficiaries(&self) -> Vec<PersonId> {
        match self.beneficiaries.as_deref() {
            None | Some("") => Vec::new(),
            Some(list) => list
                .split(BENEFICIARY_SEPARATOR)
                .map(|id| PersonId::new(id.trim()))
                .collect(),
        }
    }
}

/// Reads every payment from a CSV reader.
///
/// Fails on the first malformed row; no partial list is returned.
pub fn read_payments<R: Read>(reader: R) -> Result<Vec<Payment>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut payments = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<PaymentRecord>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        let record = result.map_err(|e| SettleError::InvalidRecord {
            row: row_num,
            message: e.to_string(),
        })?;
        payments.push(record.parse(row_num)?);
    }

    debug!("Read {} payment records", payments.len());
    Ok(payments)
}

/// Writes repayments to CSV in the order given.
///
/// The header is written explicitly so an empty result still has one.
pub fn write_repayments<W: Write>(writer: W, repayments: &[Repayment]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(["from", "to", "amount"])?;
    for repayment in repayments {
        csv_writer.serialize(repayment)?;
    }

    csv_writer.flush()?;
    Ok(())
}
