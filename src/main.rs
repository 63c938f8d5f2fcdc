//! Expense Settler CLI
//!
//! Reads shared-expense payments from CSV and writes the repayments that
//! settle them.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payments.csv > repayments.csv
//! cat payments.csv | cargo run -- -
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `trace` to control logging verbosity

use expense_settler::{read_payments, solve, write_repayments, Result, SettleError};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(SettleError::MissingArgument);
    }

    let input_path = &args[1];
    let reader: Box<dyn Read> = if input_path == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(input_path)?))
    };

    let payments = read_payments(reader)?;
    let repayments = solve(&payments)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_repayments(handle, &repayments)?;

    Ok(())
}
