use crate::bank::{
    account::{Account, AccountError, Receipt},
    display::display,
    transfer::transfer_fixed_amount,
};
use crate::output::write_statement;

use rust_decimal_macros::dec;
use std::io::Write;
use thiserror::Error;

/// The scenario only fails if we can't write to the output stream.
/// Refused operations are part of the scenario, not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write statement: {0}")]
    Csv(#[from] csv::Error),
}

/// Play the demonstration scenario, writing everything to the given stream:
/// open a savings and a current account, deposit into the first, withdraw from
/// the second, transfer from savings to current, and show both accounts after
/// each step.
pub fn run(mut output_stream: impl Write) -> Result<(), Error> {
    let mut savings = Account::savings("S123", "John Doe", dec!(1000), dec!(0.02));
    let mut current = Account::current("C456", "Jane Doe", dec!(2000), dec!(500));
    tracing::debug!(savings = savings.id(), current = current.id(), "accounts opened");

    display(&mut output_stream, &savings)?;
    display(&mut output_stream, &current)?;

    report(&mut output_stream, savings.deposit(dec!(500)))?;
    report(&mut output_stream, current.withdraw(dec!(1000)))?;

    writeln!(output_stream, "\nAccount details after deposit and withdrawal:")?;
    display(&mut output_stream, &savings)?;
    display(&mut output_stream, &current)?;

    let transfer = transfer_fixed_amount(&mut current, &mut savings);
    // The transfer credits the current account through a regular deposit.
    if let Ok(Receipt::Transferred(amount)) = &transfer {
        report(&mut output_stream, Ok(Receipt::Deposited(*amount)))?;
    }
    report(&mut output_stream, transfer)?;

    writeln!(output_stream, "\nAccount details after transfer:")?;
    display(&mut output_stream, &savings)?;
    display(&mut output_stream, &current)?;

    writeln!(output_stream, "\nClosing statement:")?;
    write_statement(&mut output_stream, [&savings, &current])?;

    Ok(())
}

// Either way, the outcome of an operation is a single line of text.
fn report(
    mut output_stream: impl Write,
    outcome: Result<Receipt, AccountError>,
) -> std::io::Result<()> {
    match outcome {
        Ok(receipt) => writeln!(output_stream, "{}", receipt),
        Err(err) => writeln!(output_stream, "{}", err),
    }
}
