//! A small account model: basic, savings and current accounts sharing an
//! identifier, a holder and a balance, each kind with its own withdrawal
//! policy, plus a fixed transfer from savings to current.
//!
//! bank: the accounts, their operations, the transfer and the display.
//! output: CSV statement of account balances.
//! run: the demonstration scenario played by the binary.

pub mod bank;
pub mod output;
pub mod run;
