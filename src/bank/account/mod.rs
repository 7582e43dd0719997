#[allow(clippy::module_inception)]
pub mod account;
mod balance;

mod adjust;
mod deposit;
mod describe;
mod withdrawal;

pub use account::{Account, AccountError, AccountType, Kind, Receipt};
