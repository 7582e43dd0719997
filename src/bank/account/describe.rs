use rust_decimal_macros::dec;
use std::fmt;

use super::account::{Account, Kind};

impl Account {
    /// Human-readable details of the account, one field per line, amounts with
    /// two decimal places.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Details for Account (ID: {}):", self.id)?;
        writeln!(f, "   Holder: {}", self.holder)?;
        writeln!(f, "   Balance: ${:.2}", self.balance())?;

        match self.kind {
            Kind::Basic => Ok(()),
            Kind::Savings { interest_rate } => {
                writeln!(f, "   Interest Rate: {:.2}%", interest_rate * dec!(100))
            }
            Kind::Current { overdraft_limit } => {
                writeln!(f, "   Overdraft Limit: ${:.2}", overdraft_limit)
            }
        }
    }
}
