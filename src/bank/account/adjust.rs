use crate::bank::Amount;

use super::account::{Account, AccountError};

impl Account {
    /// Take `amount` out of the balance without looking at any withdrawal
    /// policy. The balance can end up anywhere, including below the savings
    /// floor or past the overdraft limit.
    ///
    /// Only the withdrawals and the transfer are allowed to call this.
    pub(in crate::bank) fn adjust(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.balance.subtract(amount)?;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance(), "balance adjusted");

        Ok(())
    }
}
