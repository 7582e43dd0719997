use crate::bank::{normalise, Amount, MINIMUM_SAVINGS_BALANCE};

use super::account::{Account, AccountError, Kind, Receipt};

impl Account {
    /// Take `amount` out of the balance, if the policy of the account allows it:
    /// - basic: the balance can't go below zero,
    /// - savings: the balance can't go below `MINIMUM_SAVINGS_BALANCE`,
    /// - current: the balance can't go below `-overdraft_limit`.
    ///
    /// On refusal the balance is left untouched.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Receipt, AccountError> {
        let amount = normalise(amount);

        if let Err(err) = self.check_withdrawal(amount) {
            tracing::warn!(account = %self.id, %amount, %err, "withdrawal refused");
            return Err(err);
        }

        self.adjust(amount)?;
        tracing::info!(account = %self.id, %amount, "withdrawn");

        Ok(Receipt::Withdrawn {
            amount,
            account_type: self.account_type(),
        })
    }

    fn check_withdrawal(&self, amount: Amount) -> Result<(), AccountError> {
        let balance = self.balance();

        match self.kind {
            Kind::Basic => {
                if balance < amount {
                    return Err(AccountError::InsufficientFunds);
                }
            }
            Kind::Savings { .. } => {
                let remaining = balance
                    .checked_sub(amount)
                    .ok_or(AccountError::Overflow)?;
                if remaining < MINIMUM_SAVINGS_BALANCE {
                    return Err(AccountError::BelowMinimumBalance);
                }
            }
            Kind::Current { overdraft_limit } => {
                let available = balance
                    .checked_add(overdraft_limit)
                    .ok_or(AccountError::Overflow)?;
                if available < amount {
                    return Err(AccountError::ExceedsOverdraftLimit);
                }
            }
        }

        Ok(())
    }
}
