use crate::bank::{normalise, Amount};

use super::account::{Account, AccountError, Receipt};

impl Account {
    /// Add `amount` to the balance, whatever the kind of account.
    ///
    /// Zero and negative amounts are not rejected. The only way this can fail
    /// is if the balance would overflow.
    pub fn deposit(&mut self, amount: Amount) -> Result<Receipt, AccountError> {
        let amount = normalise(amount);
        self.balance.add(amount)?;
        tracing::info!(account = %self.id, %amount, "deposited");

        Ok(Receipt::Deposited(amount))
    }
}

#[cfg(test)]
mod deposit_tests {
    use crate::bank::account::account::{AccountError, Receipt};

    use super::Account;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_deposit_ok() {
        for mut acc in vec![
            Account::basic("B", "h", dec!(1000)),
            Account::savings("S", "h", dec!(1000), dec!(0.02)),
            Account::current("C", "h", dec!(1000), dec!(500)),
        ] {
            let got = acc.deposit(dec!(500));
            assert_eq!(Ok(Receipt::Deposited(dec!(500))), got);
            assert_eq!(dec!(1500), acc.balance());
        }
    }

    #[test]
    fn test_deposit_accepts_zero_and_negative_amounts() {
        let mut acc = Account::basic("B", "h", dec!(10));

        assert_eq!(Ok(Receipt::Deposited(dec!(0))), acc.deposit(dec!(0)));
        assert_eq!(dec!(10), acc.balance());

        assert_eq!(Ok(Receipt::Deposited(dec!(-3))), acc.deposit(dec!(-3)));
        assert_eq!(dec!(7), acc.balance());
    }

    #[test]
    fn test_deposit_overflow() {
        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();
        let mut acc = Account::basic("B", "h", very_big_number);

        assert_eq!(Err(AccountError::Overflow), acc.deposit(very_big_number));
        assert_eq!(very_big_number, acc.balance());
    }
}
