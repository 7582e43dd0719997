use crate::bank::Amount;

use super::account::AccountError;

/// Money held by an account. Can go negative, e.g. through a current
/// account's overdraft.
///
/// Every change is checked: an operation that would overflow leaves the
/// balance as it was.
#[derive(Debug, Clone)]
pub struct Balance(Amount);

impl Balance {
    pub const fn new(amount: Amount) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Amount {
        self.0
    }

    pub fn add(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.0 = self.0.checked_add(amount).ok_or(AccountError::Overflow)?;

        Ok(())
    }

    pub fn subtract(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.0 = self.0.checked_sub(amount).ok_or(AccountError::Overflow)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::bank::account::AccountError;

    use super::Balance;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_and_subtract() {
        for (start, added, subtracted, want) in vec![
            (dec!(10), dec!(7), dec!(0), dec!(17)),
            (dec!(10), dec!(-4), dec!(0), dec!(6)),
            (dec!(10), dec!(0), dec!(25), dec!(-15)),
            (dec!(-5), dec!(0), dec!(-5), dec!(0)),
            (dec!(0.1), dec!(0.2), dec!(0.3), dec!(0)),
        ] {
            let mut balance = Balance::new(start);
            balance.add(added).expect("should not overflow");
            balance.subtract(subtracted).expect("should not overflow");

            assert_eq!(want, balance.amount());
        }
    }

    #[test]
    fn test_add_overflow() {
        for (start, added) in vec![
            (Decimal::MAX, dec!(1)),
            (Decimal::MIN, dec!(-1)),
        ] {
            let mut balance = Balance::new(start);

            assert_eq!(Err(AccountError::Overflow), balance.add(added));
            assert_eq!(start, balance.amount());
        }
    }

    #[test]
    fn test_subtract_overflow() {
        for (start, subtracted) in vec![
            (Decimal::MIN, dec!(1)),
            (Decimal::MAX, dec!(-1)),
        ] {
            let mut balance = Balance::new(start);

            assert_eq!(Err(AccountError::Overflow), balance.subtract(subtracted));
            assert_eq!(start, balance.amount());
        }
    }
}
