pub mod account;
pub mod display;
pub mod transfer;

use rust_decimal_macros::dec;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `balance: Amount` reads better than `balance: Decimal`, and
// changing the representation later is trivial.
pub type AccountId = String;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;
const DECIMAL_PRECISION: u32 = 4;

/// A savings account can never be withdrawn below this amount.
/// This is a fixed policy, it is not configurable per account.
pub const MINIMUM_SAVINGS_BALANCE: Amount = dec!(100);

/// Amount moved by [`transfer::transfer_fixed_amount`].
pub const TRANSFER_AMOUNT: Amount = dec!(300);

// Every amount entering an account goes through here, so we can only store
// amounts with a decimal precision of 4.
pub(crate) fn normalise(amount: Amount) -> Amount {
    amount.round_dp(DECIMAL_PRECISION)
}

#[test]
// Decimal precision is 4 places. We should be unable to have more precise amounts.
fn test_normalise_decimal_precision() {
    for (raw_amount, want_amount) in vec![
        (dec!(1.0), dec!(1.0)),
        (dec!(0.999999), dec!(1.0)),
        (dec!(1.0000001), dec!(1.0)),
        (dec!(1.2345), dec!(1.2345)),
        (dec!(1.23459), dec!(1.2346)),
        (dec!(-2.00005), dec!(-2.0000)),
    ] {
        assert_eq!(want_amount, normalise(raw_amount));
    }
}
