use super::account::{Account, AccountError, AccountType, Receipt};
use super::TRANSFER_AMOUNT;

/// Move `TRANSFER_AMOUNT` from a savings account to a current account.
///
/// The only requirement is that the savings account holds at least the
/// transferred amount. Its minimum balance is not enforced here: the savings
/// side goes through `adjust`, not through `withdraw`, so a transfer can leave
/// it below `MINIMUM_SAVINGS_BALANCE`.
///
/// When an error is returned, neither account has changed.
pub fn transfer_fixed_amount(
    current: &mut Account,
    savings: &mut Account,
) -> Result<Receipt, AccountError> {
    current.expect_type(AccountType::Current)?;
    savings.expect_type(AccountType::Savings)?;

    if savings.balance() < TRANSFER_AMOUNT {
        tracing::warn!(
            from = savings.id(),
            to = current.id(),
            balance = %savings.balance(),
            "transfer refused"
        );
        return Err(AccountError::TransferFailed);
    }

    current.deposit(TRANSFER_AMOUNT)?;
    if let Err(err) = savings.adjust(TRANSFER_AMOUNT) {
        // Roll the deposit back, so the transfer stays all or nothing.
        current.adjust(TRANSFER_AMOUNT)?;
        return Err(err);
    }

    tracing::info!(
        from = savings.id(),
        to = current.id(),
        amount = %TRANSFER_AMOUNT,
        "transferred"
    );

    Ok(Receipt::Transferred(TRANSFER_AMOUNT))
}
