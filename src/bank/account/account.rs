use crate::bank::{normalise, AccountId, Amount};

use super::balance::Balance;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Everything that can go wrong when moving money in or out of an account.
///
/// The messages are meant to be shown as-is to whoever follows the operations.
#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    /// A basic account can't go below zero through a withdrawal.
    #[error("Insufficient funds.")]
    InsufficientFunds,

    /// The withdrawal would take a savings account below its minimum balance.
    #[error("Withdrawal not allowed. Minimum balance requirement not met.")]
    BelowMinimumBalance,

    /// The withdrawal would take a current account past its overdraft limit.
    #[error("Withdrawal not allowed. Exceeds overdraft limit.")]
    ExceedsOverdraftLimit,

    /// The savings account doesn't hold enough to cover the transfer.
    #[error("Transfer failed. Insufficient funds in savings.")]
    TransferFailed,

    /// An operation reserved to one kind of account got another one.
    #[error("Expected a {expected} account, found a {found} account.")]
    WrongKind {
        expected: AccountType,
        found: AccountType,
    },

    /// Adding more money to the balance would overflow.
    #[error("Balance would overflow.")]
    Overflow,
}

/// The kind of an account, along with the parameters driving its withdrawal policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// No parameter: the balance can't go below zero through a withdrawal.
    Basic,

    /// `interest_rate` is a fraction, e.g. 0.02 for 2%.
    Savings { interest_rate: Amount },

    /// The balance may go down to `-overdraft_limit`.
    Current { overdraft_limit: Amount },
}

impl Kind {
    pub fn account_type(&self) -> AccountType {
        match self {
            Kind::Basic => AccountType::Basic,
            Kind::Savings { .. } => AccountType::Savings,
            Kind::Current { .. } => AccountType::Current,
        }
    }
}

/// Kind of an account, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Basic,
    Savings,
    Current,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Basic => write!(f, "basic"),
            AccountType::Savings => write!(f, "savings"),
            AccountType::Current => write!(f, "current"),
        }
    }
}

/// What a successful operation did to the balance.
#[derive(Debug, Clone, PartialEq)]
pub enum Receipt {
    Deposited(Amount),
    Withdrawn {
        amount: Amount,
        account_type: AccountType,
    },
    Transferred(Amount),
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::Deposited(amount) => write!(f, "Deposited ${:.2} into the account.", amount),
            Receipt::Withdrawn {
                amount,
                account_type: AccountType::Basic,
            } => write!(f, "Withdrawn ${:.2} from the account.", amount),
            Receipt::Withdrawn {
                amount,
                account_type,
            } => write!(f, "Withdrawn ${:.2} from the {} account.", amount, account_type),
            Receipt::Transferred(amount) => write!(
                f,
                "Transferred ${:.2} from savings to current account.",
                amount
            ),
        }
    }
}

/// An account owned by a holder, with a balance and a withdrawal policy
/// depending on its kind.
///
/// The identifier, the holder and the kind never change once the account is
/// created. Only the balance moves, through `deposit`, `withdraw`, or the
/// unchecked `adjust` reserved to this module tree.
#[derive(Debug, Clone)]
pub struct Account {
    pub(super) id: AccountId,
    pub(super) holder: String,
    pub(super) balance: Balance,
    pub(super) kind: Kind,
}

impl Account {
    /// The initial balance isn't validated: it can be negative.
    /// Money amounts are rounded, the interest rate is kept as given.
    pub fn new(id: &str, holder: &str, initial_balance: Amount, kind: Kind) -> Self {
        let kind = match kind {
            Kind::Current { overdraft_limit } => Kind::Current {
                overdraft_limit: normalise(overdraft_limit),
            },
            other => other,
        };

        Self {
            id: id.to_owned(),
            holder: holder.to_owned(),
            balance: Balance::new(normalise(initial_balance)),
            kind,
        }
    }

    pub fn basic(id: &str, holder: &str, initial_balance: Amount) -> Self {
        Self::new(id, holder, initial_balance, Kind::Basic)
    }

    pub fn savings(id: &str, holder: &str, initial_balance: Amount, interest_rate: Amount) -> Self {
        Self::new(id, holder, initial_balance, Kind::Savings { interest_rate })
    }

    pub fn current(
        id: &str,
        holder: &str,
        initial_balance: Amount,
        overdraft_limit: Amount,
    ) -> Self {
        Self::new(id, holder, initial_balance, Kind::Current { overdraft_limit })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    /// Current amount of money in the account. Can be negative.
    pub fn balance(&self) -> Amount {
        self.balance.amount()
    }

    pub(crate) fn expect_type(&self, expected: AccountType) -> Result<(), AccountError> {
        let found = self.account_type();
        if found != expected {
            return Err(AccountError::WrongKind { expected, found });
        }

        Ok(())
    }
}
