//! Transaction outcomes
//!
//! Insufficient funds is a normal result of a withdrawal, so it is modelled
//! here as an outcome rather than as a [`BankError`](super::BankError).

use super::account::AccountNumber;
use rust_decimal::Decimal;
use std::fmt;

/// Which transaction manager produced an outcome
///
/// The rural channel applies the same rules; only the wording differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Normal,
    Rural,
}

impl Channel {
    fn noun(self) -> &'static str {
        match self {
            Channel::Normal => "account",
            Channel::Rural => "rural account",
        }
    }
}

/// Result of a deposit or withdrawal that was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    /// Funds were credited
    Deposited {
        channel: Channel,
        account: AccountNumber,
        amount: Decimal,
        balance: Decimal,
    },

    /// Funds were debited
    Withdrawn {
        channel: Channel,
        account: AccountNumber,
        amount: Decimal,
        balance: Decimal,
    },

    /// Withdrawal rejected; the balance was left unchanged
    InsufficientFunds {
        channel: Channel,
        account: AccountNumber,
        amount: Decimal,
    },
}

impl TransactionOutcome {
    /// Whether the balance was changed
    pub fn is_success(&self) -> bool {
        !matches!(self, TransactionOutcome::InsufficientFunds { .. })
    }

    pub fn account(&self) -> AccountNumber {
        match *self {
            TransactionOutcome::Deposited { account, .. }
            | TransactionOutcome::Withdrawn { account, .. }
            | TransactionOutcome::InsufficientFunds { account, .. } => account,
        }
    }

    /// Balance after the operation, if it changed
    pub fn balance(&self) -> Option<Decimal> {
        match *self {
            TransactionOutcome::Deposited { balance, .. }
            | TransactionOutcome::Withdrawn { balance, .. } => Some(balance),
            TransactionOutcome::InsufficientFunds { .. } => None,
        }
    }
}

impl fmt::Display for TransactionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransactionOutcome::Deposited {
                channel,
                account,
                amount,
                balance,
            } => write!(
                f,
                "Deposited ${} into {} {}. New balance: ${}",
                amount,
                channel.noun(),
                account,
                balance
            ),
            TransactionOutcome::Withdrawn {
                channel,
                account,
                amount,
                balance,
            } => write!(
                f,
                "Withdrawn ${} from {} {}. New balance: ${}",
                amount,
                channel.noun(),
                account,
                balance
            ),
            TransactionOutcome::InsufficientFunds {
                channel,
                account,
                amount,
            } => write!(
                f,
                "Insufficient funds in {} {} to withdraw ${}.",
                channel.noun(),
                account,
                amount
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit(
        TransactionOutcome::Deposited { channel: Channel::Normal, account: 56789, amount: Decimal::from(500), balance: Decimal::from(2500) },
        "Deposited $500 into account 56789. New balance: $2500"
    )]
    #[case::withdrawal(
        TransactionOutcome::Withdrawn { channel: Channel::Normal, account: 56789, amount: Decimal::from(200), balance: Decimal::from(2300) },
        "Withdrawn $200 from account 56789. New balance: $2300"
    )]
    #[case::insufficient(
        TransactionOutcome::InsufficientFunds { channel: Channel::Normal, account: 12345, amount: Decimal::from(5000) },
        "Insufficient funds in account 12345 to withdraw $5000."
    )]
    #[case::rural_deposit(
        TransactionOutcome::Deposited { channel: Channel::Rural, account: 1001, amount: Decimal::from(100000), balance: Decimal::from(112000) },
        "Deposited $100000 into rural account 1001. New balance: $112000"
    )]
    #[case::rural_insufficient(
        TransactionOutcome::InsufficientFunds { channel: Channel::Rural, account: 1001, amount: Decimal::new(1050, 1) },
        "Insufficient funds in rural account 1001 to withdraw $105.0."
    )]
    fn test_outcome_display(#[case] outcome: TransactionOutcome, #[case] expected: &str) {
        assert_eq!(outcome.to_string(), expected);
    }

    #[test]
    fn test_insufficient_funds_is_not_success() {
        let outcome = TransactionOutcome::InsufficientFunds {
            channel: Channel::Normal,
            account: 1,
            amount: Decimal::ONE,
        };

        assert!(!outcome.is_success());
        assert_eq!(outcome.balance(), None);
        assert_eq!(outcome.account(), 1);
    }
}
