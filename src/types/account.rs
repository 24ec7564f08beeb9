//! Account-related types for the bank
//!
//! This module defines the Account structure, its kind tag and the shared
//! handle used when an account has to be reachable from more than one owner
//! (the scenario registry and a government scheme).

use crate::types::error::BankError;
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;

/// Account number (assigned at construction, never changes)
pub type AccountNumber = u32;

/// Shared, single-threaded handle to an account
///
/// Government schemes hold `Weak` links derived from this handle, so the
/// account stays owned by whoever opened it.
pub type AccountHandle = Rc<RefCell<Account>>;

/// Category-specific account data
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// Plain account with no extra fields
    Standard,

    /// Savings account
    ///
    /// The interest rate is stored but no operation applies it.
    Savings {
        /// Annual interest rate (e.g. 0.05)
        interest_rate: Decimal,
    },

    /// Rural account eligible for government schemes
    Rural {
        /// Credit added to the balance once, when the account is opened
        opening_credit: u64,
    },
}

/// Bank account state
///
/// Holds identity and balance. The account number is private so it cannot
/// change after construction; the balance is only mutated through
/// [`Account::set_balance`], which the transaction executors use.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    balance: Decimal,
    kind: AccountKind,
}

impl Account {
    /// Create a standard account
    pub fn new(number: AccountNumber, holder: impl Into<String>, balance: Decimal) -> Self {
        Account {
            number,
            holder: holder.into(),
            balance,
            kind: AccountKind::Standard,
        }
    }

    /// Create a savings account with an (inert) interest rate
    pub fn savings(
        number: AccountNumber,
        holder: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Account {
            kind: AccountKind::Savings { interest_rate },
            ..Account::new(number, holder, balance)
        }
    }

    /// Create a rural account
    ///
    /// The opening credit is added to `balance` here and nowhere else.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the credit pushes the balance past
    /// the decimal range.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use solid_bank::Account;
    ///
    /// let account = Account::rural(1001, "Asha", Decimal::from(2000), 10000)?;
    /// assert_eq!(account.balance(), Decimal::from(12000));
    /// # Ok::<(), solid_bank::BankError>(())
    /// ```
    pub fn rural(
        number: AccountNumber,
        holder: impl Into<String>,
        balance: Decimal,
        opening_credit: u64,
    ) -> Result<Self, BankError> {
        let balance = balance
            .checked_add(Decimal::from(opening_credit))
            .ok_or_else(|| BankError::arithmetic_overflow("open", number))?;

        Ok(Account {
            number,
            holder: holder.into(),
            balance,
            kind: AccountKind::Rural { opening_credit },
        })
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Opening credit for rural accounts, `None` otherwise
    pub fn opening_credit(&self) -> Option<u64> {
        match self.kind {
            AccountKind::Rural { opening_credit } => Some(opening_credit),
            _ => None,
        }
    }

    /// Interest rate for savings accounts, `None` otherwise
    pub fn interest_rate(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            _ => None,
        }
    }

    pub fn is_rural(&self) -> bool {
        matches!(self.kind, AccountKind::Rural { .. })
    }

    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Wrap the account in a shared handle
    pub fn into_handle(self) -> AccountHandle {
        Rc::new(RefCell::new(self))
    }
}
