//! Account registry
//!
//! The `Bank` owns every account opened during a scenario and hands out
//! shared handles by account number. Insertion order is kept so listings
//! are deterministic.

use crate::types::{Account, AccountHandle, AccountNumber, BankError};
use std::collections::HashMap;
use std::rc::Rc;

/// Registry of open accounts
#[derive(Default)]
pub struct Bank {
    accounts: HashMap<AccountNumber, AccountHandle>,
    order: Vec<AccountNumber>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account and return its handle
    ///
    /// # Errors
    ///
    /// Returns [`BankError::DuplicateAccount`] if the number is taken.
    pub fn open(&mut self, account: Account) -> Result<AccountHandle, BankError> {
        let handle = account.into_handle();
        self.insert(Rc::clone(&handle))?;
        Ok(handle)
    }

    /// Register an account that already lives behind a handle
    pub fn insert(&mut self, handle: AccountHandle) -> Result<(), BankError> {
        let number = handle.borrow().number();
        if self.accounts.contains_key(&number) {
            return Err(BankError::duplicate_account(number));
        }

        self.accounts.insert(number, handle);
        self.order.push(number);
        Ok(())
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.accounts.contains_key(&number)
    }

    pub fn get(&self, number: AccountNumber) -> Option<AccountHandle> {
        self.accounts.get(&number).map(Rc::clone)
    }

    /// All accounts in the order they were opened
    pub fn accounts(&self) -> Vec<AccountHandle> {
        self.order
            .iter()
            .filter_map(|number| self.get(*number))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
