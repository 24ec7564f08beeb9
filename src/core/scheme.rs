//! Government scheme broadcast
//!
//! A `GovtScheme` keeps weak links to enrolled rural accounts, in enrollment
//! order, plus a list of subscribers. A bulk deposit visits every live
//! account and notifies each subscriber in turn; the subscribers perform the
//! deposits, the scheme never touches a balance itself.
//!
//! # Empty subscriber list
//!
//! [`GovtScheme::deposit_in_all`] treats a scheme with no subscriber as a
//! no-op and returns an empty [`BroadcastSummary`].
//! [`GovtScheme::deposit_in_all_strict`] reports
//! [`BankError::NoSubscriber`] instead.
//!
//! # Partial broadcasts
//!
//! A subscriber error stops the broadcast. Deposits made before it stay
//! applied, and the returned [`BroadcastError`] carries their outcomes next
//! to the error.

use crate::core::traits::SchemeSubscriber;
use crate::types::{Account, AccountHandle, AccountNumber, BankError, TransactionOutcome};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;

struct Enrollment {
    number: AccountNumber,
    link: Weak<RefCell<Account>>,
}

/// One subscriber call made during a broadcast
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub subscriber: String,
    pub outcome: TransactionOutcome,
}

/// Result of a bulk deposit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BroadcastSummary {
    /// Subscriber calls, in account then subscriber order
    pub notifications: Vec<Notification>,
    /// Enrolled accounts that had already been dropped
    pub skipped: usize,
}

impl BroadcastSummary {
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &TransactionOutcome> {
        self.notifications.iter().map(|n| &n.outcome)
    }
}

/// A broadcast that stopped early
///
/// `summary` holds the notifications delivered before `error`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct BroadcastError {
    pub summary: BroadcastSummary,
    pub error: BankError,
}

impl From<BankError> for BroadcastError {
    fn from(error: BankError) -> Self {
        BroadcastError {
            summary: BroadcastSummary::default(),
            error,
        }
    }
}

impl From<BroadcastError> for BankError {
    fn from(failure: BroadcastError) -> Self {
        failure.error
    }
}

/// Broadcast coordinator for rural accounts
#[derive(Default)]
pub struct GovtScheme {
    enrollments: Vec<Enrollment>,
    subscribers: Vec<Box<dyn SchemeSubscriber>>,
}

impl GovtScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll an account
    ///
    /// Returns `false` if this exact account is already enrolled.
    pub fn enroll(&mut self, account: &AccountHandle) -> bool {
        let link = Rc::downgrade(account);
        if self
            .enrollments
            .iter()
            .any(|enrollment| Weak::ptr_eq(&enrollment.link, &link))
        {
            return false;
        }

        let number = account.borrow().number();
        tracing::debug!(account = number, "Account enrolled in scheme");
        self.enrollments.push(Enrollment { number, link });
        true
    }

    /// Add a subscriber, notified after those already registered
    pub fn subscribe<S: SchemeSubscriber + 'static>(&mut self, subscriber: S) {
        tracing::debug!(subscriber = subscriber.name(), "Scheme subscriber added");
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    pub fn has_subscriber(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Enrolled account numbers, in enrollment order
    pub fn enrolled(&self) -> Vec<AccountNumber> {
        self.enrollments.iter().map(|e| e.number).collect()
    }

    /// Enrolled accounts that are still alive
    pub fn accounts(&self) -> Vec<AccountHandle> {
        self.enrollments
            .iter()
            .filter_map(|e| e.link.upgrade())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }

    /// Notify every subscriber once per enrolled account
    ///
    /// With no subscriber this is a no-op.
    ///
    /// # Errors
    ///
    /// Stops at the first subscriber error and returns it along with the
    /// notifications already delivered. Those deposits stay applied.
    pub fn deposit_in_all(&self, amount: Decimal) -> Result<BroadcastSummary, BroadcastError> {
        if self.subscribers.is_empty() {
            tracing::warn!(%amount, "Scheme deposit requested with no subscriber");
            return Ok(BroadcastSummary::default());
        }

        self.broadcast(amount)
    }

    /// Like [`GovtScheme::deposit_in_all`], but an empty subscriber list is an error
    pub fn deposit_in_all_strict(&self, amount: Decimal) -> Result<BroadcastSummary, BroadcastError> {
        if self.subscribers.is_empty() {
            return Err(BankError::NoSubscriber.into());
        }

        self.broadcast(amount)
    }

    fn broadcast(&self, amount: Decimal) -> Result<BroadcastSummary, BroadcastError> {
        let mut summary = BroadcastSummary::default();

        if let Err(error) = self.notify_all(amount, &mut summary) {
            tracing::warn!(
                %amount,
                delivered = summary.notifications.len(),
                error = %error,
                "Scheme deposit interrupted"
            );
            return Err(BroadcastError { summary, error });
        }

        tracing::info!(
            %amount,
            notifications = summary.notifications.len(),
            skipped = summary.skipped,
            "Scheme deposit completed"
        );
        Ok(summary)
    }

    fn notify_all(&self, amount: Decimal, summary: &mut BroadcastSummary) -> Result<(), BankError> {
        for enrollment in &self.enrollments {
            let Some(handle) = enrollment.link.upgrade() else {
                tracing::debug!(account = enrollment.number, "Skipping dropped account");
                summary.skipped += 1;
                continue;
            };

            let mut account = handle
                .try_borrow_mut()
                .map_err(|_| BankError::account_busy(enrollment.number))?;

            for subscriber in &self.subscribers {
                let outcome = subscriber.on_deposit(&mut account, amount)?;
                summary.notifications.push(Notification {
                    subscriber: subscriber.name().to_string(),
                    outcome,
                });
            }
        }

        Ok(())
    }
}

/// Open a rural account, enrolling it in `scheme` when one is given
///
/// An account whose opening credit overflows is never enrolled.
pub fn open_rural_account(
    number: AccountNumber,
    holder: impl Into<String>,
    balance: Decimal,
    opening_credit: u64,
    scheme: Option<&mut GovtScheme>,
) -> Result<AccountHandle, BankError> {
    let handle = Account::rural(number, holder, balance, opening_credit)?.into_handle();
    if let Some(scheme) = scheme {
        scheme.enroll(&handle);
    }
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manager::TransactionManager;
    use crate::core::traits::FnSubscriber;

    #[test]
    fn test_open_rural_account_enrolls_exactly_once() {
        let mut scheme = GovtScheme::new();

        let account = open_rural_account(1001, "Asha", Decimal::from(2000), 10000, Some(&mut scheme)).unwrap();

        assert_eq!(account.borrow().balance(), Decimal::from(12000));
        assert_eq!(scheme.enrolled(), vec![1001]);
        assert!(!scheme.enroll(&account));
        assert_eq!(scheme.len(), 1);
    }

    #[test]
    fn test_open_rural_account_without_scheme() {
        let account = open_rural_account(1001, "Asha", Decimal::from(2000), 10000, None).unwrap();

        assert_eq!(account.borrow().balance(), Decimal::from(12000));
    }

    #[test]
    fn test_deposit_in_all_invokes_handler_per_account_in_order() {
        let mut scheme = GovtScheme::new();
        let first = open_rural_account(1001, "Asha", Decimal::from(2000), 10000, Some(&mut scheme)).unwrap();
        let second = open_rural_account(1002, "Ravi", Decimal::from(3000), 10000, Some(&mut scheme)).unwrap();

        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = Rc::clone(&calls);
        let manager = TransactionManager::rural();
        scheme.subscribe(FnSubscriber::new("recorder", move |account: &mut Account, amount: Decimal| {
            recorded.borrow_mut().push((account.number(), amount));
            manager.execute_deposit(Some(account), amount)
        }));

        let summary = scheme.deposit_in_all(Decimal::from(100000)).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![(1001, Decimal::from(100000)), (1002, Decimal::from(100000))]
        );
        assert_eq!(summary.notifications.len(), 2);
        assert_eq!(first.borrow().balance(), Decimal::from(112000));
        assert_eq!(second.borrow().balance(), Decimal::from(113000));
    }

    #[test]
    fn test_deposit_in_all_without_subscriber_is_noop() {
        let mut scheme = GovtScheme::new();
        let account = open_rural_account(1001, "Asha", Decimal::from(2000), 10000, Some(&mut scheme)).unwrap();

        let summary = scheme.deposit_in_all(Decimal::from(100000)).unwrap();

        assert!(summary.is_empty());
        assert_eq!(account.borrow().balance(), Decimal::from(12000));
    }

    #[test]
    fn test_strict_deposit_without_subscriber_fails() {
        let mut scheme = GovtScheme::new();
        let _account = open_rural_account(1001, "Asha", Decimal::from(2000), 10000, Some(&mut scheme)).unwrap();

        let failure = scheme.deposit_in_all_strict(Decimal::from(100000)).unwrap_err();

        assert_eq!(failure.error, BankError::NoSubscriber);
        assert!(failure.summary.is_empty());
    }

    #[test]
    fn test_multiple_subscribers_notified_per_account() {
        let mut scheme = GovtScheme::new();
        let account = open_rural_account(1001, "Asha", Decimal::from(2000), 10000, Some(&mut scheme)).unwrap();
        scheme.subscribe(TransactionManager::rural());
        scheme.subscribe(Rc::new(TransactionManager::normal()));

        let summary = scheme.deposit_in_all_strict(Decimal::from(5)).unwrap();

        let names: Vec<_> = summary
            .notifications
            .iter()
            .map(|n| n.subscriber.as_str())
            .collect();
        assert_eq!(names, vec!["rural-deposit", "normal-deposit"]);
        assert_eq!(account.borrow().balance(), Decimal::from(12010));
    }

    #[test]
    fn test_dropped_account_is_skipped() {
        let mut scheme = GovtScheme::new();
        let kept = open_rural_account(1001, "Asha", Decimal::from(2000), 10000, Some(&mut scheme)).unwrap();
        drop(open_rural_account(1002, "Ravi", Decimal::from(3000), 10000, Some(&mut scheme)).unwrap());
        scheme.subscribe(TransactionManager::rural());

        let summary = scheme.deposit_in_all(Decimal::from(100)).unwrap();

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.notifications.len(), 1);
        assert_eq!(kept.borrow().balance(), Decimal::from(12100));
        assert_eq!(scheme.accounts().len(), 1);
        assert_eq!(scheme.len(), 2);
    }

    #[test]
    fn test_borrowed_account_reports_busy() {
        let mut scheme = GovtScheme::new();
        let account = open_rural_account(1001, "Asha", Decimal::from(2000), 10000, Some(&mut scheme)).unwrap();
        scheme.subscribe(TransactionManager::rural());

        let _guard = account.borrow_mut();

        assert_eq!(
            scheme.deposit_in_all(Decimal::ONE).map_err(BankError::from),
            Err(BankError::account_busy(1001))
        );
    }

    #[test]
    fn test_open_rural_account_overflow_is_not_enrolled() {
        let mut scheme = GovtScheme::new();

        let result = open_rural_account(1001, "Asha", Decimal::MAX, 1, Some(&mut scheme));

        assert_eq!(result.err(), Some(BankError::arithmetic_overflow("open", 1001)));
        assert!(scheme.is_empty());
    }

    #[test]
    fn test_interrupted_deposit_keeps_delivered_notifications() {
        let mut scheme = GovtScheme::new();
        let first = open_rural_account(1, "Asha", Decimal::from(2000), 10000, Some(&mut scheme)).unwrap();
        let near_max = Decimal::MAX - Decimal::from(50000);
        let second = open_rural_account(2, "Ravi", near_max, 0, Some(&mut scheme)).unwrap();
        let third = open_rural_account(3, "Meera", Decimal::ZERO, 0, Some(&mut scheme)).unwrap();
        scheme.subscribe(TransactionManager::rural());

        let failure = scheme.deposit_in_all(Decimal::from(100000)).unwrap_err();

        assert_eq!(failure.error, BankError::arithmetic_overflow("deposit", 2));
        let delivered: Vec<_> = failure.summary.outcomes().map(|o| o.account()).collect();
        assert_eq!(delivered, vec![1]);
        assert_eq!(first.borrow().balance(), Decimal::from(112000));
        assert_eq!(second.borrow().balance(), near_max);
        assert_eq!(third.borrow().balance(), Decimal::ZERO);
    }

    #[test]
    fn test_clear_subscribers_returns_to_unset() {
        let mut scheme = GovtScheme::new();
        scheme.subscribe(TransactionManager::rural());
        assert!(scheme.has_subscriber());

        scheme.clear_subscribers();

        assert!(!scheme.has_subscriber());
    }
}
