//! Scenario steps
//!
//! A scenario is the ordered list of operations a driver issues against the
//! bank. Each step maps to exactly one component operation.

use super::account::AccountNumber;
use rust_decimal::Decimal;

/// One driver operation
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Open a standard account
    Open {
        account: AccountNumber,
        holder: String,
        balance: Decimal,
    },

    /// Open a savings account
    OpenSavings {
        account: AccountNumber,
        holder: String,
        balance: Decimal,
        interest_rate: Decimal,
    },

    /// Open a rural account and enroll it in the government scheme
    OpenRural {
        account: AccountNumber,
        holder: String,
        balance: Decimal,
        opening_credit: u64,
    },

    /// Deposit into one account
    Deposit {
        account: AccountNumber,
        amount: Decimal,
    },

    /// Withdraw from one account
    Withdraw {
        account: AccountNumber,
        amount: Decimal,
    },

    /// Print the report for one account
    Report { account: AccountNumber },

    /// Subscribe the rural deposit handler to the government scheme
    Subscribe,

    /// Deposit the same amount into every enrolled rural account
    SchemeDeposit { amount: Decimal },
}

impl Step {
    /// Short operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Step::Open { .. } => "open",
            Step::OpenSavings { .. } => "open_savings",
            Step::OpenRural { .. } => "open_rural",
            Step::Deposit { .. } => "deposit",
            Step::Withdraw { .. } => "withdraw",
            Step::Report { .. } => "report",
            Step::Subscribe => "subscribe",
            Step::SchemeDeposit { .. } => "scheme_deposit",
        }
    }
}

/// A named, ordered list of steps
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(steps: Vec<Step>) -> Self {
        Scenario { steps }
    }

    /// The built-in demonstration
    ///
    /// A savings account goes through a deposit, a withdrawal and a report.
    /// Then two rural accounts are opened, the rural deposit handler is
    /// subscribed and the scheme credits both before they are reported.
    pub fn demo() -> Self {
        let holder = "Ishaan".to_string();

        Scenario::new(vec![
            Step::OpenSavings {
                account: 56789,
                holder: holder.clone(),
                balance: Decimal::from(2000),
                interest_rate: Decimal::new(5, 2),
            },
            Step::Deposit {
                account: 56789,
                amount: Decimal::from(500),
            },
            Step::Withdraw {
                account: 56789,
                amount: Decimal::from(200),
            },
            Step::Report { account: 56789 },
            Step::OpenRural {
                account: 1001,
                holder: holder.clone(),
                balance: Decimal::from(2000),
                opening_credit: 10000,
            },
            Step::OpenRural {
                account: 1002,
                holder,
                balance: Decimal::from(3000),
                opening_credit: 10000,
            },
            Step::Subscribe,
            Step::SchemeDeposit {
                amount: Decimal::from(100000),
            },
            Step::Report { account: 1001 },
            Step::Report { account: 1002 },
        ])
    }
}

impl From<Vec<Step>> for Scenario {
    fn from(steps: Vec<Step>) -> Self {
        Scenario::new(steps)
    }
}
