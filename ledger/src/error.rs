use thiserror::Error;

use crate::crypto::Address;
use crate::state::TransitionError;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Assertion failed: {0}")]
    Assertion(#[from] TransitionError),

    #[error("Unknown account: {0}")]
    UnknownAccount(Address),

    #[error("Account already exists: {0}")]
    AccountExists(Address),

    #[error("Account {0} holds no contract state")]
    NotAContract(Address),

    #[error("No pre-funded test account at index {0}")]
    NoSuchTestAccount(usize),

    #[error("Insufficient balance on {address}: have {balance}, need {required}")]
    InsufficientBalance {
        address: Address,
        balance: u64,
        required: u64,
    },

    #[error("Funding amount {amount} does not cover the account creation fee of {fee}")]
    InsufficientFunding { amount: u64, fee: u64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// True when the rejection came from a contract precondition rather
    /// than from the ledger itself.
    pub const fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }
}
