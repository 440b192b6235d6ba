use serde::{Deserialize, Serialize};

use crate::crypto::Address;
use crate::state::AppState;

/// A ledger account. Contract accounts carry app state; plain accounts
/// (the pre-funded test accounts) do not.
#[derive(Clone, Copy, Debug)]
pub struct Account {
    pub address: Address,
    pub balance: u64,
    pub state: Option<AppState>,
}

impl Account {
    pub const fn is_contract(&self) -> bool {
        self.state.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Deploy,
    Invoke,
}

/// Confirmation returned for every committed transaction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Ledger height after the transaction committed.
    pub height: u64,
    pub kind: TxKind,
}
