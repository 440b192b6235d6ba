#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod crypto;
pub mod error;
pub mod ledger;
pub mod state;
pub mod types;

pub use config::LedgerConfig;
pub use crypto::{Address, Keypair, PublicKey, SecretKey};
pub use error::{LedgerError, Result};
pub use ledger::TestLedger;
pub use state::{AppState, StateValue, Transition, TransitionError};
pub use types::{Account, TxKind, TxReceipt};
