//! The local deterministic test ledger the demo drivers run against.
//!
//! This is a stand-in for a real chain: an in-memory account map with
//! atomic per-transaction commit. Every submit call is a blocking
//! request/response pair; there is exactly one writer sequence, so a
//! transaction either fully commits or leaves the ledger untouched.

use std::collections::HashMap;

use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::LedgerConfig;
use crate::crypto::{Address, Keypair};
use crate::error::{LedgerError, Result};
use crate::state::{AppState, Transition};
use crate::types::{Account, TxKind, TxReceipt};

pub struct TestLedger {
    config: LedgerConfig,
    test_accounts: Vec<Keypair>,
    inner: RwLock<Inner>,
}

struct Inner {
    accounts: HashMap<Address, Account>,
    height: u64,
}

impl TestLedger {
    /// Create a ledger with the configured number of pre-funded test
    /// accounts, generated from the configured seed.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut accounts = HashMap::with_capacity(config.test_accounts);
        let mut test_accounts = Vec::with_capacity(config.test_accounts);

        for _ in 0..config.test_accounts {
            let keypair = Keypair::random(&mut rng);
            let address = keypair.address();
            accounts.insert(
                address,
                Account {
                    address,
                    balance: config.initial_balance,
                    state: None,
                },
            );
            test_accounts.push(keypair);
        }

        info!(
            accounts = config.test_accounts,
            balance = config.initial_balance,
            "Local test ledger ready"
        );

        Ok(Self {
            config,
            test_accounts,
            inner: RwLock::new(Inner {
                accounts,
                height: 0,
            }),
        })
    }

    /// Keypair of the pre-funded test account at `index`.
    pub fn test_account(&self, index: usize) -> Result<Keypair> {
        self.test_accounts
            .get(index)
            .cloned()
            .ok_or(LedgerError::NoSuchTestAccount(index))
    }

    /// Submit a deployment transaction: transfer `amount` from the funder
    /// into a new contract account and install its initial state.
    ///
    /// The new account starts at `amount` minus the account creation fee,
    /// while the funder is debited the full `amount`. Every check runs
    /// before any balance moves; a rejected deployment has no effect.
    pub fn deploy(
        &self,
        sender: &Keypair,
        funder: &Keypair,
        contract: &Keypair,
        amount: u64,
        initial_state: AppState,
    ) -> Result<TxReceipt> {
        let mut inner = self.inner.write();

        let sender_addr = sender.address();
        if !inner.accounts.contains_key(&sender_addr) {
            return Err(LedgerError::UnknownAccount(sender_addr));
        }

        let contract_addr = contract.address();
        if inner.accounts.contains_key(&contract_addr) {
            return Err(LedgerError::AccountExists(contract_addr));
        }

        let fee = self.config.account_creation_fee;
        if amount < fee {
            return Err(LedgerError::InsufficientFunding { amount, fee });
        }

        let funder_addr = funder.address();
        let funder_balance = inner
            .accounts
            .get(&funder_addr)
            .map(|account| account.balance)
            .ok_or(LedgerError::UnknownAccount(funder_addr))?;
        if funder_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                address: funder_addr,
                balance: funder_balance,
                required: amount,
            });
        }

        if let Some(account) = inner.accounts.get_mut(&funder_addr) {
            account.balance -= amount;
        }
        inner.accounts.insert(
            contract_addr,
            Account {
                address: contract_addr,
                balance: amount - fee,
                state: Some(initial_state),
            },
        );
        inner.height += 1;

        debug!(
            height = inner.height,
            contract = %contract_addr,
            amount,
            "Committed deployment"
        );

        Ok(TxReceipt {
            height: inner.height,
            kind: TxKind::Deploy,
        })
    }

    /// Submit an invocation transaction applying `transition` to the
    /// contract at `address`.
    ///
    /// The replacement slots are computed first; a transition error rejects
    /// the transaction before anything is written, so the committed state
    /// is unchanged.
    pub fn invoke<T: Transition>(
        &self,
        sender: &Keypair,
        address: &Address,
        transition: &T,
    ) -> Result<TxReceipt> {
        let mut inner = self.inner.write();

        let sender_addr = sender.address();
        if !inner.accounts.contains_key(&sender_addr) {
            return Err(LedgerError::UnknownAccount(sender_addr));
        }

        let current = inner
            .accounts
            .get(address)
            .ok_or(LedgerError::UnknownAccount(*address))?
            .state
            .ok_or(LedgerError::NotAContract(*address))?;

        let next = transition.apply(&current)?;

        if let Some(account) = inner.accounts.get_mut(address) {
            account.state = Some(next);
        }
        inner.height += 1;

        debug!(height = inner.height, contract = %address, "Committed invocation");

        Ok(TxReceipt {
            height: inner.height,
            kind: TxKind::Invoke,
        })
    }

    /// Committed balance of `address`.
    pub fn balance(&self, address: &Address) -> Result<u64> {
        self.account(address).map(|account| account.balance)
    }

    /// Committed app state of the contract at `address`.
    pub fn app_state(&self, address: &Address) -> Result<AppState> {
        self.account(address)?
            .state
            .ok_or(LedgerError::NotAContract(*address))
    }

    /// Snapshot of the account at `address`.
    pub fn account(&self, address: &Address) -> Result<Account> {
        self.inner
            .read()
            .accounts
            .get(address)
            .copied()
            .ok_or(LedgerError::UnknownAccount(*address))
    }

    /// Number of committed transactions.
    pub fn height(&self) -> u64 {
        self.inner.read().height
    }

    pub const fn config(&self) -> &LedgerConfig {
        &self.config
    }
}
