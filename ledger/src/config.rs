use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// Parameters of the local test ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Seed for test-account generation. Fixed by default so every run
    /// observes the same addresses.
    pub seed: u64,
    /// Number of pre-funded test accounts.
    pub test_accounts: usize,
    /// Starting balance of each test account.
    pub initial_balance: u64,
    /// Fee deducted from the transferred amount when a deployment creates
    /// a new contract account.
    pub account_creation_fee: u64,
}

impl LedgerConfig {
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub const fn with_test_accounts(mut self, count: usize) -> Self {
        self.test_accounts = count;
        self
    }

    pub const fn with_initial_balance(mut self, balance: u64) -> Self {
        self.initial_balance = balance;
        self
    }

    pub const fn with_account_creation_fee(mut self, fee: u64) -> Self {
        self.account_creation_fee = fee;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.test_accounts == 0 {
            return Err(LedgerError::Config(
                "at least one test account is required".to_string(),
            ));
        }

        if self.initial_balance == 0 {
            return Err(LedgerError::Config(
                "test accounts need a non-zero starting balance".to_string(),
            ));
        }

        if self.account_creation_fee >= self.initial_balance {
            return Err(LedgerError::Config(
                "account creation fee must be below the initial balance".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            test_accounts: 10,
            initial_balance: 10_000_000_000,
            account_creation_fee: 1_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(LedgerConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_test_accounts() {
        let config = LedgerConfig::default().with_test_accounts(0);
        assert!(matches!(config.validate(), Err(LedgerError::Config(_))));
    }

    #[test]
    fn rejects_fee_at_or_above_initial_balance() {
        let config = LedgerConfig::default()
            .with_initial_balance(1_000)
            .with_account_creation_fee(1_000);
        assert!(matches!(config.validate(), Err(LedgerError::Config(_))));
    }

    #[test]
    fn serializes_round_trip() {
        let config = LedgerConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let restored: LedgerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed, 7);
        assert_eq!(restored.test_accounts, config.test_accounts);
    }
}
