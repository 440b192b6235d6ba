//! Deploy the multiples contract with state (1, 2, 3), apply the one
//! accepted update, then submit an update the ledger must reject.
//!
//! You can run this demo using the following command:
//! ```shell
//! RUST_LOG=info cargo run --release --bin multiples
//! ```

use anyhow::{bail, Result};
use contracts::multiples::{Multiples, Update};
use ledger::{Keypair, LedgerConfig, LedgerError, TestLedger};
use rand::rngs::OsRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FUNDING_AMOUNT: u64 = 1_000_000_000;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ledger = TestLedger::new(LedgerConfig::default())?;
    let sender = ledger.test_account(0)?;
    let funder = ledger.test_account(1)?;

    let contract = Keypair::random(OsRng);
    let address = contract.address();

    ledger.deploy(
        &sender,
        &funder,
        &contract,
        FUNDING_AMOUNT,
        Multiples::new(1, 2, 3).into(),
    )?;
    info!("✓ Contract deployed at {address}");

    // num1 = 1 * 20 * 2 = 40
    // num2 = 2 * 20 * 3 = 120
    // num3 = 3 * 20 * 5 = 300
    ledger.invoke(&sender, &address, &Update::new(20))?;
    info!("State after update(20): {}", ledger.app_state(&address)?);

    // 109 != 20, so the whole transaction must be rejected.
    match ledger.invoke(&sender, &address, &Update::new(109)) {
        Err(err @ LedgerError::Assertion(_)) => {
            info!("✗ update(109) rejected as expected: {err}");
        }
        Err(err) => return Err(err.into()),
        Ok(_) => bail!("update(109) was committed; the precondition did not hold"),
    }

    info!("State after rejected update: {}", ledger.app_state(&address)?);

    Ok(())
}
