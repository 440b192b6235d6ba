//! Deploy the assignment contract with state (7, 8, 9) onto a local test
//! ledger and scale its fields through two update transactions.
//!
//! You can run this demo using the following command:
//! ```shell
//! RUST_LOG=info cargo run --release --bin assignment
//! ```

use anyhow::Result;
use contracts::assignment::{Assignment, Update};
use ledger::{Keypair, LedgerConfig, TestLedger};
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

    // Fresh address for the new contract instance.
    let contract = Keypair::random(OsRng);
    let address = contract.address();

    ledger.deploy(
        &sender,
        &funder,
        &contract,
        FUNDING_AMOUNT,
        Assignment::new(7, 8, 9).into(),
    )?;
    info!("✓ Contract deployed at {address}");
    info!(
        "  Contract balance: {}, funder balance: {}",
        ledger.balance(&address)?,
        ledger.balance(&funder.address())?
    );

    // x = 7 * 2 = 14
    // y = 8 * 2 * 2 = 32
    // z = 9 * 2 * 3 = 54
    ledger.invoke(&sender, &address, &Update::new(2))?;
    info!("Updating values...");
    info!("Intermediate values: {}", ledger.app_state(&address)?);

    // x = 14 * 1 = 14
    // y = 32 * 2 = 64
    // z = 54 * 3 = 162
    ledger.invoke(&sender, &address, &Update::new(1))?;
    info!("Final state values: {}", ledger.app_state(&address)?);

    Ok(())
}
