//! State values and the transition seam contract definitions implement.

use std::fmt;
use std::ops::Mul;

use num_bigint::BigUint;
use pasta_curves::group::ff::PrimeField;
use pasta_curves::pallas;
use thiserror::Error;

/// A single persistent numeric slot: an element of the Pallas base field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateValue(pallas::Base);

impl StateValue {
    pub fn inner(&self) -> pallas::Base {
        self.0
    }
}

impl From<u64> for StateValue {
    fn from(n: u64) -> Self {
        Self(pallas::Base::from(n))
    }
}

impl Mul for StateValue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The canonical repr is 32 little-endian bytes; render as decimal.
        let n = BigUint::from_bytes_le(self.0.to_repr().as_ref());
        write!(f, "{n}")
    }
}

/// The three app-state slots of a contract instance, committed atomically
/// per transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppState([StateValue; 3]);

impl AppState {
    pub fn new(slots: [StateValue; 3]) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> [StateValue; 3] {
        self.0
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}, {b}, {c}")
    }
}

/// A contract's state-transition method: reads the committed slots and
/// proposes replacements for all of them. Returning an error rejects the
/// whole enclosing transaction.
pub trait Transition {
    fn apply(&self, state: &AppState) -> std::result::Result<AppState, TransitionError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("expected {expected}, got {actual}")]
    AssertEq {
        expected: StateValue,
        actual: StateValue,
    },
}
