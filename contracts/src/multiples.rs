//! The multiples contract: state fields num1, num2 and num3.
//!
//! Its transition carries an equality precondition: any argument other than
//! [`REQUIRED_UPDATE`] rejects the whole enclosing transaction.

use ledger::{AppState, StateValue, Transition, TransitionError};

/// The only argument `update` accepts.
pub const REQUIRED_UPDATE: u64 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Multiples {
    pub num1: StateValue,
    pub num2: StateValue,
    pub num3: StateValue,
}

impl Multiples {
    pub fn new(num1: u64, num2: u64, num3: u64) -> Self {
        Self {
            num1: num1.into(),
            num2: num2.into(),
            num3: num3.into(),
        }
    }

    /// num1 := num1 × 2u; num2 := num2 × 3u; num3 := num3 × 5u, provided
    /// `updated` equals [`REQUIRED_UPDATE`].
    pub fn update(&self, updated: StateValue) -> Result<Self, TransitionError> {
        let required = StateValue::from(REQUIRED_UPDATE);
        if updated != required {
            return Err(TransitionError::AssertEq {
                expected: required,
                actual: updated,
            });
        }

        Ok(Self {
            num1: self.num1 * (updated * StateValue::from(2)),
            num2: self.num2 * (updated * StateValue::from(3)),
            num3: self.num3 * (updated * StateValue::from(5)),
        })
    }
}

impl From<Multiples> for AppState {
    fn from(record: Multiples) -> Self {
        Self::new([record.num1, record.num2, record.num3])
    }
}

impl From<AppState> for Multiples {
    fn from(state: AppState) -> Self {
        let [num1, num2, num3] = state.slots();
        Self { num1, num2, num3 }
    }
}

/// The contract's single transition method.
#[derive(Clone, Copy, Debug)]
pub struct Update {
    pub updated: StateValue,
}

impl Update {
    pub fn new(updated: u64) -> Self {
        Self {
            updated: updated.into(),
        }
    }
}

impl Transition for Update {
    fn apply(&self, state: &AppState) -> Result<AppState, TransitionError> {
        Multiples::from(*state).update(self.updated).map(Into::into)
    }
}
