//! The assignment contract: state fields x, y and z, scaled by every update.

use ledger::{AppState, StateValue, Transition, TransitionError};

/// Named view over the contract's three state slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub x: StateValue,
    pub y: StateValue,
    pub z: StateValue,
}

impl Assignment {
    pub fn new(x: u64, y: u64, z: u64) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// x := x × m; y := y × 2m; z := z × 3m.
    pub fn update(&self, multiplier: StateValue) -> Self {
        Self {
            x: self.x * multiplier,
            y: self.y * (multiplier * StateValue::from(2)),
            z: self.z * (multiplier * StateValue::from(3)),
        }
    }
}

impl From<Assignment> for AppState {
    fn from(record: Assignment) -> Self {
        Self::new([record.x, record.y, record.z])
    }
}

impl From<AppState> for Assignment {
    fn from(state: AppState) -> Self {
        let [x, y, z] = state.slots();
        Self { x, y, z }
    }
}

/// The contract's single transition method. It has no precondition, so the
/// enclosing transaction always commits.
#[derive(Clone, Copy, Debug)]
pub struct Update {
    pub multiplier: StateValue,
}

impl Update {
    pub fn new(multiplier: u64) -> Self {
        Self {
            multiplier: multiplier.into(),
        }
    }
}

impl Transition for Update {
    fn apply(&self, state: &AppState) -> Result<AppState, TransitionError> {
        Ok(Assignment::from(*state).update(self.multiplier).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_scales_each_field() {
        let updated = Assignment::new(7, 8, 9).update(StateValue::from(2));
        assert_eq!(updated, Assignment::new(14, 32, 54));
    }

    #[test]
    fn multiplier_one_still_scales_y_and_z() {
        let updated = Assignment::new(14, 32, 54).update(StateValue::from(1));
        assert_eq!(updated, Assignment::new(14, 64, 162));
    }

    #[test]
    fn record_round_trips_through_app_state() {
        let record = Assignment::new(7, 8, 9);
        assert_eq!(Assignment::from(AppState::from(record)), record);
    }
}
