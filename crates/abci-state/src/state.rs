use crate::error::StateError;
use crate::value::{StateFields, StateValue};
use shared_types::Address;
use std::collections::BTreeSet;

const PARTICIPANTS: &str = "participants";

/// The state shared by every round in a period. Backed by a plain field
/// map rather than a reflective object so that `update` can propagate
/// any field — including ones a concrete application adds — without
/// the update mechanism itself needing to know about them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePeriodState {
    fields: StateFields,
}

impl BasePeriodState {
    pub fn new() -> Self {
        Self { fields: StateFields::new() }
    }

    pub fn with_participants(participants: impl IntoIterator<Item = Address>) -> Self {
        let mut state = Self::new();
        let set: BTreeSet<Address> = participants.into_iter().collect();
        state.fields.insert(PARTICIPANTS.to_string(), StateValue::Set(set));
        state
    }

    /// The participant set. Fails if unset or empty.
    pub fn participants(&self) -> Result<&BTreeSet<Address>, StateError> {
        match self.fields.get(PARTICIPANTS).and_then(StateValue::as_set) {
            Some(set) if !set.is_empty() => Ok(set),
            _ => Err(StateError::FieldUnset(PARTICIPANTS)),
        }
    }

    pub fn field(&self, key: &str) -> Option<&StateValue> {
        self.fields.get(key)
    }

    /// Returns a fresh state: every existing field, with `overrides`
    /// applied on top. Fields not named in `overrides` are unchanged;
    /// fields named in `overrides` take the override's value.
    pub fn update(&self, overrides: StateFields) -> Self {
        let mut fields = self.fields.clone();
        for (key, value) in overrides {
            fields.insert(key, value);
        }
        Self { fields }
    }
}
