use shared_types::Address;
use std::collections::{BTreeMap, BTreeSet};

/// A single period-state field. Richer than the wire [`shared_types::Value`]
/// since this representation never crosses the wire (see crate docs): it
/// adds a `Set` variant, used for `participants`, that the Serialiser
/// deliberately has no counterpart for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
    Int(i64),
    Str(String),
    Bool(bool),
    Bytes(Vec<u8>),
    Set(BTreeSet<Address>),
    Map(StateFields),
}

/// A period state's field map, sorted by key.
pub type StateFields = BTreeMap<String, StateValue>;

impl StateValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            StateValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StateValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            StateValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&BTreeSet<Address>> {
        match self {
            StateValue::Set(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&StateFields> {
        match self {
            StateValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<i64> for StateValue {
    fn from(i: i64) -> Self {
        StateValue::Int(i)
    }
}

impl From<String> for StateValue {
    fn from(s: String) -> Self {
        StateValue::Str(s)
    }
}

impl From<&str> for StateValue {
    fn from(s: &str) -> Self {
        StateValue::Str(s.to_string())
    }
}

impl From<bool> for StateValue {
    fn from(b: bool) -> Self {
        StateValue::Bool(b)
    }
}

impl From<BTreeSet<Address>> for StateValue {
    fn from(s: BTreeSet<Address>) -> Self {
        StateValue::Set(s)
    }
}
