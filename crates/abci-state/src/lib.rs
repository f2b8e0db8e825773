//! # Period State
//!
//! [`BasePeriodState`], the field map shared by every round within a
//! period and threaded forward, with overrides, on each round
//! succession.

mod error;
mod state;
mod value;

pub use error::StateError;
pub use state::BasePeriodState;
pub use value::{StateFields, StateValue};
