//! # Round & Period
//!
//! [`AbstractRound`] — the per-round transaction-dispatch contract — and
//! [`Period`], the ABCI-shaped state machine that drives a round
//! sequence through `begin_block` / `deliver_tx` / `end_block` /
//! `commit`.

mod error;
mod period;
mod phase;
mod round;

pub use error::{PeriodError, RoundError};
pub use period::Period;
pub use phase::BlockConstructionPhase;
pub use round::{AbstractRound, RoundResult};
