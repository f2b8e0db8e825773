//! # Chain State
//!
//! The append-only [`Blockchain`], the [`BlockBuilder`] that accumulates
//! a block under construction, and [`ConsensusParams`] — the
//! participant-count-derived thresholds the core's rounds consult.

mod block;
mod blockchain;
mod builder;
mod error;
mod params;

pub use block::{Block, Header};
pub use blockchain::Blockchain;
pub use builder::BlockBuilder;
pub use error::{BuilderError, ChainError, ConsensusParamsError};
pub use params::ConsensusParams;
