//! # Signed Transaction Envelope
//!
//! A [`Transaction`] pairs a `Payload` with a signature over the
//! payload's canonical byte encoding, plus the [`LedgerClient`] outbound
//! port that recovers the signer set for a `(message, signature)` pair.
//! The core never signs or holds keys — it only asks "who signed this".

mod error;
mod ledger;
mod transaction;

pub use error::{TxDecodeError, TxError};
pub use ledger::{LedgerClient, Secp256k1Ledger};
pub use transaction::Transaction;
