//! # Canonical Serialiser
//!
//! Deterministic, canonical encoding/decoding of a [`shared_types::Map`]
//! to bytes. Two structurally-equal maps on two replicas produce
//! byte-identical output — this is what makes it safe to compute a
//! transaction signature over a payload's byte encoding (`abci-tx`) and
//! have every honest replica agree on what was signed.
//!
//! ## Wire shape
//!
//! Tag-length-value, one tag byte per [`Value`](shared_types::Value)
//! variant (`Int`/`Str`/`Bytes`/`Bool`/`Map`), fixed-width big-endian
//! integers, `u32` big-endian length prefixes for variable-width data.
//! Because the backing map is a `BTreeMap`, entries are already emitted
//! in sorted-key order — no separate canonicalization pass is needed.

use shared_types::{Map, Value};

mod cursor;
mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

/// Errors raised by the serialiser.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SerialiserError {
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),
}

const TAG_INT: u8 = 0x00;
const TAG_STR: u8 = 0x01;
const TAG_BYTES: u8 = 0x02;
const TAG_BOOL: u8 = 0x03;
const TAG_MAP: u8 = 0x04;
