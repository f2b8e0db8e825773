//! # Round/Period Core — End-to-End Test Suite
//!
//! Unified integration suite exercising the full crate stack
//! (`abci-serializer` → `abci-payload` → `abci-tx` → `abci-chain` →
//! `abci-state` → `abci-round`) together, the way a host embedding the
//! core would drive it.
//!
//! ```text
//! tests/src/
//! └── integration/
//!     └── scenarios.rs   # the concrete end-to-end scenarios
//! ```
//!
//! Run with `cargo test -p abci-tests`.

mod integration;
