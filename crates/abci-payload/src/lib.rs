//! # Payload Envelope & Registry
//!
//! A polymorphic, signature-verifiable transaction payload plus the
//! process-wide registry that maps a payload-type tag to the concrete
//! schema that decodes it.
//!
//! ## Registration model
//!
//! There is no metaclass-style auto-registration here: each concrete
//! application defines a type implementing [`PayloadData`] and calls
//! [`PayloadRegistry::register`] once at program start (typically from
//! a `ctor`-free `fn init()` the application calls explicitly), wiring
//! its own schemas up by hand rather than through reflection.

mod error;
mod payload;
mod registry;

pub use error::{PayloadDecodeError, PayloadError, RegistryError};
pub use payload::{Payload, PayloadData};
pub use registry::{PayloadConstructor, PayloadRegistry};
