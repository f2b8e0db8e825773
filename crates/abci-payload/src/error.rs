/// Errors raised by [`crate::PayloadRegistry`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("transaction type '{0}' is already registered to a different payload schema")]
    DuplicateTag(String),
    #[error("unknown transaction type '{0}'")]
    UnknownTag(String),
}

/// Errors raised while constructing or validating a [`crate::Payload`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload sender must not be empty")]
    EmptySender,
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("field '{0}' had an unexpected type")]
    InvalidFieldType(&'static str),
}

/// Errors raised while decoding a [`crate::Payload`] from bytes.
#[derive(Debug, thiserror::Error)]
pub enum PayloadDecodeError {
    #[error(transparent)]
    Serialiser(#[from] abci_serializer::SerialiserError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("wire map is missing required key '{0}'")]
    MissingKey(&'static str),
    #[error("wire map key '{0}' had an unexpected type")]
    InvalidKeyType(&'static str),
}
