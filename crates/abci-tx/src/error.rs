/// Errors raised by [`crate::Transaction::verify`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TxError {
    #[error("signature does not recover to the payload's declared sender")]
    InvalidSignature,
}

/// Errors raised while decoding a [`crate::Transaction`] from bytes.
#[derive(Debug, thiserror::Error)]
pub enum TxDecodeError {
    #[error(transparent)]
    Serialiser(#[from] abci_serializer::SerialiserError),
    #[error(transparent)]
    Payload(#[from] abci_payload::PayloadDecodeError),
    #[error("wire map is missing required key '{0}'")]
    MissingKey(&'static str),
    #[error("wire map key '{0}' had an unexpected type")]
    InvalidKeyType(&'static str),
}
