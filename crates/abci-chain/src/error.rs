/// Raised by [`crate::Blockchain::add_block`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("block height {actual} does not follow chain height {expected}")]
    AddBlockError { expected: u64, actual: u64 },
}

/// Raised by [`crate::BlockBuilder`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("header already set for this block; call reset() first")]
    HeaderAlreadySet,
    #[error("header not set; call set_header() before get_block()")]
    HeaderNotSet,
}

/// Raised by [`crate::ConsensusParams::from_map`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConsensusParamsError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("max_participants must be a non-negative integer, got {0}")]
    NegativeParticipants(i64),
}
