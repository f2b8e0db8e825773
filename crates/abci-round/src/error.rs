use crate::phase::BlockConstructionPhase;
use abci_chain::ChainError;

/// Raised by [`crate::AbstractRound::process_transaction`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("no handler registered for transaction type '{0}'")]
    UnknownTransactionType(String),
    #[error("transaction failed the round's check_transaction predicate")]
    TransactionNotValid,
}

/// Raised by [`crate::Period`]'s ABCI-shaped entry points.
#[derive(Debug, thiserror::Error)]
pub enum PeriodError {
    #[error("period is finished; no further blocks are accepted")]
    PeriodFinished,
    #[error("{entry_point} called in phase {actual:?}, expected {expected:?}")]
    PhaseMismatch {
        entry_point: &'static str,
        expected: BlockConstructionPhase,
        actual: BlockConstructionPhase,
    },
    #[error(transparent)]
    AddBlock(#[from] ChainError),
}
