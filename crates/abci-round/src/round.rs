use crate::RoundError;
use abci_chain::ConsensusParams;
use abci_payload::Payload;
use abci_state::BasePeriodState;
use abci_tx::Transaction;

/// The outcome a round yields at `end_block`, opaque to the core. Any
/// `Debug + Send + Sync` type qualifies — there is deliberately no
/// manual impl required per concrete result type.
pub trait RoundResult: std::fmt::Debug + Send + Sync {}

impl<T: std::fmt::Debug + Send + Sync> RoundResult for T {}

/// A protocol round: the unit of transaction dispatch within a period.
///
/// Dispatch is single-entry-point (`check_payload`/`apply_payload`),
/// not two independently-looked-up tag handlers, so `check_transaction`
/// and `process_transaction` cannot silently disagree — both are
/// derived from the same `check_payload` verdict.
pub trait AbstractRound: std::fmt::Debug {
    fn round_id(&self) -> &'static str;

    fn period_state(&self) -> &BasePeriodState;

    fn consensus_params(&self) -> &ConsensusParams;

    /// Pure predicate against the current period state. `None` means no
    /// handler is registered for `payload`'s tag; `Some(verdict)` is the
    /// tag-specific checker's result. Must not mutate anything.
    fn check_payload(&self, payload: &Payload) -> Option<bool>;

    /// Applies an already-`check_payload`-approved `payload`, possibly
    /// mutating the round's working state. Never called directly by a
    /// well-behaved caller without a preceding `Some(true)` verdict from
    /// `check_payload` for the same payload.
    fn apply_payload(&mut self, payload: &Payload);

    /// Called by the Period at commit time, after the block has been
    /// appended to the chain, at most once per block. `None` means the
    /// round continues into the next block. `Some((result, next))`
    /// means the round terminated with `result`; `next` becomes the new
    /// active round, or `None` to terminate the period.
    #[allow(clippy::type_complexity)]
    fn end_block(&mut self) -> Option<(Box<dyn RoundResult>, Option<Box<dyn AbstractRound>>)>;

    /// Returns `false` for an unrecognised transaction type; otherwise
    /// the tag-specific checker's verdict.
    fn check_transaction(&self, tx: &Transaction) -> bool {
        self.check_payload(tx.payload()).unwrap_or(false)
    }

    /// Re-derives `check_payload`'s verdict and applies the payload iff
    /// it was `Some(true)`.
    fn process_transaction(&mut self, tx: &Transaction) -> Result<(), RoundError> {
        match self.check_payload(tx.payload()) {
            None => Err(RoundError::UnknownTransactionType(
                tx.payload().transaction_type().to_string(),
            )),
            Some(false) => Err(RoundError::TransactionNotValid),
            Some(true) => {
                self.apply_payload(tx.payload());
                Ok(())
            }
        }
    }
}
