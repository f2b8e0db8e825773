use crate::phase::BlockConstructionPhase;
use crate::round::{AbstractRound, RoundResult};
use crate::PeriodError;
use abci_chain::{BlockBuilder, Blockchain, ConsensusParams, Header};
use abci_tx::Transaction;

use BlockConstructionPhase::{WaitingForBeginBlock, WaitingForCommit, WaitingForDeliverTx};

/// The replicated state-machine host: drives an [`AbstractRound`]
/// sequence through the four ABCI-shaped entry points, appending a
/// block to its [`Blockchain`] on every `commit`.
#[derive(Debug)]
pub struct Period {
    phase: BlockConstructionPhase,
    finished: bool,
    chain: Blockchain,
    builder: BlockBuilder,
    consensus_params: ConsensusParams,
    current_round: Option<Box<dyn AbstractRound>>,
    previous_rounds: Vec<Box<dyn AbstractRound>>,
    round_results: Vec<Box<dyn RoundResult>>,
}

impl Period {
    pub fn new(initial_round: Box<dyn AbstractRound>, consensus_params: ConsensusParams) -> Self {
        Self {
            phase: WaitingForBeginBlock,
            finished: false,
            chain: Blockchain::new(),
            builder: BlockBuilder::new(),
            consensus_params,
            current_round: Some(initial_round),
            previous_rounds: Vec::new(),
            round_results: Vec::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_round(&self) -> Option<&dyn AbstractRound> {
        self.current_round.as_deref()
    }

    pub fn current_round_id(&self) -> Option<&'static str> {
        self.current_round().map(AbstractRound::round_id)
    }

    pub fn previous_rounds(&self) -> &[Box<dyn AbstractRound>] {
        &self.previous_rounds
    }

    pub fn round_results(&self) -> &[Box<dyn RoundResult>] {
        &self.round_results
    }

    pub fn latest_result(&self) -> Option<&dyn RoundResult> {
        self.round_results.last().map(|r| r.as_ref())
    }

    pub fn height(&self) -> u64 {
        self.chain.height()
    }

    pub fn length(&self) -> u64 {
        self.chain.length()
    }

    pub fn consensus_params(&self) -> &ConsensusParams {
        &self.consensus_params
    }

    fn require_phase(&self, entry_point: &'static str, expected: BlockConstructionPhase) -> Result<(), PeriodError> {
        if self.phase != expected {
            return Err(PeriodError::PhaseMismatch {
                entry_point,
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    pub fn begin_block(&mut self, header: Header) -> Result<(), PeriodError> {
        if self.finished {
            return Err(PeriodError::PeriodFinished);
        }
        self.require_phase("begin_block", WaitingForBeginBlock)?;

        self.builder.reset();
        self.builder
            .set_header(header)
            .unwrap_or_else(|_| unreachable!("builder was just reset"));

        self.phase = WaitingForDeliverTx;
        tracing::debug!("begin_block accepted");
        Ok(())
    }

    /// Checks `tx` against the current round, applies it if valid, and
    /// appends it to the block under construction. Returns whether the
    /// transaction was accepted; rejected transactions are simply
    /// excluded, not treated as an error.
    pub fn deliver_tx(&mut self, tx: Transaction) -> Result<bool, PeriodError> {
        self.require_phase("deliver_tx", WaitingForDeliverTx)?;

        let round = self
            .current_round
            .as_mut()
            .unwrap_or_else(|| unreachable!("phase WaitingForDeliverTx implies an active round"));

        let valid = round.check_transaction(&tx);
        if !valid {
            return Ok(false);
        }

        round.process_transaction(&tx).unwrap_or_else(|_| {
            panic!(
                "round '{}' disagreed with itself: check_transaction accepted a transaction process_transaction then rejected",
                round.round_id()
            )
        });

        self.builder.add_transaction(tx);
        Ok(true)
    }

    pub fn end_block(&mut self) -> Result<(), PeriodError> {
        self.require_phase("end_block", WaitingForDeliverTx)?;
        self.phase = WaitingForCommit;
        Ok(())
    }

    pub fn commit(&mut self) -> Result<(), PeriodError> {
        self.require_phase("commit", WaitingForCommit)?;

        let block = self
            .builder
            .get_block()
            .unwrap_or_else(|_| unreachable!("begin_block always sets a header before commit is reachable"));

        self.chain.add_block(block)?;
        self.update_round();

        self.phase = WaitingForBeginBlock;
        Ok(())
    }

    fn update_round(&mut self) {
        let round = self
            .current_round
            .take()
            .unwrap_or_else(|| unreachable!("commit is only reachable while a round is active"));

        match round.end_block() {
            None => {
                self.current_round = Some(round);
            }
            Some((result, next)) => {
                tracing::info!(round_id = round.round_id(), "round terminated at commit");
                self.previous_rounds.push(round);
                self.round_results.push(result);
                match next {
                    Some(next_round) => {
                        tracing::info!(round_id = next_round.round_id(), "round installed");
                        self.current_round = Some(next_round);
                    }
                    None => {
                        tracing::info!("period finished");
                        self.finished = true;
                    }
                }
            }
        }
    }
}
