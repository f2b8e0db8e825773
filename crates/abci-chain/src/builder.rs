use crate::block::{Block, Header};
use crate::error::BuilderError;
use abci_tx::Transaction;

/// Accumulates the header and transactions for the block currently
/// under construction between `begin_block` and `commit`.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    header: Option<Header>,
    transactions: Vec<Transaction>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the header and transaction buffer, readying the builder
    /// for a new block.
    pub fn reset(&mut self) {
        self.header = None;
        self.transactions.clear();
    }

    /// Sets the block header. Fails if a header is already set; call
    /// `reset()` first.
    pub fn set_header(&mut self, header: Header) -> Result<(), BuilderError> {
        if self.header.is_some() {
            return Err(BuilderError::HeaderAlreadySet);
        }
        self.header = Some(header);
        Ok(())
    }

    pub fn add_transaction(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Builds a [`Block`] from the accumulated header and transactions.
    /// Fails if no header has been set. Non-destructive: the builder's
    /// state is untouched, so a failed `commit()` can call this again
    /// on retry without having lost the header/transactions. Only
    /// `reset()` clears the builder.
    pub fn get_block(&self) -> Result<Block, BuilderError> {
        let header = self.header.clone().ok_or(BuilderError::HeaderNotSet)?;
        Ok(Block::new(header, self.transactions.clone()))
    }
}
