use abci_tx::Transaction;
use shared_types::Map;

/// Block header. `height` is the only field the core interprets;
/// everything else is opaque consensus-engine-supplied metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub height: u64,
    pub extra: Map,
}

impl Header {
    pub fn new(height: u64) -> Self {
        Self { height, extra: Map::new() }
    }

    pub fn with_extra(height: u64, extra: Map) -> Self {
        Self { height, extra }
    }
}

/// A committed block: a header plus the transactions delivered while it
/// was under construction, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: Header,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }
}
