use crate::error::ConsensusParamsError;
use shared_types::Map;

/// Consensus-wide parameters derived from the participant set size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsensusParams {
    max_participants: u64,
}

impl ConsensusParams {
    pub fn new(max_participants: u64) -> Self {
        Self { max_participants }
    }

    /// Parses `{"max_participants": <non-negative integer>}`.
    pub fn from_map(map: &Map) -> Result<Self, ConsensusParamsError> {
        let value = map
            .get("max_participants")
            .ok_or(ConsensusParamsError::MissingField("max_participants"))?;
        let n = value
            .as_int()
            .ok_or(ConsensusParamsError::MissingField("max_participants"))?;
        if n < 0 {
            return Err(ConsensusParamsError::NegativeParticipants(n));
        }
        Ok(Self::new(n as u64))
    }

    pub fn max_participants(&self) -> u64 {
        self.max_participants
    }

    /// `⌈2n/3⌉`, rounding up: a supermajority of `n` participants.
    pub fn two_thirds_threshold(&self) -> u64 {
        (2 * self.max_participants + 2) / 3
    }
}
