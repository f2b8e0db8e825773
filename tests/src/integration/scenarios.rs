use abci_chain::{ConsensusParams, Header};
use abci_payload::{Payload, PayloadData, PayloadError, PayloadRegistry};
use abci_round::{AbstractRound, BlockConstructionPhase, Period, PeriodError, RoundResult};
use abci_state::BasePeriodState;
use abci_tx::{Secp256k1Ledger, Transaction, TxError};
use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};
use shared_types::{Address, Map, Value};

const VOTE_TAG: &str = "cast_vote_e2e";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CastVote {
    choice: String,
}

impl PayloadData for CastVote {
    fn transaction_type(&self) -> &'static str {
        VOTE_TAG
    }

    fn fields(&self) -> Map {
        let mut m = Map::new();
        m.insert("choice".to_string(), Value::Str(self.choice.clone()));
        m
    }

    fn clone_box(&self) -> Box<dyn PayloadData> {
        Box::new(self.clone())
    }
}

fn construct_cast_vote(_sender: String, mut fields: Map) -> Result<Box<dyn PayloadData>, PayloadError> {
    let choice = fields
        .remove("choice")
        .and_then(|v| v.as_str().map(str::to_string))
        .ok_or(PayloadError::MissingField("choice"))?;
    Ok(Box::new(CastVote { choice }))
}

fn register_vote_schema() {
    PayloadRegistry::register(VOTE_TAG, construct_cast_vote).unwrap();
}

fn address_of(key: &SigningKey) -> Address {
    let encoded = key.verifying_key().to_encoded_point(false);
    let mut hasher = Keccak256::new();
    hasher.update(&encoded.as_bytes()[1..]);
    let hash = hasher.finalize();
    format!("0x{}", hex::encode(&hash[12..]))
}

fn sign(message: &[u8], key: &SigningKey) -> String {
    let mut hasher = Keccak256::new();
    hasher.update(message);
    let message_hash = hasher.finalize();
    let (sig, recovery_id) = key
        .sign_prehash_recoverable(&message_hash)
        .expect("signing over a fixed-size hash cannot fail");
    let mut bytes = sig.to_bytes().to_vec();
    bytes.push(recovery_id.to_byte());
    format!("0x{}", hex::encode(bytes))
}

fn signed_vote(key: &SigningKey, choice: &str) -> Transaction {
    register_vote_schema();
    let payload = Payload::new(address_of(key), Box::new(CastVote { choice: choice.to_string() })).unwrap();
    let message = payload.encode();
    let signature = sign(&message, key);
    Transaction::new(payload, signature)
}

/// A round that tallies "yes" votes and, once `votes_needed` is reached,
/// terminates with `result` and installs `next` as the successor.
#[derive(Debug)]
struct TallyRound {
    id: &'static str,
    state: BasePeriodState,
    params: ConsensusParams,
    yes_votes: u64,
    votes_needed: u64,
    result: &'static str,
    next: Option<Box<dyn AbstractRound>>,
}

impl TallyRound {
    fn new(
        id: &'static str,
        params: ConsensusParams,
        votes_needed: u64,
        result: &'static str,
        next: Option<Box<dyn AbstractRound>>,
    ) -> Self {
        Self {
            id,
            state: BasePeriodState::new(),
            params,
            yes_votes: 0,
            votes_needed,
            result,
            next,
        }
    }
}

impl AbstractRound for TallyRound {
    fn round_id(&self) -> &'static str {
        self.id
    }

    fn period_state(&self) -> &BasePeriodState {
        &self.state
    }

    fn consensus_params(&self) -> &ConsensusParams {
        &self.params
    }

    fn check_payload(&self, payload: &Payload) -> Option<bool> {
        if payload.transaction_type() != VOTE_TAG {
            return None;
        }
        Some(payload.data().get("choice").and_then(|v| v.as_str()) == Some("yes"))
    }

    fn apply_payload(&mut self, _payload: &Payload) {
        self.yes_votes += 1;
    }

    fn end_block(&mut self) -> Option<(Box<dyn RoundResult>, Option<Box<dyn AbstractRound>>)> {
        if self.yes_votes < self.votes_needed {
            return None;
        }
        let result: Box<dyn RoundResult> = Box::new(self.result.to_string());
        Some((result, self.next.take()))
    }
}

/// Scenario 1: linear period, single round. A valid transaction is
/// applied and included; an invalid one is dropped; the round carries
/// over because it has not yet reached its vote threshold.
#[test]
fn linear_period_single_round() {
    let params = ConsensusParams::new(1);
    let round = TallyRound::new("r1", params, 5, "unused", None);
    let mut period = Period::new(Box::new(round), params);

    let key = SigningKey::random(&mut rand::thread_rng());

    period.begin_block(Header::new(1)).unwrap();
    assert!(period.deliver_tx(signed_vote(&key, "yes")).unwrap());
    assert!(!period.deliver_tx(signed_vote(&key, "no")).unwrap());
    period.end_block().unwrap();
    period.commit().unwrap();

    assert_eq!(period.length(), 1);
    assert!(!period.is_finished());
    assert_eq!(period.current_round_id(), Some("r1"));
    assert!(period.round_results().is_empty());
}

/// Scenario 2: round succession. The round's `end_block` yields a
/// result and installs a successor round.
#[test]
fn round_succession_installs_the_next_round_and_records_the_result() {
    let params = ConsensusParams::new(1);
    let round_two = TallyRound::new("round_two", params, 1, "R2", None);
    let round_one = TallyRound::new("round_one", params, 1, "R1", Some(Box::new(round_two)));
    let mut period = Period::new(Box::new(round_one), params);

    let key = SigningKey::random(&mut rand::thread_rng());

    period.begin_block(Header::new(1)).unwrap();
    period.deliver_tx(signed_vote(&key, "yes")).unwrap();
    period.end_block().unwrap();
    period.commit().unwrap();

    assert!(!period.is_finished());
    assert_eq!(period.previous_rounds().len(), 1);
    assert_eq!(period.previous_rounds()[0].round_id(), "round_one");
    assert_eq!(period.round_results().len(), 1);
    assert_eq!(period.current_round_id(), Some("round_two"));
}

/// Scenario 3: period termination. After succession, the new round
/// terminates with no successor; the period is finished and a further
/// `begin_block` fails.
#[test]
fn period_terminates_when_a_round_yields_no_successor() {
    let params = ConsensusParams::new(1);
    let round_two = TallyRound::new("round_two", params, 1, "R2", None);
    let round_one = TallyRound::new("round_one", params, 1, "R1", Some(Box::new(round_two)));
    let mut period = Period::new(Box::new(round_one), params);

    let key = SigningKey::random(&mut rand::thread_rng());

    period.begin_block(Header::new(1)).unwrap();
    period.deliver_tx(signed_vote(&key, "yes")).unwrap();
    period.end_block().unwrap();
    period.commit().unwrap();
    assert!(!period.is_finished());

    period.begin_block(Header::new(2)).unwrap();
    period.deliver_tx(signed_vote(&key, "yes")).unwrap();
    period.end_block().unwrap();
    period.commit().unwrap();

    assert!(period.is_finished());

    let err = period.begin_block(Header::new(3)).unwrap_err();
    assert!(matches!(err, PeriodError::PeriodFinished));
}

/// Scenario 4: height violation. Committing a block whose header
/// height doesn't follow the chain fails with `AddBlockError`.
#[test]
fn height_violation_fails_commit_with_the_expected_and_actual_height() {
    let params = ConsensusParams::new(1);
    let round = TallyRound::new("r1", params, 100, "unused", None);
    let mut period = Period::new(Box::new(round), params);

    period.begin_block(Header::new(1)).unwrap();
    period.end_block().unwrap();
    period.commit().unwrap();
    assert_eq!(period.height(), 2);

    period.begin_block(Header::new(3)).unwrap();
    period.end_block().unwrap();
    let err = period.commit().unwrap_err();
    match err {
        PeriodError::AddBlock(abci_chain::ChainError::AddBlockError { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("expected AddBlock(AddBlockError), got {other:?}"),
    }
}

/// Scenario 5: signature round-trip. A transaction signed by the
/// payload's declared sender verifies; encode/decode is lossless;
/// tampering with the signature breaks verification.
#[test]
fn signature_round_trip_and_tamper_detection() {
    let key = SigningKey::random(&mut rand::thread_rng());
    let tx = signed_vote(&key, "yes");
    let ledger = Secp256k1Ledger::new();

    assert!(tx.verify(&ledger, "secp256k1").is_ok());

    let bytes = tx.encode();
    let decoded = Transaction::decode(&bytes).unwrap();
    assert_eq!(tx, decoded);
    assert!(decoded.verify(&ledger, "secp256k1").is_ok());

    let mut tampered_signature = tx.signature().to_string();
    let last = tampered_signature.len() - 1;
    let flipped = if tampered_signature.as_bytes()[last] == b'0' { '1' } else { '0' };
    tampered_signature.replace_range(last.., &flipped.to_string());

    let tampered_payload = Payload::new(tx.payload().sender(), Box::new(CastVote { choice: "yes".to_string() })).unwrap();
    let tampered = Transaction::new(tampered_payload, tampered_signature);

    assert_eq!(tampered.verify(&ledger, "secp256k1").unwrap_err(), TxError::InvalidSignature);
}

/// Scenario 6: the supermajority table.
#[test]
fn supermajority_threshold_table() {
    let expected = [0u64, 1, 2, 2, 3, 4, 4, 5];
    for (n, &want) in expected.iter().enumerate() {
        assert_eq!(ConsensusParams::new(n as u64).two_thirds_threshold(), want, "n = {n}");
    }
}

#[test]
fn phase_mismatch_carries_the_entry_point_and_both_phases() {
    let params = ConsensusParams::new(1);
    let round = TallyRound::new("r1", params, 1, "unused", None);
    let mut period = Period::new(Box::new(round), params);

    let err = period.end_block().unwrap_err();
    match err {
        PeriodError::PhaseMismatch { entry_point, expected, actual } => {
            assert_eq!(entry_point, "end_block");
            assert_eq!(expected, BlockConstructionPhase::WaitingForDeliverTx);
            assert_eq!(actual, BlockConstructionPhase::WaitingForBeginBlock);
        }
        other => panic!("expected PhaseMismatch, got {other:?}"),
    }
}
