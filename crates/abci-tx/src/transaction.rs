use crate::{LedgerClient, TxDecodeError, TxError};
use abci_payload::Payload;
use shared_types::{Map, Value};

/// A signed transaction: a [`Payload`] plus the signature over its
/// canonical byte encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    payload: Payload,
    signature: String,
}

impl Transaction {
    pub fn new(payload: Payload, signature: impl Into<String>) -> Self {
        Self {
            payload,
            signature: signature.into(),
        }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// `{"payload": payload.json_form(), "signature": signature}`.
    pub fn json_form(&self) -> Map {
        let mut map = Map::new();
        map.insert("payload".to_string(), Value::Map(self.payload.json_form()));
        map.insert("signature".to_string(), Value::Str(self.signature.clone()));
        map
    }

    pub fn encode(&self) -> Vec<u8> {
        abci_serializer::encode(&self.json_form())
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, TxDecodeError> {
        let mut map = abci_serializer::decode(bytes)?;

        let payload_value = map.remove("payload").ok_or(TxDecodeError::MissingKey("payload"))?;
        let payload_map = payload_value
            .as_map()
            .ok_or(TxDecodeError::InvalidKeyType("payload"))?
            .clone();
        let payload = Payload::from_json(payload_map)?;

        let signature_value = map.remove("signature").ok_or(TxDecodeError::MissingKey("signature"))?;
        let signature = signature_value
            .as_str()
            .ok_or(TxDecodeError::InvalidKeyType("signature"))?
            .to_string();

        Ok(Self { payload, signature })
    }

    /// Recomputes `payload.encode()`, asks `ledger` to recover the set
    /// of addresses consistent with `signature` over that byte string
    /// under `ledger_id`, and fails unless the payload's sender is a
    /// member of that set.
    pub fn verify(&self, ledger: &dyn LedgerClient, ledger_id: &str) -> Result<(), TxError> {
        let message = self.payload.encode();
        let recovered = ledger.recover_message(ledger_id, &message, &self.signature);
        if recovered.contains(self.payload.sender()) {
            Ok(())
        } else {
            Err(TxError::InvalidSignature)
        }
    }
}
