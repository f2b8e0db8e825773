use crate::registry::PayloadRegistry;
use crate::PayloadDecodeError;
use shared_types::{Address, Map, Value};

/// A concrete payload schema: a closed type carrying a fixed tag and a
/// fixed set of schema-specific fields. `fields()` must return exactly
/// the data needed to reconstruct an equal instance via the registered
/// constructor — i.e. `Schema(sender, fields())` must equal the
/// original payload.
pub trait PayloadData: std::fmt::Debug + Send + Sync {
    /// The tag this schema is registered under. Stable per schema.
    fn transaction_type(&self) -> &'static str;

    /// The schema-specific fields, excluding `sender`/`transaction_type`.
    fn fields(&self) -> Map;

    /// Clones the schema behind its trait object. Implementations are
    /// always `Box::new(self.clone())` — the boilerplate a `dyn Clone`
    /// needs since `Clone` isn't itself object-safe.
    fn clone_box(&self) -> Box<dyn PayloadData>;
}

impl Clone for Box<dyn PayloadData> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A polymorphic, signature-verified transaction payload: a `sender`
/// plus schema-specific fields, carried behind a [`PayloadData`] trait
/// object so the core need not know about concrete application schemas.
#[derive(Debug, Clone)]
pub struct Payload {
    sender: Address,
    body: Box<dyn PayloadData>,
}

impl Payload {
    /// Build a payload. Fails if `sender` is empty.
    pub fn new(sender: impl Into<Address>, body: Box<dyn PayloadData>) -> Result<Self, crate::PayloadError> {
        let sender = sender.into();
        if sender.is_empty() {
            return Err(crate::PayloadError::EmptySender);
        }
        Ok(Self { sender, body })
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn transaction_type(&self) -> &'static str {
        self.body.transaction_type()
    }

    pub fn body(&self) -> &dyn PayloadData {
        self.body.as_ref()
    }

    /// The schema-specific fields such that
    /// `Schema(sender, **p.data) == p` holds.
    pub fn data(&self) -> Map {
        self.body.fields()
    }

    /// `{"transaction_type": tag, "sender": sender, ...fields}`.
    pub fn json_form(&self) -> Map {
        let mut map = Map::new();
        map.insert(
            "transaction_type".to_string(),
            Value::Str(self.transaction_type().to_string()),
        );
        map.insert("sender".to_string(), Value::Str(self.sender.clone()));
        for (key, value) in self.data() {
            map.insert(key, value);
        }
        map
    }

    /// `encode() == Serialiser::encode(json_form())`.
    pub fn encode(&self) -> Vec<u8> {
        abci_serializer::encode(&self.json_form())
    }

    /// Reads the wire map, extracts the tag, consults the process-wide
    /// registry, and reconstructs the concrete schema from the
    /// remaining fields.
    pub fn decode(bytes: &[u8]) -> Result<Self, PayloadDecodeError> {
        let map = abci_serializer::decode(bytes)?;
        Self::from_json(map)
    }

    /// Like [`Self::decode`] but from an already-decoded wire map.
    pub fn from_json(mut map: Map) -> Result<Self, PayloadDecodeError> {
        let tag_value = map
            .remove("transaction_type")
            .ok_or(PayloadDecodeError::MissingKey("transaction_type"))?;
        let tag = tag_value
            .as_str()
            .ok_or(PayloadDecodeError::InvalidKeyType("transaction_type"))?
            .to_string();

        let sender_value = map
            .remove("sender")
            .ok_or(PayloadDecodeError::MissingKey("sender"))?;
        let sender = sender_value
            .as_str()
            .ok_or(PayloadDecodeError::InvalidKeyType("sender"))?
            .to_string();

        let ctor = PayloadRegistry::lookup(&tag)?;
        let body = ctor(sender.clone(), map)?;
        Ok(Self { sender, body })
    }
}

impl PartialEq for Payload {
    /// Structural equality over `(sender, data)` — the concrete schema
    /// type doesn't need to implement `PartialEq` itself, since the tag
    /// plus field map already pin down the schema's shape.
    fn eq(&self, other: &Self) -> bool {
        self.sender == other.sender
            && self.transaction_type() == other.transaction_type()
            && self.data() == other.data()
    }
}

impl Eq for Payload {}
