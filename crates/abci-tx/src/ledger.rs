use shared_types::Address;
use std::collections::HashSet;

/// Outbound port to the signing/ledger subsystem. The core only ever
/// needs to ask "who signed this", never to sign or hold keys itself.
pub trait LedgerClient: std::fmt::Debug + Send + Sync {
    /// Recover the set of addresses whose signature over `message` under
    /// `ledger_id` would produce `signature`. A signature is treated as
    /// valid iff the sender is a member of this set — plural because a
    /// ledger abstraction may, in general, support schemes where more
    /// than one address is consistent with a signature.
    fn recover_message(&self, ledger_id: &str, message: &[u8], signature: &str) -> HashSet<Address>;
}

/// secp256k1/Keccak ledger, the scheme the reference test suite signs
/// with. Signatures are hex-encoded `r(32) || s(32) || v(1)`, addresses
/// are the lower 20 bytes of `keccak256(uncompressed_pubkey[1..])`
/// hex-encoded with a `0x` prefix.
#[derive(Debug, Default)]
pub struct Secp256k1Ledger;

const LEDGER_ID: &str = "secp256k1";

impl Secp256k1Ledger {
    pub fn new() -> Self {
        Self
    }

    fn recover_one(message: &[u8], signature: &str) -> Option<Address> {
        use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
        use sha3::{Digest, Keccak256};

        let sig_bytes = hex::decode(signature.trim_start_matches("0x")).ok()?;
        if sig_bytes.len() != 65 {
            return None;
        }
        let signature = Signature::from_slice(&sig_bytes[..64]).ok()?;
        let recovery_id = RecoveryId::try_from(sig_bytes[64]).ok()?;

        let mut hasher = Keccak256::new();
        hasher.update(message);
        let message_hash = hasher.finalize();

        let recovered = VerifyingKey::recover_from_prehash(&message_hash, &signature, recovery_id).ok()?;
        let encoded = recovered.to_encoded_point(false);

        let mut hasher = Keccak256::new();
        hasher.update(&encoded.as_bytes()[1..]);
        let pubkey_hash = hasher.finalize();

        Some(format!("0x{}", hex::encode(&pubkey_hash[12..])))
    }
}

impl LedgerClient for Secp256k1Ledger {
    fn recover_message(&self, ledger_id: &str, message: &[u8], signature: &str) -> HashSet<Address> {
        if ledger_id != LEDGER_ID {
            return HashSet::new();
        }
        Self::recover_one(message, signature).into_iter().collect()
    }
}
