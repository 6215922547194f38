use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::commands::derive::load_key_pair;
use crate::util::{bytes32_from_hex, sha256};

#[derive(Debug, Serialize)]
pub struct SignatureRecord {
    pub public_key_xonly: String,
    pub parity: &'static str,
    pub hash: String,      // the 32 bytes actually signed
    pub signature: String, // 64-byte BIP-340 signature hex
}

pub fn sign(input: &str, hash_hex: Option<&str>, message: Option<&str>) -> Result<SignatureRecord> {
    let hash = match (hash_hex, message) {
        (Some(h), None) => bytes32_from_hex(h, "hash")?,
        (None, Some(m)) => sha256(m.as_bytes()),
        _ => return Err(anyhow!("exactly one of --hash or --message is required")),
    };

    let key = load_key_pair(input)?;
    let pk = key.public_key().context("deriving public key")?;
    let sig = key.sign(&hash).context("signing hash")?;

    Ok(SignatureRecord {
        public_key_xonly: pk.to_string(),
        parity: if pk.parity().is_odd() { "odd" } else { "even" },
        hash: hex::encode(hash),
        signature: sig.to_string(),
    })
}
