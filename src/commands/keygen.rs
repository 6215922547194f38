use anyhow::{Context, Result};
use schnorr_keypair::KeyPair;
use serde::Serialize;

use crate::crypto::nostr_utils::{npub_from_public_key, nsec_from_private_key};

#[derive(Debug, Serialize)]
pub struct KeyRecord {
    pub private_key_hex: String,   // 32-byte hex, no 0x
    pub public_key_xonly: String,  // 32-byte x-only hex
    pub parity: &'static str,      // "even" / "odd" y of the full point

    // Nostr bech32 encodings (NIP-19)
    pub nsec: String,
    pub npub: String,
}

impl KeyRecord {
    pub fn from_key_pair(key: &KeyPair) -> Result<Self> {
        let sk = key.serialize_private_key();
        let pk = key.public_key().context("deriving public key")?;

        Ok(KeyRecord {
            private_key_hex: sk.to_string(),
            public_key_xonly: pk.to_string(),
            parity: if pk.parity().is_odd() { "odd" } else { "even" },
            nsec: nsec_from_private_key(&sk)?,
            npub: npub_from_public_key(&pk)?,
        })
    }
}

pub fn generate(count: u32) -> Result<Vec<KeyRecord>> {
    let mut out: Vec<KeyRecord> = Vec::with_capacity(count as usize);

    for i in 0..count {
        // Fresh key pair from the OS CSPRNG
        let key = KeyPair::generate().with_context(|| format!("generating key pair #{i}"))?;
        out.push(KeyRecord::from_key_pair(&key)?);
    }

    log::info!("generated {} key pair(s)", out.len());
    Ok(out)
}
