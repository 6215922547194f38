use anyhow::{Context, Result};
use schnorr_keypair::KeyPair;
use serde::Serialize;
use zeroize::Zeroize;

use crate::commands::keygen::KeyRecord;
use crate::util::{bytes32_from_hex, privkey_bytes_from_input};

/// Key pair from CLI input (hex or nsec).
pub fn load_key_pair(input: &str) -> Result<KeyPair> {
    let mut secret = privkey_bytes_from_input(input)?;
    let key = KeyPair::from_bytes(&secret);
    secret.zeroize();
    key.context("invalid secp256k1 secret key (out of range or zero)")
}

pub fn pubkey(input: &str) -> Result<KeyRecord> {
    let key = load_key_pair(input)?;
    KeyRecord::from_key_pair(&key)
}

#[derive(Debug, Serialize)]
pub struct TweakRecord {
    pub tweaks: Vec<String>,
    #[serde(flatten)]
    pub child: KeyRecord,
}

pub fn tweak(input: &str, tweaks: &[String]) -> Result<TweakRecord> {
    let mut key = load_key_pair(input)?;

    let mut applied = Vec::with_capacity(tweaks.len());
    for (i, t) in tweaks.iter().enumerate() {
        let tweak = bytes32_from_hex(t, "tweak")?;
        key.add_tweak(&tweak)
            .with_context(|| format!("applying tweak #{i} ({t})"))?;
        applied.push(hex::encode(tweak));
    }

    Ok(TweakRecord {
        tweaks: applied,
        child: KeyRecord::from_key_pair(&key)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex32(v: u8) -> String {
        format!("{}{:02x}", "00".repeat(31), v)
    }

    #[test]
    fn tweaks_apply_in_order() {
        let record = tweak(&hex32(1), &[hex32(1), hex32(5)]).unwrap();
        assert_eq!(record.child.private_key_hex, hex32(7));
        assert_eq!(record.tweaks, vec![hex32(1), hex32(5)]);
    }

    #[test]
    fn overflowing_tweak_is_an_error() {
        let order = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141".to_string();
        let err = tweak(&hex32(1), &[order]).unwrap_err();
        assert!(err.to_string().starts_with("applying tweak #0"));
    }

    #[test]
    fn zero_secret_is_rejected() {
        assert!(pubkey(&hex32(0)).is_err());
        assert!(pubkey(&hex32(3)).is_ok());
    }
}
