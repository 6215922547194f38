use anyhow::{anyhow, Context, Result};
use bech32::{decode, encode, FromBase32, ToBase32, Variant};
use schnorr_keypair::{PublicKey, SerializedPrivateKey};

use crate::defaults::Defaults;

pub fn nsec_from_private_key(sk: &SerializedPrivateKey) -> Result<String> {
    encode(Defaults::NSEC_HRP, sk.as_bytes().to_base32(), Variant::Bech32).context("nsec encode")
}

pub fn npub_from_public_key(pk: &PublicKey) -> Result<String> {
    encode(Defaults::NPUB_HRP, pk.as_bytes().to_base32(), Variant::Bech32).context("npub encode")
}

/// Decode an `nsec1…` string into the raw 32-byte secret.
pub fn sk32_from_nsec(s: &str) -> Result<[u8; 32]> {
    let (hrp, data, variant) = decode(s).context("nsec: bech32 decode failed")?;
    if variant != Variant::Bech32 {
        return Err(anyhow!("nsec: invalid bech32 variant"));
    }
    if hrp.to_ascii_lowercase() != Defaults::NSEC_HRP {
        return Err(anyhow!("nsec: invalid human-readable part '{hrp}'"));
    }
    let bytes = Vec::<u8>::from_base32(&data).context("nsec: invalid bech32 payload")?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("nsec: payload must be exactly 32 bytes (got {})", bytes.len()))
}
