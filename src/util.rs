// src/util.rs
use anyhow::{anyhow, Result};
use sha2::{Digest, Sha256};

use crate::crypto::nostr_utils::sk32_from_nsec;

pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>> {
    let t = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    Ok(hex::decode(t)?)
}

/// Exactly 32 bytes of hex (optionally 0x-prefixed). `what` names the value in errors.
pub fn bytes32_from_hex(s: &str, what: &str) -> Result<[u8; 32]> {
    let bytes = hex_to_bytes(s.trim())?; // keeps hex's own errors like "Odd number of digits"
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("{what} must be exactly 32 bytes (got {})", bytes.len()))
}

/// Private key from either an `nsec1…` string or 32-byte hex.
pub fn privkey_bytes_from_input(input: &str) -> Result<[u8; 32]> {
    let s = input.trim();

    // Try nsec first if it looks like one (case-insensitive match on prefix)
    if s.to_ascii_lowercase().starts_with("nsec1") {
        return sk32_from_nsec(s);
    }
    bytes32_from_hex(s, "hex secret key")
}

/// Message digest handed to the signer when the caller passes raw text.
pub fn sha256(msg: &[u8]) -> [u8; 32] {
    Sha256::digest(msg).into()
}
