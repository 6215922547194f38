//! Boundary to the elliptic-curve library.
//!
//! The key pair is kept as an opaque [`RawKeyPair`] whose layout belongs to the
//! engine that produced it. [`Secp256k1`] lays it out as
//! `secret (32) || public x (32) || public y (32)`, all big-endian.

use std::ops::Deref;

use secp256k1::{Keypair, Message, PublicKey, Scalar, SECP256K1};
use zeroize::Zeroize;

pub const SECRET_SIZE: usize = 32;
pub const KEYPAIR_SIZE: usize = 96;

pub type RawKeyPair = [u8; KEYPAIR_SIZE];

/// The four curve primitives the key pair is built on. `None` means the engine
/// rejected the input.
pub trait CurveEngine {
    /// Build a key pair from a secret. Rejects zero and anything not below the group order.
    fn keypair_create(&self, secret: &[u8; SECRET_SIZE]) -> Option<RawKeyPair>;

    /// Add `tweak` to the secret, negating it first if the x-only public key has odd y.
    fn keypair_xonly_tweak_add(&self, keypair: &RawKeyPair, tweak: &[u8; 32]) -> Option<RawKeyPair>;

    /// X-only public key and the parity of its y coordinate (0 even, 1 odd).
    fn keypair_xonly_pub(&self, keypair: &RawKeyPair) -> Option<([u8; 32], i32)>;

    /// BIP-340 signature over a 32-byte digest.
    fn schnorrsig_sign(
        &self,
        hash: &[u8; 32],
        keypair: &RawKeyPair,
        aux_rand: &[u8; 32],
    ) -> Option<[u8; 64]>;
}

/// Library key pair that is erased when it goes out of scope.
struct Scrubbed(Keypair);

impl Scrubbed {
    fn scrub(&mut self) {
        self.0.non_secure_erase();
    }
}

impl Deref for Scrubbed {
    type Target = Keypair;

    fn deref(&self) -> &Keypair {
        &self.0
    }
}

impl Drop for Scrubbed {
    fn drop(&mut self) {
        self.scrub();
    }
}

/// libsecp256k1 through the `secp256k1` crate, on the process-wide context.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1;

impl Secp256k1 {
    fn to_raw(keypair: &Keypair) -> RawKeyPair {
        let mut raw = [0u8; KEYPAIR_SIZE];
        let mut secret = keypair.secret_bytes();
        raw[..SECRET_SIZE].copy_from_slice(&secret);
        secret.zeroize();
        // drop the 0x04 prefix
        raw[SECRET_SIZE..].copy_from_slice(&keypair.public_key().serialize_uncompressed()[1..]);
        raw
    }

    /// Rebuild the library key pair and check it against the cached public point.
    fn from_raw(raw: &RawKeyPair) -> Option<Scrubbed> {
        let keypair = Scrubbed(Keypair::from_seckey_slice(SECP256K1, &raw[..SECRET_SIZE]).ok()?);
        let public = keypair.public_key().serialize_uncompressed();
        if public[1..] != raw[SECRET_SIZE..] {
            log::debug!("cached public point does not match the secret");
            return None;
        }
        Some(keypair)
    }

    fn public_from_raw(raw: &RawKeyPair) -> Option<PublicKey> {
        let mut uncompressed = [0u8; 65];
        uncompressed[0] = 0x04;
        uncompressed[1..].copy_from_slice(&raw[SECRET_SIZE..]);
        PublicKey::from_slice(&uncompressed).ok()
    }
}

impl CurveEngine for Secp256k1 {
    fn keypair_create(&self, secret: &[u8; SECRET_SIZE]) -> Option<RawKeyPair> {
        let keypair = Scrubbed(Keypair::from_seckey_slice(SECP256K1, secret).ok()?);
        Some(Self::to_raw(&keypair))
    }

    fn keypair_xonly_tweak_add(&self, keypair: &RawKeyPair, tweak: &[u8; 32]) -> Option<RawKeyPair> {
        let keypair = Self::from_raw(keypair)?;
        let tweak = Scalar::from_be_bytes(*tweak).ok()?;
        let tweaked = Scrubbed(keypair.0.add_xonly_tweak(SECP256K1, &tweak).ok()?);
        Some(Self::to_raw(&tweaked))
    }

    fn keypair_xonly_pub(&self, keypair: &RawKeyPair) -> Option<([u8; 32], i32)> {
        let (xonly, parity) = Self::public_from_raw(keypair)?.x_only_public_key();
        Some((xonly.serialize(), parity.to_i32()))
    }

    fn schnorrsig_sign(
        &self,
        hash: &[u8; 32],
        keypair: &RawKeyPair,
        aux_rand: &[u8; 32],
    ) -> Option<[u8; 64]> {
        let keypair = Self::from_raw(keypair)?;
        let msg = Message::from_digest(*hash);
        let sig = SECP256K1.sign_schnorr_with_aux_rand(&msg, &keypair, aux_rand);
        Some(sig.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(last: u8) -> [u8; 32] {
        let mut s = [0u8; 32];
        s[31] = last;
        s
    }

    #[test]
    fn create_lays_out_secret_then_point() {
        let raw = Secp256k1.keypair_create(&secret(1)).unwrap();
        assert_eq!(raw[..32], secret(1));
        assert_eq!(
            hex::encode(&raw[32..64]),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(
            hex::encode(&raw[64..]),
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
    }

    #[test]
    fn create_rejects_zero() {
        assert!(Secp256k1.keypair_create(&[0u8; 32]).is_none());
    }

    #[test]
    fn corrupted_point_is_rejected() {
        let mut raw = Secp256k1.keypair_create(&secret(5)).unwrap();
        raw[40] ^= 0x01;
        assert!(Secp256k1.keypair_xonly_pub(&raw).is_none());
        assert!(Secp256k1.schnorrsig_sign(&[0u8; 32], &raw, &[0u8; 32]).is_none());
        assert!(Secp256k1.keypair_xonly_tweak_add(&raw, &secret(1)).is_none());
    }

    #[test]
    fn scrub_erases_the_secret() {
        let secret = [0x42u8; 32];
        let mut keypair = Scrubbed(Keypair::from_seckey_slice(SECP256K1, &secret).unwrap());
        assert_eq!(keypair.secret_bytes(), secret);
        keypair.scrub();
        assert_ne!(keypair.secret_bytes(), secret);
    }

    #[test]
    fn parity_is_zero_or_one() {
        let even = Secp256k1.keypair_create(&secret(1)).unwrap();
        let odd = Secp256k1.keypair_create(&secret(6)).unwrap();
        assert_eq!(Secp256k1.keypair_xonly_pub(&even).unwrap().1, 0);
        assert_eq!(Secp256k1.keypair_xonly_pub(&odd).unwrap().1, 1);
    }
}
