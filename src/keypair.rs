use std::fmt::{Debug, Display};
use std::sync::atomic::{compiler_fence, Ordering};

use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::engine::{CurveEngine, RawKeyPair, Secp256k1, KEYPAIR_SIZE, SECRET_SIZE};
use crate::error::{Error, Result};
use crate::public_key::{Parity, PublicKey};
use crate::random::{fill_exact, RandomnessSource};
use crate::signature::Signature;

pub const SERIALIZED_PRIVATE_KEY_SIZE: usize = SECRET_SIZE;

/// Storage form of a key pair: the 32-byte big-endian secret scalar.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SerializedPrivateKey([u8; SERIALIZED_PRIVATE_KEY_SIZE]);

impl SerializedPrivateKey {
    pub fn new(raw: [u8; SERIALIZED_PRIVATE_KEY_SIZE]) -> Self {
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8; SERIALIZED_PRIVATE_KEY_SIZE] {
        &self.0
    }
}

impl PartialEq for SerializedPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for SerializedPrivateKey {}

impl From<[u8; SERIALIZED_PRIVATE_KEY_SIZE]> for SerializedPrivateKey {
    fn from(raw: [u8; SERIALIZED_PRIVATE_KEY_SIZE]) -> Self {
        Self(raw)
    }
}

impl AsRef<[u8]> for SerializedPrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for SerializedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for SerializedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SerializedPrivateKey(..)")
    }
}

/// A secp256k1 private key together with its cached public point, usable for
/// BIP-340 Schnorr signatures.
///
/// A key pair is either valid (its secret is in `1..n`) or entirely zeroed.
/// The zeroed state is what [`Default`] gives you and is refused by every
/// operation that needs the secret. Secret material is wiped on drop.
/// Equality runs in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    data: RawKeyPair,
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for KeyPair {}

impl Default for KeyPair {
    fn default() -> Self {
        Self {
            data: [0u8; KEYPAIR_SIZE],
        }
    }
}

impl KeyPair {
    /// Key pair from a serialized private key. Will verify it's a valid private
    /// key (group order > key > 0).
    pub fn deserialize(key: &SerializedPrivateKey) -> Result<Self> {
        Self::from_bytes(key.as_bytes())
    }

    pub fn from_bytes(secret: &[u8; SECRET_SIZE]) -> Result<Self> {
        Self::from_bytes_with(&Secp256k1, secret)
    }

    pub fn from_bytes_with<E: CurveEngine>(engine: &E, secret: &[u8; SECRET_SIZE]) -> Result<Self> {
        let data = engine.keypair_create(secret).ok_or(Error::InvalidKey)?;
        Ok(Self { data })
    }

    /// Key pair from a private key slice, which must be exactly 32 bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let secret: &[u8; SECRET_SIZE] = data.try_into().map_err(|_| Error::Format {
            got: data.len(),
            expected: SECRET_SIZE,
        })?;
        Self::from_bytes(secret)
    }

    /// Random key pair from the operating system's CSPRNG.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&Secp256k1, &mut OsRng)
    }

    /// Draws candidates from `rng` until one is a valid secret.
    ///
    /// A uniform 32-byte candidate is rejected only when it is zero or not
    /// below the group order, which happens with probability below 2^-127, so
    /// the loop ends after the first draw in practice. Randomness failures
    /// are returned immediately and never retried.
    pub fn generate_with<E, R>(engine: &E, rng: &mut R) -> Result<Self>
    where
        E: CurveEngine,
        R: RandomnessSource + ?Sized,
    {
        let mut candidate = [0u8; SECRET_SIZE];
        loop {
            if let Err(err) = fill_exact(rng, &mut candidate) {
                candidate.zeroize();
                return Err(err);
            }
            let result = Self::from_bytes_with(engine, &candidate);
            candidate.zeroize();
            match result {
                Ok(key) => {
                    log::debug!("generated new key pair");
                    return Ok(key);
                }
                Err(Error::InvalidKey) => {
                    log::warn!("random candidate is not a valid private key, drawing again");
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// The private key in the key pair. Does not validate: a zeroed key pair
    /// serializes to 32 zero bytes.
    pub fn serialize_private_key(&self) -> SerializedPrivateKey {
        let mut raw = [0u8; SECRET_SIZE];
        raw.copy_from_slice(&self.data[..SECRET_SIZE]);
        SerializedPrivateKey(raw)
    }

    /// Adds `tweak` to the private key in place: `key + tweak % group order`,
    /// after negating the key if its public key has odd y. Meant for
    /// deriving child keys (BIP-32 style).
    ///
    /// On failure the key pair is left as it was.
    pub fn add_tweak(&mut self, tweak: &[u8; 32]) -> Result<()> {
        self.add_tweak_with(&Secp256k1, tweak)
    }

    pub fn add_tweak_with<E: CurveEngine>(&mut self, engine: &E, tweak: &[u8; 32]) -> Result<()> {
        if self.is_zeroed() {
            return Err(Error::ZeroedKey);
        }
        let tweaked = engine
            .keypair_xonly_tweak_add(&self.data, tweak)
            .ok_or(Error::TweakOverflow)?;
        self.data.zeroize();
        self.data = tweaked;
        log::trace!("applied tweak to key pair");
        Ok(())
    }

    /// X-only public key for this key pair, carrying the parity of the full point.
    pub fn public_key(&self) -> Result<PublicKey> {
        self.public_key_with(&Secp256k1)
    }

    pub fn public_key_with<E: CurveEngine>(&self, engine: &E) -> Result<PublicKey> {
        if self.is_zeroed() {
            return Err(Error::ZeroedKey);
        }
        let (raw, parity) = engine.keypair_xonly_pub(&self.data).ok_or(Error::Curve)?;
        Ok(PublicKey::new(raw, Parity::try_from(parity)?))
    }

    /// Schnorr signature over `hash` with fresh auxiliary randomness from the
    /// OS CSPRNG.
    ///
    /// `hash` *must* be the hash of a message; no hashing happens here.
    pub fn sign(&self, hash: &[u8; 32]) -> Result<Signature> {
        self.sign_with(&Secp256k1, &mut OsRng, hash)
    }

    /// Like [`KeyPair::sign`], drawing the 32 auxiliary bytes from `rng`.
    /// The bytes are used for this one signature and then wiped.
    pub fn sign_with<E, R>(&self, engine: &E, rng: &mut R, hash: &[u8; 32]) -> Result<Signature>
    where
        E: CurveEngine,
        R: RandomnessSource + ?Sized,
    {
        if self.is_zeroed() {
            return Err(Error::ZeroedKey);
        }
        let mut aux_rand = [0u8; 32];
        let result = fill_exact(rng, &mut aux_rand).and_then(|()| {
            engine
                .schnorrsig_sign(hash, &self.data, &aux_rand)
                .map(Signature::from)
                .ok_or(Error::Sign)
        });
        aux_rand.zeroize();
        result
    }

    /// True when the secret and both halves of the cached public point are all
    /// zero, i.e. the key pair never came out of the engine.
    pub fn is_zeroed(&self) -> bool {
        self.data.chunks_exact(32).all(is_all_zero)
    }
}

fn is_all_zero(segment: &[u8]) -> bool {
    segment.iter().all(|b| *b == 0)
}

/// Byte comparison whose timing does not depend on where the inputs differ.
#[inline(never)]
fn ct_eq<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    let mut diff = 0u8;
    for i in 0..N {
        diff |= a[i] ^ b[i];
    }
    compiler_fence(Ordering::SeqCst);
    std::hint::black_box(diff) == 0
}

impl Display for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.serialize_private_key(), f)
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zeroed() {
            write!(f, "KeyPair(zeroed)")
        } else {
            write!(f, "KeyPair(..)")
        }
    }
}
