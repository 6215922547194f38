//! BIP-340 Schnorr key pairs over secp256k1.
//!
//! [`KeyPair`] validates private keys, derives x-only public keys with their
//! parity, applies additive tweaks for child-key derivation and signs 32-byte
//! message hashes with fresh auxiliary randomness. The curve arithmetic lives
//! behind [`CurveEngine`], implemented by [`Secp256k1`] on libsecp256k1's
//! global context; randomness comes from a [`RandomnessSource`].
//!
//! ```no_run
//! use schnorr_keypair::KeyPair;
//!
//! let mut key = KeyPair::generate()?;
//! key.add_tweak(&[1u8; 32])?;
//! let public = key.public_key()?;
//! let sig = key.sign(&[0u8; 32])?;
//! println!("{public} {sig}");
//! # Ok::<(), schnorr_keypair::Error>(())
//! ```

pub mod engine;
pub mod error;
pub mod keypair;
pub mod public_key;
pub mod random;
pub mod signature;

pub use engine::{CurveEngine, RawKeyPair, Secp256k1};
pub use error::{Error, RandomnessError, Result};
pub use keypair::{KeyPair, SerializedPrivateKey};
pub use public_key::{Parity, PublicKey};
pub use random::RandomnessSource;
pub use signature::Signature;
