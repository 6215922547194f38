use std::fmt::{Debug, Display};

use crate::error::Error;

pub const PUBLIC_KEY_SIZE: usize = 32;

/// Parity of the y coordinate behind an x-only public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn is_odd(self) -> bool {
        self == Parity::Odd
    }
}

impl TryFrom<i32> for Parity {
    type Error = Error;

    fn try_from(parity: i32) -> Result<Self, Self::Error> {
        match parity {
            0 => Ok(Parity::Even),
            1 => Ok(Parity::Odd),
            other => Err(Error::InvalidParity(other)),
        }
    }
}

impl From<Parity> for bool {
    fn from(parity: Parity) -> bool {
        parity.is_odd()
    }
}

/// BIP-340 x-only public key, together with the parity of the full point it came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    raw: [u8; PUBLIC_KEY_SIZE],
    parity: Parity,
}

impl PublicKey {
    pub(crate) fn new(raw: [u8; PUBLIC_KEY_SIZE], parity: Parity) -> Self {
        Self { raw, parity }
    }

    pub fn serialize(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.raw
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.raw
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.raw))
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({}, {:?})", hex::encode(self.raw), self.parity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_from_engine_integer() {
        assert_eq!(Parity::try_from(0).unwrap(), Parity::Even);
        assert_eq!(Parity::try_from(1).unwrap(), Parity::Odd);
        assert!(!bool::from(Parity::Even));
        assert!(bool::from(Parity::Odd));
    }

    #[test]
    fn parity_out_of_range_is_fatal() {
        assert!(matches!(Parity::try_from(42), Err(Error::InvalidParity(42))));
        assert!(matches!(Parity::try_from(-1), Err(Error::InvalidParity(-1))));
    }

    #[test]
    fn display_is_lowercase_hex() {
        let key = PublicKey::new([0xAB; 32], Parity::Even);
        assert_eq!(key.to_string(), "ab".repeat(32));
        assert_eq!(key.as_ref().len(), PUBLIC_KEY_SIZE);
    }
}
