use std::fmt::{Debug, Display};

use crate::error::Error;

pub const SIGNATURE_SIZE: usize = 64;

/// BIP-340 Schnorr signature: nonce point x coordinate followed by the scalar.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    pub fn serialize(&self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }
}

impl From<[u8; SIGNATURE_SIZE]> for Signature {
    fn from(raw: [u8; SIGNATURE_SIZE]) -> Self {
        Self(raw)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; SIGNATURE_SIZE] = data.try_into().map_err(|_| Error::Format {
            got: data.len(),
            expected: SIGNATURE_SIZE,
        })?;
        Ok(Self(raw))
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_length_is_checked() {
        for len in [0usize, 32, 63, 65] {
            let data = vec![7u8; len];
            assert!(matches!(
                Signature::try_from(data.as_slice()),
                Err(Error::Format { got, expected: SIGNATURE_SIZE }) if got == len
            ));
        }
        let sig = Signature::try_from([7u8; 64].as_slice()).unwrap();
        assert_eq!(sig.serialize(), [7u8; 64]);
    }

    #[test]
    fn display_is_lowercase_hex() {
        let mut raw = [0u8; 64];
        raw[0] = 0xD2;
        raw[63] = 0x3E;
        let sig = Signature::from(raw);
        let text = sig.to_string();
        assert_eq!(text.len(), 128);
        assert!(text.starts_with("d2"));
        assert!(text.ends_with("3e"));
    }
}
