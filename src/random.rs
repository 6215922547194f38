use rand_core::{CryptoRng, RngCore};

use crate::error::{RandomnessError, Result};

/// Source of the secret and auxiliary bytes used by key generation and signing.
///
/// `fill` reports how many bytes it wrote; anything short of `buf.len()` is
/// treated as a failure by the callers in this crate.
pub trait RandomnessSource {
    fn fill(&mut self, buf: &mut [u8]) -> std::result::Result<usize, rand_core::Error>;
}

impl<R: RngCore + CryptoRng> RandomnessSource for R {
    fn fill(&mut self, buf: &mut [u8]) -> std::result::Result<usize, rand_core::Error> {
        self.try_fill_bytes(buf)?;
        Ok(buf.len())
    }
}

/// Fill `buf` completely or fail. Never retries.
pub(crate) fn fill_exact<S: RandomnessSource + ?Sized>(source: &mut S, buf: &mut [u8]) -> Result<()> {
    let got = source.fill(buf).map_err(RandomnessError::from)?;
    if got != buf.len() {
        return Err(RandomnessError::ShortRead { got, expected: buf.len() }.into());
    }
    Ok(())
}
