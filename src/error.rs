use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid length got {got}, expected {expected}")]
    Format { got: usize, expected: usize },
    #[error("invalid private key (zero or bigger than the group order)")]
    InvalidKey,
    #[error("the key pair is zeroed, which isn't a valid key pair")]
    ZeroedKey,
    #[error("failed adding to private key: tweak is bigger than the order or the complement of the private key")]
    TweakOverflow,
    #[error("randomness source failed: {0}")]
    Randomness(#[from] RandomnessError),
    #[error("the key pair contains invalid data")]
    Curve,
    /// The curve engine reported a parity outside {0, 1}. Never expected; means
    /// the engine and this crate disagree about the key-pair layout.
    #[error("parity should always be 0 or 1, instead got: {0}")]
    InvalidParity(i32),
    #[error("failed signing with a validated key pair")]
    Sign,
}

#[derive(Debug, Error)]
pub enum RandomnessError {
    #[error("short read: got {got} bytes, expected {expected}")]
    ShortRead { got: usize, expected: usize },
    #[error(transparent)]
    Source(#[from] rand_core::Error),
}
