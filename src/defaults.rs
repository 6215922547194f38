//! Central place for all CLI default values.
//! Update these and the whole app picks them up.

pub struct Defaults;

impl Defaults {
    /* Keygen */
    pub const KEYGEN_COUNT: u32 = 1;

    /* Bech32 human-readable parts (NIP-19) */
    pub const NSEC_HRP: &'static str = "nsec";
    pub const NPUB_HRP: &'static str = "npub";

    /* Logging, overridden by RUST_LOG */
    pub const LOG_FILTER: &'static str = "warn";
}
