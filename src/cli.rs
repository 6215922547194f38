use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Offline secp256k1 Schnorr (BIP-340) key tool
#[derive(Parser, Debug)]
#[command(version, about = "Offline secp256k1 Schnorr (BIP-340) key tool")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate random key pairs (hex, x-only pubkey, parity, nsec/npub)
    Keygen {
        /// Number of key pairs to generate
        #[arg(long, default_value_t = crate::defaults::Defaults::KEYGEN_COUNT)]
        count: u32,

        /// Optional path to write JSON output (pretty-printed)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Derive the x-only public key and parity of a private key
    Pubkey {
        #[command(flatten)]
        key: KeyArg,
    },

    /// Add a 32-byte tweak to a private key (x-only tweak, child-key derivation)
    Tweak {
        #[command(flatten)]
        key: KeyArg,

        /// 32-byte tweak as hex; repeat to apply several in order
        #[arg(long, required = true)]
        tweak: Vec<String>,
    },

    /// Schnorr-sign a 32-byte hash (or the SHA-256 of a message)
    Sign {
        #[command(flatten)]
        key: KeyArg,

        /// 32-byte message hash as hex
        #[arg(long, conflicts_with = "message", required_unless_present = "message")]
        hash: Option<String>,

        /// UTF-8 message; signed as SHA-256(message)
        #[arg(long)]
        message: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct KeyArg {
    /// Private key as 32-byte hex (0x optional) or nsec1…
    #[arg(long = "private-key")]
    pub private_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sign_takes_hash_or_message() {
        let key = "01".repeat(32);
        assert!(Cli::try_parse_from(["schnorr-keypair", "sign", "--private-key", key.as_str(), "--hash", "00"]).is_ok());
        assert!(Cli::try_parse_from(["schnorr-keypair", "sign", "--private-key", key.as_str(), "--message", "hi"]).is_ok());
        assert!(Cli::try_parse_from(["schnorr-keypair", "sign", "--private-key", key.as_str()]).is_err());
        assert!(Cli::try_parse_from([
            "schnorr-keypair", "sign", "--private-key", key.as_str(), "--hash", "00", "--message", "hi",
        ])
        .is_err());
    }

    #[test]
    fn tweak_collects_repeated_flags() {
        let key = "01".repeat(32);
        let cli = Cli::try_parse_from([
            "schnorr-keypair", "tweak", "--private-key", key.as_str(), "--tweak", "aa", "--tweak", "bb",
        ])
        .unwrap();
        match cli.cmd {
            Command::Tweak { tweak, .. } => assert_eq!(tweak, vec!["aa", "bb"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn keygen_count_defaults_to_one() {
        let cli = Cli::try_parse_from(["schnorr-keypair", "keygen"]).unwrap();
        match cli.cmd {
            Command::Keygen { count, out } => {
                assert_eq!(count, 1);
                assert!(out.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
