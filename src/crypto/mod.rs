pub mod nostr_utils;
