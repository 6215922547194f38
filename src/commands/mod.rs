pub mod derive;
pub mod keygen;
pub mod sign;

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::PathBuf};

/// Pretty JSON to `out` (parent dirs created) or stdout.
pub fn emit<T: Serialize + ?Sized>(records: &T, out: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    if let Some(p) = out {
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&p, json).with_context(|| format!("writing {}", p.display()))?;
        println!("✓ Wrote {}", p.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_writes_file_and_creates_parents() {
        let dir = std::env::temp_dir().join(format!("schnorr-keypair-emit-{}", std::process::id()));
        let path = dir.join("nested").join("keys.json");
        emit(&vec!["a", "b"], Some(path.clone())).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let back: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, vec!["a", "b"]);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn emit_reports_unusable_parent() {
        let dir = std::env::temp_dir().join(format!("schnorr-keypair-blocked-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();

        let err = emit(&vec!["a"], Some(blocker.join("keys.json"))).unwrap_err();
        assert!(err.to_string().starts_with("creating "), "{err}");
        fs::remove_dir_all(dir).ok();
    }
}
