//! Digest command: compute a file digest.

use anyhow::Result;
use mcv_core::digest::{self, HashAlgorithm};
use std::path::Path;

/// Compute and print the digest of the given file, `sha256sum`-style.
pub fn run_digest(path: &Path, algorithm: &str) -> Result<()> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    let digest = digest::digest_file(path, algorithm)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
