//! Streaming file digests.
//!
//! Archives can be large, so files are read in chunks and fed into the hash
//! context incrementally instead of being loaded into memory.

use anyhow::{Context, Result};
use md5::Md5;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

const BUF_SIZE: usize = 64 * 1024;

/// Digest algorithm, one per manifest convention the mirrors publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// Per-file `<archive>.md5` sidecar convention.
    Md5,
    /// Directory-wide sha256 manifest convention.
    Sha256,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha256 => "sha256",
        })
    }
}

impl FromStr for HashAlgorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha256" => Ok(HashAlgorithm::Sha256),
            other => anyhow::bail!(
                "unknown digest algorithm \"{}\" (expected \"md5\" or \"sha256\")",
                other
            ),
        }
    }
}

/// Compute the digest of a file and return it as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large archives.
pub fn digest_file(path: &Path, algorithm: HashAlgorithm) -> Result<String> {
    tracing::debug!("{} hashing {}", algorithm, path.display());
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    match algorithm {
        HashAlgorithm::Md5 => digest_reader::<Md5>(&mut f, path),
        HashAlgorithm::Sha256 => digest_reader::<Sha256>(&mut f, path),
    }
}

fn digest_reader<D: Digest>(reader: &mut impl Read, path: &Path) -> Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = reader
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
