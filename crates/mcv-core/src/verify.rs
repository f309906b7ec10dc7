//! Archive verification against the mirror-published checksum.
//!
//! Resolution, digest computation, and comparison form a straight dependency
//! chain with no branching concurrency; the pipeline is a sequence of plain
//! calls, with an async wrapper for callers on a tokio runtime.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::client_file::ClientFile;
use crate::digest::{self, HashAlgorithm};
use crate::fetch::FetchOptions;
use crate::resolve::{self, ResolvedChecksum};

/// Terminal outcome of a verification that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Local digest matched the manifest record.
    Verified { algorithm: HashAlgorithm },
    /// No checksum artifact is published for the archive; nothing compared.
    Skipped,
}

/// Computed digest differs from the digest the mirror publishes.
#[derive(Debug, Error)]
#[error(
    "{algorithm} hash for {path} downloaded from {archive_url} did not match the hash downloaded from {hash_file_url}\nexpected: \"{expected}\"\nactual: \"{actual}\"",
    path = .archive_path.display()
)]
pub struct HashMismatch {
    pub algorithm: HashAlgorithm,
    pub archive_path: PathBuf,
    pub archive_url: String,
    pub hash_file_url: String,
    pub expected: String,
    pub actual: String,
}

/// Verifies the archive at `archive_path` against the checksum its mirror
/// directory publishes.
///
/// Returns `Skipped` when no checksum artifact exists — a missing manifest
/// never fails the install, since an attacker able to substitute the archive
/// could substitute or omit the manifest as well. Blocking: performs network
/// and file I/O on the calling thread.
pub fn verify_blocking(
    archive_path: &Path,
    client_file: &ClientFile,
    opts: &FetchOptions,
) -> Result<VerifyOutcome> {
    let Some(resolved) = resolve::resolve_checksum(client_file, opts)? else {
        return Ok(VerifyOutcome::Skipped);
    };
    let ResolvedChecksum {
        algorithm,
        hash: expected,
        hash_file_url,
    } = resolved;

    let actual = digest::digest_file(archive_path, algorithm)?;
    tracing::debug!(
        "correct {} for {} is {}",
        algorithm,
        client_file.archive_filename,
        expected
    );
    tracing::debug!(
        "actual {} for {} is {}",
        algorithm,
        client_file.archive_filename,
        actual
    );

    // Exact, case-sensitive comparison; manifests emit lowercase hex.
    if expected != actual {
        return Err(HashMismatch {
            algorithm,
            archive_path: archive_path.to_path_buf(),
            archive_url: client_file.archive_url.clone(),
            hash_file_url,
            expected,
            actual,
        }
        .into());
    }

    tracing::info!(
        "{} verification of {} succeeded",
        algorithm,
        client_file.archive_filename
    );
    Ok(VerifyOutcome::Verified { algorithm })
}

/// Async wrapper: runs the blocking verification pipeline on the runtime's
/// blocking pool. Independent verifications may run concurrently; no state
/// is shared between calls.
pub async fn verify(
    archive_path: &Path,
    client_file: &ClientFile,
    opts: &FetchOptions,
) -> Result<VerifyOutcome> {
    let path = archive_path.to_path_buf();
    let client_file = client_file.clone();
    let opts = *opts;
    tokio::task::spawn_blocking(move || verify_blocking(&path, &client_file, &opts))
        .await
        .context("verify task join")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_mismatch_message_carries_both_digests_and_urls() {
        let err = HashMismatch {
            algorithm: HashAlgorithm::Sha256,
            archive_path: PathBuf::from("/tmp/client.tar.gz"),
            archive_url: "https://mirror.example.com/d/client.tar.gz".to_string(),
            hash_file_url: "https://mirror.example.com/d/sha256sum.txt".to_string(),
            expected: "abc123".to_string(),
            actual: "000000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sha256"));
        assert!(msg.contains("/tmp/client.tar.gz"));
        assert!(msg.contains("https://mirror.example.com/d/client.tar.gz"));
        assert!(msg.contains("https://mirror.example.com/d/sha256sum.txt"));
        assert!(msg.contains("\"abc123\""));
        assert!(msg.contains("\"000000\""));
    }

    #[test]
    fn outcome_reports_algorithm() {
        let outcome = VerifyOutcome::Verified {
            algorithm: HashAlgorithm::Md5,
        };
        assert_ne!(outcome, VerifyOutcome::Skipped);
        match outcome {
            VerifyOutcome::Verified { algorithm } => assert_eq!(algorithm, HashAlgorithm::Md5),
            VerifyOutcome::Skipped => panic!("expected Verified"),
        }
    }
}
