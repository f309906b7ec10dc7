//! Checksum manifest text parsing.
//!
//! Manifest format, one record per line:
//!
//! ```text
//! <hexdigest> <filename>
//! ```
//!
//! split on runs of whitespace; any extra tokens on a line are ignored.

use thiserror::Error;

/// Manifest was fetched but contains no record for the requested filename.
#[derive(Debug, Error)]
#[error("no checksum for \"{filename}\" in manifest {manifest_url}")]
pub struct ChecksumNotFound {
    pub filename: String,
    pub manifest_url: String,
}

/// Extracts the digest for `filename` from manifest text.
///
/// Filename matching is exact and case-sensitive, no path normalization;
/// the first matching record wins. A record holding only a digest (no
/// filename token) is treated as a degenerate single-file record and matches
/// any requested filename — the per-file `.md5` sidecars are sometimes
/// published that way.
pub fn digest_for_file(
    contents: &str,
    filename: &str,
    manifest_url: &str,
) -> Result<String, ChecksumNotFound> {
    for line in contents.lines() {
        let mut tokens = line.split_whitespace();
        let Some(digest) = tokens.next() else {
            continue;
        };
        match tokens.next() {
            Some(name) if name == filename => return Ok(digest.to_string()),
            Some(_) => {}
            None => return Ok(digest.to_string()),
        }
    }
    Err(ChecksumNotFound {
        filename: filename.to_string(),
        manifest_url: manifest_url.to_string(),
    })
}
