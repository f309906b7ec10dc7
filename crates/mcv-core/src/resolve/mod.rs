//! Checksum resolution: decide which manifest convention applies to a
//! directory, fetch the manifest, and extract the expected digest.
//!
//! Two conventions exist on the mirrors: a directory-wide sha256 manifest
//! under a well-known name, and a per-file `<archive>.md5` sidecar. The
//! sha256 manifest wins when both are present.

mod manifest;

pub use manifest::{digest_for_file, ChecksumNotFound};

use anyhow::Result;
use std::collections::HashMap;

use crate::client_file::ClientFile;
use crate::digest::HashAlgorithm;
use crate::fetch::{self, FetchOptions};
use crate::legacy;
use crate::listing;

/// Well-known sha256 manifest filenames, as published by different mirrors.
const SHA256_MANIFEST_NAMES: &[&str] = &["sha256sum.txt", "SHA256_SUM"];

/// Outcome of resolution: the algorithm to hash with, the digest the mirror
/// publishes, and where that digest came from.
#[derive(Debug, Clone)]
pub struct ResolvedChecksum {
    pub algorithm: HashAlgorithm,
    /// Expected digest, lowercase hex as published.
    pub hash: String,
    /// URL of the manifest the digest was extracted from.
    pub hash_file_url: String,
}

/// One manifest naming convention: the algorithm it implies and how to pick
/// its manifest filename out of a directory listing.
struct Convention {
    algorithm: HashAlgorithm,
    select: fn(&ClientFile, &[String]) -> Option<String>,
}

/// Conventions in priority order; the first whose selector matches wins.
const CONVENTIONS: &[Convention] = &[
    Convention {
        algorithm: HashAlgorithm::Sha256,
        select: select_sha256_manifest,
    },
    Convention {
        algorithm: HashAlgorithm::Md5,
        select: select_md5_sidecar,
    },
];

fn select_sha256_manifest(_client_file: &ClientFile, entries: &[String]) -> Option<String> {
    entries
        .iter()
        .find(|e| SHA256_MANIFEST_NAMES.contains(&e.as_str()))
        .cloned()
}

fn select_md5_sidecar(client_file: &ClientFile, entries: &[String]) -> Option<String> {
    let candidate = format!("{}.md5", client_file.archive_filename);
    entries.iter().find(|e| **e == candidate).cloned()
}

/// Resolves the expected checksum for `client_file`.
///
/// Returns `Ok(None)` when the directory publishes no checksum artifact for
/// the archive; absence is never an error here. Known checksum-less
/// distributions only get an info-level note, everything else a warning.
pub fn resolve_checksum(
    client_file: &ClientFile,
    opts: &FetchOptions,
) -> Result<Option<ResolvedChecksum>> {
    let entries = listing::list_directory(&client_file.directory_url, opts)?;

    let selected = CONVENTIONS
        .iter()
        .find_map(|c| (c.select)(client_file, &entries).map(|name| (c.algorithm, name)));

    let Some((algorithm, manifest_filename)) = selected else {
        if legacy::is_legacy_checksumless(&client_file.client_name, &client_file.version_range) {
            tracing::info!(
                "checksum verification is not available for {} {}",
                client_file.client_name,
                client_file.version_range
            );
        } else {
            tracing::warn!(
                "no checksum file found under {} for {}; skipping verification",
                client_file.directory_url,
                client_file.archive_filename
            );
        }
        return Ok(None);
    };

    let hash_file_url = manifest_url(&client_file.directory_url, &manifest_filename);
    tracing::info!("downloading checksum file {}", hash_file_url);

    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), "text/plain".to_string());
    let contents = fetch::fetch_text(&hash_file_url, &headers, opts)?;
    let hash = digest_for_file(&contents, &client_file.archive_filename, &hash_file_url)?;

    Ok(Some(ResolvedChecksum {
        algorithm,
        hash,
        hash_file_url,
    }))
}

/// Joins the directory URL and a manifest filename, tolerating a trailing slash.
fn manifest_url(directory_url: &str, filename: &str) -> String {
    format!("{}/{}", directory_url.trim_end_matches('/'), filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::VersionReq;

    fn client_file(archive: &str) -> ClientFile {
        ClientFile {
            client_name: "kamel".to_string(),
            version_range: VersionReq::parse("1.*").unwrap(),
            archive_filename: archive.to_string(),
            archive_url: format!("https://mirror.example.com/camel-k/1.5.0/{}", archive),
            directory_url: "https://mirror.example.com/camel-k/1.5.0".to_string(),
        }
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sha256_manifest_selected_when_present() {
        let cf = client_file("client.tar.gz");
        let entries = strings(&["client.tar.gz", "sha256sum.txt"]);
        let selected = CONVENTIONS
            .iter()
            .find_map(|c| (c.select)(&cf, &entries).map(|name| (c.algorithm, name)));
        assert_eq!(
            selected,
            Some((HashAlgorithm::Sha256, "sha256sum.txt".to_string()))
        );
    }

    #[test]
    fn sha256_manifest_takes_priority_over_md5_sidecar() {
        let cf = client_file("client.tar.gz");
        let entries = strings(&["client.tar.gz", "client.tar.gz.md5", "SHA256_SUM"]);
        let selected = CONVENTIONS
            .iter()
            .find_map(|c| (c.select)(&cf, &entries).map(|name| (c.algorithm, name)));
        assert_eq!(
            selected,
            Some((HashAlgorithm::Sha256, "SHA256_SUM".to_string()))
        );
    }

    #[test]
    fn md5_sidecar_selected_as_fallback() {
        let cf = client_file("client.tar.gz");
        let entries = strings(&["client.tar.gz", "client.tar.gz.md5", "other.tar.gz.md5"]);
        let selected = CONVENTIONS
            .iter()
            .find_map(|c| (c.select)(&cf, &entries).map(|name| (c.algorithm, name)));
        assert_eq!(
            selected,
            Some((HashAlgorithm::Md5, "client.tar.gz.md5".to_string()))
        );
    }

    #[test]
    fn no_convention_matches() {
        let cf = client_file("client.tar.gz");
        let entries = strings(&["client.tar.gz", "release.txt"]);
        let selected = CONVENTIONS
            .iter()
            .find_map(|c| (c.select)(&cf, &entries).map(|name| (c.algorithm, name)));
        assert_eq!(selected, None);
    }

    #[test]
    fn manifest_url_joins_with_and_without_trailing_slash() {
        assert_eq!(
            manifest_url("https://mirror.example.com/d", "sha256sum.txt"),
            "https://mirror.example.com/d/sha256sum.txt"
        );
        assert_eq!(
            manifest_url("https://mirror.example.com/d/", "sha256sum.txt"),
            "https://mirror.example.com/d/sha256sum.txt"
        );
    }
}
