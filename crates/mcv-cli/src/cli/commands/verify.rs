//! Verify command: full checksum verification of a downloaded archive.

use anyhow::{Context, Result};
use mcv_core::client_file::ClientFile;
use mcv_core::config::McvConfig;
use mcv_core::fetch::FetchOptions;
use mcv_core::verify::{self, VerifyOutcome};
use semver::VersionReq;
use std::path::Path;

/// Assemble a `ClientFile` from the command-line arguments and run the full
/// verification against the mirror.
pub async fn run_verify(
    cfg: &McvConfig,
    path: &Path,
    directory_url: &str,
    filename: Option<&str>,
    archive_url: Option<&str>,
    client: &str,
    version_range: &str,
) -> Result<()> {
    let filename = match filename {
        Some(f) => f.to_string(),
        None => path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .with_context(|| format!("no usable file name in {}", path.display()))?,
    };
    let version_range = VersionReq::parse(version_range)
        .with_context(|| format!("invalid version range \"{}\"", version_range))?;
    let directory_url = directory_url.trim_end_matches('/').to_string();
    let archive_url = match archive_url {
        Some(u) => u.to_string(),
        None => format!("{}/{}", directory_url, filename),
    };

    let client_file = ClientFile {
        client_name: client.to_string(),
        version_range,
        archive_filename: filename,
        archive_url,
        directory_url,
    };

    let opts = FetchOptions::from(cfg);
    match verify::verify(path, &client_file, &opts).await? {
        VerifyOutcome::Verified { algorithm } => {
            println!("{}: OK ({})", path.display(), algorithm);
        }
        VerifyOutcome::Skipped => {
            println!("{}: skipped (no checksum published)", path.display());
        }
    }
    Ok(())
}
