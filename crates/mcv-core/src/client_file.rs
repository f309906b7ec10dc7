//! Input descriptor for one downloaded archive.

use semver::VersionReq;

/// Identifies one archive to verify: where it lives on the mirror and which
/// client/version it was selected for. Supplied by the caller; never mutated.
#[derive(Debug, Clone)]
pub struct ClientFile {
    /// Client (tool) name, e.g. "oc" or "kamel".
    pub client_name: String,
    /// Version range the archive was selected from.
    pub version_range: VersionReq,
    /// Archive filename as it appears in the mirror directory listing.
    pub archive_filename: String,
    /// Full URL the archive was downloaded from.
    pub archive_url: String,
    /// URL of the mirror directory containing the archive.
    pub directory_url: String,
}
