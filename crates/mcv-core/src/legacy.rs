//! Known checksum-less distributions.
//!
//! The oc v3 mirror directories were published without any checksum files;
//! their absence is expected and only worth an info-level note. Everything
//! else is supposed to carry one.

use semver::{Op, VersionReq};

/// True when the client/version combination is known to publish no checksum
/// files (oc with a range that resolves within major version 3).
///
/// A range counts as v3 when some comparator pins major 3 (`=`, `^`, `~`, or
/// wildcard) and none pins major 4. Pure bound ranges like ">=3, <4" are not
/// recognized; callers pass pinning ranges.
pub fn is_legacy_checksumless(client_name: &str, version_range: &VersionReq) -> bool {
    client_name == "oc" && pins_major(version_range, 3) && !pins_major(version_range, 4)
}

fn pins_major(req: &VersionReq, major: u64) -> bool {
    req.comparators.iter().any(|c| {
        c.major == major && matches!(c.op, Op::Exact | Op::Tilde | Op::Caret | Op::Wildcard)
    })
}
