//! Mirror directory listing retrieval.
//!
//! Fetches the index page of a mirror directory and returns the entry
//! filenames present in it. The listing is flat, one level, case-sensitive.

mod parse;

pub use parse::parse_listing;

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::fetch::{self, FetchOptions};

/// Fetches and parses the directory listing at `url`.
pub fn list_directory(url: &str, opts: &FetchOptions) -> Result<Vec<String>> {
    let body = fetch::fetch_text(url, &HashMap::new(), opts)
        .with_context(|| format!("list directory {}", url))?;
    let entries = parse_listing(&body);
    tracing::debug!("{} entries under {}", entries.len(), url);
    Ok(entries)
}
