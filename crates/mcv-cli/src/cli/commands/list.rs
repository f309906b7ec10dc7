//! List command: print the entries of a mirror directory.

use anyhow::Result;
use mcv_core::config::McvConfig;
use mcv_core::fetch::FetchOptions;
use mcv_core::listing;

/// Fetch the directory listing and print one entry per line.
pub fn run_list(cfg: &McvConfig, url: &str) -> Result<()> {
    let entries = listing::list_directory(url, &FetchOptions::from(cfg))?;
    for entry in &entries {
        println!("{}", entry);
    }
    Ok(())
}
