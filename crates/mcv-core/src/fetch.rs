//! HTTP text fetch over curl easy.
//!
//! Used for directory index pages and checksum manifests, which are small
//! text responses buffered fully in memory. Failures propagate to the
//! caller; there is no retry at this layer.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::time::Duration;

use crate::config::McvConfig;

/// Transport options for mirror requests.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&McvConfig> for FetchOptions {
    fn from(cfg: &McvConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }
}

/// Fetches `url` with a GET and returns the body as UTF-8 text.
///
/// Follows redirects. Optional custom headers can be passed (e.g. an Accept
/// header). Non-2xx statuses are errors. Runs in the current thread; call
/// from `spawn_blocking` if used from async code.
pub fn fetch_text(
    url: &str,
    custom_headers: &HashMap<String, String>,
    opts: &FetchOptions,
) -> Result<String> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    // Build curl list for custom headers (e.g. "Name: value").
    let mut list = curl::easy::List::new();
    for (k, v) in custom_headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !custom_headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("GET {} failed", url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    String::from_utf8(body).with_context(|| format!("response from {} is not valid UTF-8", url))
}
