//! Directory index parsing: HTML anchor extraction with a plain-text fallback.

/// Extracts entry filenames from a directory index body.
///
/// Mirror index pages are HTML with one anchor per entry; anything else is
/// treated as a plain-text listing with one name per line. Subdirectories
/// (trailing slash), parent links, and sort/fragment links are skipped.
pub fn parse_listing(body: &str) -> Vec<String> {
    if looks_like_html(body) {
        parse_html_index(body)
    } else {
        body.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn looks_like_html(body: &str) -> bool {
    body.trim_start().starts_with('<')
}

/// Pulls quoted href values out of anchor tags without a full HTML parser.
fn parse_html_index(body: &str) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    let lower = body.to_ascii_lowercase();
    let bytes = body.as_bytes();
    let mut at = 0;

    while let Some(rel) = lower[at..].find("href") {
        let after_href = at + rel + "href".len();
        let mut idx = after_href;
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        if idx >= bytes.len() || bytes[idx] != b'=' {
            at = after_href;
            continue;
        }
        idx += 1;
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        let quote = match bytes.get(idx) {
            Some(&b'"') => '"',
            Some(&b'\'') => '\'',
            _ => {
                at = after_href;
                continue;
            }
        };
        idx += 1;
        let Some(len) = body[idx..].find(quote) else {
            break;
        };
        if let Some(name) = entry_name(&body[idx..idx + len]) {
            if !entries.contains(&name) {
                entries.push(name);
            }
        }
        at = idx + len + 1;
    }

    entries
}

/// Maps an href value to an entry filename, or None for links that are not
/// directory entries (subdirectories, parent, sort links, fragments).
fn entry_name(href: &str) -> Option<String> {
    let path = href.trim().split(['?', '#']).next().unwrap_or("");
    if path.is_empty() || path.ends_with('/') {
        return None;
    }
    let name = path.rsplit('/').next().unwrap_or("");
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}
