//! `Content-Disposition` filename extraction.
//!
//! # Design
//! - Pure substring scan; no regex and no panics on malformed input.
//! - Parameters are split on `;` outside quoted strings.
//! - Only the plain `filename` parameter is honoured; anything unusable yields `None`
//!   so callers fall back to their default name.

/// Extract the `filename` parameter from a `Content-Disposition` header value.
#[must_use]
pub fn filename_from_disposition(header: &str) -> Option<String> {
    split_params(header).into_iter().find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let value = value.trim();
        let parsed = if value.starts_with('"') {
            unquote(value)?
        } else {
            value.to_string()
        };
        if parsed.is_empty() { None } else { Some(parsed) }
    })
}

/// Filename from the header when present and usable, otherwise `fallback`.
#[must_use]
pub fn suggested_filename(header: Option<&str>, fallback: &str) -> String {
    header
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| fallback.to_string())
}

fn split_params(header: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut escaped = false;
    for (idx, ch) in header.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            ';' if !quoted => {
                params.push(&header[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    params.push(&header[start..]);
    params
}

/// Decode a quoted-string; `None` when the closing quote is missing.
fn unquote(value: &str) -> Option<String> {
    let mut out = String::new();
    let mut chars = value.chars().skip(1);
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push(chars.next()?),
            '"' => return Some(out),
            other => out.push(other),
        }
    }
    None
}
