//! Recipient name decoding
//!
//! Shared links carry the recipient's name as base64 in either the `code`
//! query parameter or the last path segment. Decoding never fails: anything
//! unusable collapses to [`DEFAULT_NAME`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;

pub const DEFAULT_NAME: &str = "My Love";

/// Longest name kept after sanitizing (characters)
pub const MAX_NAME_LEN: usize = 20;

/// Decode a shared name code into a safe display name
pub fn decode_name(encoded: Option<&str>) -> String {
    encoded
        .and_then(try_decode)
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

fn try_decode(encoded: &str) -> Option<String> {
    // Padding is optional in shared links
    let trimmed = encoded.trim().trim_end_matches('=');
    if trimmed.is_empty() {
        return None;
    }
    let bytes = STANDARD_NO_PAD.decode(trimmed).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let name: String = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .take(MAX_NAME_LEN)
        .collect();
    // Only an empty result falls back; a name of spaces is kept as sent
    if name.is_empty() { None } else { Some(name) }
}

/// Pick the name code out of a link: `?code=` wins over the last path segment.
///
/// The query is parsed with form-urlencoded rules, so `%3D` and `+` arrive
/// decoded. The path segment is taken as-is.
pub fn code_from_location(path: &str, query: Option<&str>) -> Option<String> {
    let from_query = query.and_then(|q| {
        form_urlencoded::parse(q.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == "code")
            .map(|(_, value)| value.into_owned())
            .filter(|v| !v.is_empty())
    });
    from_query.or_else(|| {
        path.rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Split a shared link (`/play/CODE`, `/?code=CODE` or a bare code) and
/// pull out its name code
pub fn code_from_link(link: &str) -> Option<String> {
    let link = link.split('#').next().unwrap_or_default();
    match link.split_once('?') {
        Some((path, query)) => code_from_location(path, Some(query)),
        None => code_from_location(link, None),
    }
}
