//! Shared form parsing and HTML helpers for route handlers.

use crate::error::HubError;

/// Parse URL-encoded form body into key-value pairs.
/// Handles `key=value&key2=value2` format (from HTMX POST bodies).
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let val = parts.next().unwrap_or("");
            Some((percent_decode(key), percent_decode(val)))
        })
        .collect()
}

/// Percent-decode a URL-encoded value. Decoded bytes are reassembled as
/// UTF-8; malformed escapes are kept literally.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => match (
                bytes.get(i + 1).copied().and_then(hex_val),
                bytes.get(i + 2).copied().and_then(hex_val),
            ) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parse a query string into key-value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let q = query.strip_prefix('?').unwrap_or(query);
    parse_form_body(q)
}

/// Helper to get a value by key from a list of key-value pairs.
pub fn get_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Like [`get_param`], but an absent or empty value is an error.
pub fn require_param<'a>(
    params: &'a [(String, String)],
    key: &'static str,
) -> Result<&'a str, HubError> {
    match get_param(params, key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(HubError::MissingParam(key)),
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a single-quoted JavaScript string literal inside a
/// double-quoted HTML attribute.
pub fn escape_js(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("\\x3c"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline notice shown above a view when an action was rejected.
pub fn error_notice(err: &HubError) -> String {
    format!(
        r#"<div class="mb-4 p-3 rounded-xl border border-amber-800/50 bg-amber-950/30 text-amber-200 text-sm">{}</div>"#,
        escape_html(&err.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_body_works() {
        let pairs = parse_form_body("section=dugout&index=2&action=toggle");
        assert_eq!(pairs.len(), 3);
        assert_eq!(get_param(&pairs, "section"), Some("dugout"));
        assert_eq!(get_param(&pairs, "index"), Some("2"));
    }

    #[test]
    fn parse_form_body_empty() {
        assert!(parse_form_body("").is_empty());
        assert!(parse_form_body("&&").is_empty());
    }

    #[test]
    fn percent_decode_plus_and_hex() {
        assert_eq!(percent_decode("Hardware+%26+IPs"), "Hardware & IPs");
        assert_eq!(percent_decode("Slate%207"), "Slate 7");
    }

    #[test]
    fn percent_decode_utf8_and_malformed() {
        assert_eq!(percent_decode("caf%C3%A9"), "café");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn parse_query_strips_prefix() {
        let pairs = parse_query("?type=3cam_cf");
        assert_eq!(get_param(&pairs, "type"), Some("3cam_cf"));
    }

    #[test]
    fn require_param_rejects_empty() {
        let pairs = parse_form_body("id=&kind=plan");
        assert_eq!(require_param(&pairs, "id"), Err(HubError::MissingParam("id")));
        assert_eq!(require_param(&pairs, "missing"), Err(HubError::MissingParam("missing")));
        assert_eq!(require_param(&pairs, "kind"), Ok("plan"));
    }

    #[test]
    fn escape_html_covers_markup() {
        assert_eq!(
            escape_html(r#"<b>"Cams" & 'mounts'</b>"#),
            "&lt;b&gt;&quot;Cams&quot; &amp; &#39;mounts&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_js_quotes() {
        assert_eq!(escape_js("Slate 7's IP"), "Slate 7\\'s IP");
        assert_eq!(escape_js("a&b"), "a&amp;b");
    }
}
