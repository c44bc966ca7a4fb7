//! Reason phrase extraction from collected response header lines.

/// Reason phrase of the last status line in `lines` (the final response after
/// redirects). HTTP/2 status lines carry no phrase, so fall back to the
/// standard text for `code`.
pub(crate) fn reason_phrase(lines: &[String], code: u32) -> String {
    let from_line = lines
        .iter()
        .rev()
        .map(|l| l.trim())
        .find(|l| l.starts_with("HTTP/"))
        .and_then(|l| {
            let mut parts = l.splitn(3, ' ');
            parts.next()?;
            parts.next()?;
            parts.next()
        })
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match from_line {
        Some(text) => text.to_string(),
        None => canonical_reason(code).unwrap_or("").to_string(),
    }
}

/// Standard reason phrase for common status codes.
fn canonical_reason(code: u32) -> Option<&'static str> {
    let text = match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        410 => "Gone",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => return None,
    };
    Some(text)
}
