//! Log sanitization helpers.
//!
//! Debug logging of API traffic must not dump whole bodies: record sets can
//! carry many proof values and error responses may echo request data.

/// Longest body excerpt included in a single debug log line.
const TRUNCATE_LIMIT: usize = 256;

/// Shortens `body` to at most [`TRUNCATE_LIMIT`] bytes for logging,
/// annotating the cut with the original length.
///
/// The cut lands on a char boundary so multi-byte content never produces a
/// sliced code point.
pub(crate) fn truncate_for_log(body: &str) -> String {
    if body.len() <= TRUNCATE_LIMIT {
        return body.to_string();
    }
    let mut cut = TRUNCATE_LIMIT;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &body[..cut],
        body.len()
    )
}
