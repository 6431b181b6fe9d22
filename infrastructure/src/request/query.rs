//! Query-string decoding into [`FormRequest`] values.

use tracing::warn;
use trellis_application::FormRequest;

/// Parse an `application/x-www-form-urlencoded` payload.
///
/// Splits on `&`, then on the first `=` of each pair; a pair without
/// `=` keeps an empty value. `+` means space, percent sequences are
/// decoded, and repeated names keep one entry per occurrence in wire
/// order. Sequences that do not decode to valid UTF-8 are logged and
/// kept verbatim rather than dropped, so a garbled submission still
/// shows up in diagnostics.
pub fn parse_query(query: &str) -> FormRequest {
    let mut request = FormRequest::new();

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (raw_name, raw_value) = match pair.split_once('=') {
            Some((name, value)) => (name, value),
            None => (pair, ""),
        };
        request.add_param(decode_component(raw_name), decode_component(raw_value));
    }

    request
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            warn!(
                "Query component {:?} is not valid UTF-8 once decoded ({}); keeping it verbatim",
                raw, err
            );
            spaced
        }
    }
}
