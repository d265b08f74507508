//! CRM reference -> entity id.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(\d+)$").expect("valid trailing id regex"));

/// Returns the trailing `/<digits>` segment of a reference, or the whole
/// reference when it has none.
///
/// `/v1/contacts/1001` -> `1001`; `contact-anna` -> `contact-anna`.
pub fn extract_reference_id(reference: &str) -> String {
    TRAILING_ID_RE
        .captures(reference)
        .and_then(|captures| captures.get(1))
        .map(|digits| digits.as_str().to_string())
        .unwrap_or_else(|| reference.to_string())
}
