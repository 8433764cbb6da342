//! Phone number normalization for the Ukrainian locale.
//!
//! Best-effort cleanup for SMS campaign lists: strip everything that is not a
//! decimal digit, remember whether the number carried a leading '+', and make
//! sure the result starts with the "+38" country code. No length or checksum
//! validation is performed — garbage in, normalized garbage out.

/// Country code prepended to numbers that lack one entirely.
const DEFAULT_PREFIX: &str = "+38";
/// Digits identifying an already-prefixed Ukrainian number missing its '+'.
const COUNTRY_DIGITS: &str = "380";

/// Normalize a raw phone number string.
///
/// Keeps ASCII digits only. A '+' occurring before the first digit counts as
/// the international prefix marker; interior plusses are dropped. Then:
/// a leading '+' means the number is returned as-is; digits starting with
/// `380` get a '+' prepended; anything else is treated as a local number and
/// gets the full `+38` prefix.
pub fn normalize_phone(raw: &str) -> String {
    let mut leading_plus = false;
    let mut digits = String::with_capacity(raw.len());

    for c in raw.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c == '+' && digits.is_empty() {
            leading_plus = true;
        }
    }

    if leading_plus {
        format!("+{digits}")
    } else if digits.starts_with(COUNTRY_DIGITS) {
        format!("+{digits}")
    } else {
        format!("{DEFAULT_PREFIX}{digits}")
    }
}
