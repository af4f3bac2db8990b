//! Free-text field sanitization for BR Code display fields.
//!
//! Scanner apps only guarantee the EMV common character set, so display
//! fields (Merchant Name ID 59, Merchant City ID 60, the optional
//! description in ID 26-02) are reduced to their ASCII skeleton before
//! encoding: Unicode canonical decomposition (NFD), combining marks
//! stripped, then truncated to the field limit.
//!
//! Laengen werden durchgehend in ZEICHEN gemessen, nicht in Bytes. Das
//! 2-stellige TLV-Laengenpraefix zaehlt ebenfalls Zeichen, daher ist die
//! Messung hier und in [`crate::tlv`] dieselbe.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Character limit for Merchant Name (ID 59).
pub const MERCHANT_NAME_MAX: usize = 25;

/// Character limit for Merchant City (ID 60).
pub const MERCHANT_CITY_MAX: usize = 15;

/// Character limit for the payment description (ID 26-02).
pub const DESCRIPTION_MAX: usize = 25;

/// Removes diacritics and truncates to `max_chars` characters.
///
/// Never fails: empty input yields empty output, and any character that is
/// not a combining mark survives as-is (including control characters — the
/// caller decides what text is worth displaying).
///
/// # Beispiel
///
/// ```
/// use brcode::sanitize::sanitize;
///
/// assert_eq!(sanitize("José Álvaro", 25), "Jose Alvaro");
/// assert_eq!(sanitize("São Paulo", 15), "Sao Paulo");
/// ```
pub fn sanitize(input: &str, max_chars: usize) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .take(max_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Diacritics are removed via NFD + mark stripping.
    #[test]
    fn removes_diacritics() {
        assert_eq!(sanitize("José Álvaro", 25), "Jose Alvaro");
        assert_eq!(sanitize("ação", 25), "acao");
        assert_eq!(sanitize("Brasília", 25), "Brasilia");
    }

    /// Cedilla decomposes to 'c' + combining cedilla; the base letter stays.
    #[test]
    fn cedilla_keeps_base_letter() {
        assert_eq!(sanitize("ç", 25), "c");
        assert_eq!(sanitize("Açaí", 25), "Acai");
    }

    /// ID 59: a 40-character name is truncated to exactly 25 characters.
    #[test]
    fn truncates_name_to_25() {
        let name = "A".repeat(40);
        let out = sanitize(&name, MERCHANT_NAME_MAX);
        assert_eq!(out.chars().count(), 25);
    }

    /// ID 60: a 20-character city is truncated to exactly 15 characters.
    #[test]
    fn truncates_city_to_15() {
        let city = "B".repeat(20);
        let out = sanitize(&city, MERCHANT_CITY_MAX);
        assert_eq!(out.chars().count(), 15);
    }

    /// Truncation counts characters after mark stripping, never bytes.
    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 5 accented chars = 10 UTF-8 bytes before normalization
        let out = sanitize("ééééé", 3);
        assert_eq!(out, "eee");
    }

    /// Empty input returns empty output without error.
    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(sanitize("", 25), "");
    }

    /// Input already within the limit passes through unchanged.
    #[test]
    fn short_ascii_passes_through() {
        assert_eq!(sanitize("Maria Silva", MERCHANT_NAME_MAX), "Maria Silva");
    }

    /// Non-mark non-ASCII characters are kept (the caller's concern).
    #[test]
    fn keeps_non_mark_characters() {
        assert_eq!(sanitize("R$ 10", 25), "R$ 10");
        assert_eq!(sanitize("a\tb", 25), "a\tb");
    }

    /// Zero limit yields the empty string.
    #[test]
    fn zero_limit_is_empty() {
        assert_eq!(sanitize("Maria", 0), "");
    }
}
