//! TLV field emission (QRCPS-MPM TLV convention).
//!
//! Every BR Code data object is `ID ++ length ++ value` where ID and length
//! are exactly two decimal digits each and the length counts the CHARACTERS
//! of the value. Templates (IDs 26 and 62) nest by emitting their inner
//! data objects into a scratch string and wrapping that concatenation in an
//! outer TLV.
//!
//! Die Laengenmessung ist bewusst zeichenbasiert: Display-Felder sind nach
//! der Sanitisierung ASCII, der rohe Pix Key kann aber beliebige Zeichen
//! enthalten, und Lesegeraete zaehlen Zeichen, keine Bytes.

use crate::{Error, Result};

/// Maximum value length representable by the 2-digit length prefix.
pub const MAX_VALUE_CHARS: usize = 99;

/// Appends one TLV data object to `out`.
///
/// `tag` must be the two-digit data object ID; values longer than
/// [`MAX_VALUE_CHARS`] are a caller contract violation and are rejected,
/// never truncated (truncation is the sanitizer's job, applied before
/// encoding).
pub fn emit(out: &mut String, tag: &'static str, value: &str) -> Result<()> {
    debug_assert!(
        tag.len() == 2 && tag.bytes().all(|b| b.is_ascii_digit()),
        "data object ID must be two decimal digits, got '{tag}'"
    );
    let length = value.chars().count();
    if length > MAX_VALUE_CHARS {
        return Err(Error::value_too_long(tag, length));
    }
    out.push_str(tag);
    // Laenge als zweistellige Dezimalzahl, fuehrende Null inklusive
    out.push(char::from(b'0' + (length / 10) as u8));
    out.push(char::from(b'0' + (length % 10) as u8));
    out.push_str(value);
    Ok(())
}

/// Convenience wrapper: emits a single data object into a fresh string.
pub fn field(tag: &'static str, value: &str) -> Result<String> {
    let mut out = String::with_capacity(4 + value.len());
    emit(&mut out, tag, value)?;
    Ok(out)
}
