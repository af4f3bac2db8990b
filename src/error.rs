//! Central error types for the BR Code payload codec.
//!
//! Each variant references the data object ID of the EMV QRCPS
//! Merchant-Presented Mode schema (QRCPS-MPM) or the BCB BR Code manual
//! constraint that was violated.

use core::fmt;
use std::borrow::Cow;

/// All error conditions the codec can report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A TLV value exceeds the 99-character budget of the 2-digit length
    /// prefix (QRCPS-MPM TLV convention).
    ///
    /// Deutet auf einen Aufrufer-Fehler hin (z.B. ein ueberlanger Pix Key):
    /// die Sanitizer-Limits garantieren, dass regulaere Felder nie ueber
    /// 99 Zeichen wachsen. Es wird niemals stillschweigend gekuerzt.
    ValueTooLong {
        /// The 2-digit data object ID whose value overflowed.
        tag: Cow<'static, str>,
        /// The offending value length in characters.
        length: usize,
    },
    /// The Pix key is empty; a payload without a key routes nowhere
    /// (BR Code, Merchant Account Information ID 26-01).
    EmptyPixKey,
    /// A data object ID is not two decimal digits (QRCPS-MPM TLV convention).
    InvalidTag(String),
    /// A TLV length prefix is not two decimal digits.
    InvalidLength(String),
    /// The payload ended before a value of the declared length was read.
    TruncatedField {
        /// The data object ID of the truncated field.
        tag: String,
        /// Declared value length in characters.
        declared: usize,
        /// Characters actually remaining.
        remaining: usize,
    },
    /// The final data object is not a well-formed CRC field
    /// (ID 63, exactly 4 characters, always last — QRCPS-MPM).
    MisplacedChecksum,
    /// The CRC value is not 4 uppercase hexadecimal digits.
    MalformedChecksum(String),
    /// The transmitted CRC does not match the recomputed CRC-16/CCITT-FALSE
    /// (ISO/IEC 13239 as profiled by QRCPS-MPM, ID 63).
    ChecksumMismatch {
        /// CRC carried in the payload.
        found: String,
        /// CRC recomputed over the payload.
        expected: String,
    },
    /// Root data object IDs are not in strictly ascending order, or an ID
    /// is not part of the BR Code root schema.
    FieldOrderViolation {
        /// Das zuletzt gelesene ID (leer wenn nicht verfuegbar).
        previous: Cow<'static, str>,
        /// Das ID das die Ordnung verletzt.
        found: Cow<'static, str>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueTooLong { tag, length } => {
                write!(f, "value of data object {tag} is {length} characters, exceeds the 99-character TLV budget")
            }
            Self::EmptyPixKey => write!(f, "empty Pix key (ID 26-01), payload would route nowhere"),
            Self::InvalidTag(tag) => write!(f, "invalid data object ID '{tag}', expected two decimal digits"),
            Self::InvalidLength(len) => write!(f, "invalid TLV length '{len}', expected two decimal digits"),
            Self::TruncatedField { tag, declared, remaining } => {
                write!(f, "data object {tag} declares {declared} characters but only {remaining} remain")
            }
            Self::MisplacedChecksum => write!(f, "CRC data object (ID 63) missing, not last, or not 4 characters"),
            Self::MalformedChecksum(value) => {
                write!(f, "CRC value '{value}' is not 4 uppercase hexadecimal digits (ID 63)")
            }
            Self::ChecksumMismatch { found, expected } => {
                write!(f, "CRC mismatch: payload carries {found}, recomputed {expected} (ISO/IEC 13239)")
            }
            Self::FieldOrderViolation { previous, found } => {
                if previous.is_empty() {
                    write!(f, "data object ID {found} violates the canonical root order")
                } else {
                    write!(f, "data object ID {found} after {previous} violates the canonical root order")
                }
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Erstellt einen `ValueTooLong` Fehler fuer ein Data Object.
    pub fn value_too_long(tag: impl Into<Cow<'static, str>>, length: usize) -> Self {
        Self::ValueTooLong { tag: tag.into(), length }
    }

    /// Erstellt einen `FieldOrderViolation` Fehler mit Kontext.
    pub fn field_order_violation(
        previous: impl Into<Cow<'static, str>>,
        found: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::FieldOrderViolation {
            previous: previous.into(),
            found: found.into(),
        }
    }
}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
