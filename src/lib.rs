//! brcode – Pix "BR Code" payload codec
//!
//! Encodes the static QR payload of a Pix instant payment as defined by
//! the Banco Central do Brasil BR Code manual, which profiles the EMV QR
//! Code Specification for Payment Systems, Merchant-Presented Mode
//! (QRCPS-MPM): TLV data objects with 2-digit IDs and character-counted
//! 2-digit lengths, closed by a CRC-16/CCITT-FALSE data object (ID 63).
//!
//! The pipeline is a pure, synchronous, reentrant string transform:
//! raw parameters → sanitized text → nested TLV → checksummed payload.
//! QR rasterization is a downstream concern and not part of this crate.
//!
//! # Beispiel
//!
//! ```
//! use brcode::PixPayload;
//!
//! let payload = PixPayload::new("11999998888", "Maria Silva", "SaoPaulo")
//!     .with_amount("25.50");
//!
//! let brcode = brcode::encode(&payload).unwrap();
//! assert!(brcode.starts_with("000201"));
//!
//! // Every emitted payload round-trips through the verification oracle.
//! brcode::decode::verify(&brcode).unwrap();
//! ```

pub mod amount;
pub mod crc;
pub mod decode;
pub mod error;
pub mod payload;
pub mod sanitize;
pub mod tlv;

pub use error::{Error, Result};

// Public API: Encoding
pub use payload::{encode, PixPayload, PIX_GUI};

// Public API: Verification oracle
pub use decode::{parse, verify, Field};

// Public API: Building blocks
pub use crc::{checksum, crc16_ccitt_false};
pub use sanitize::sanitize;
