//! CRC-16/CCITT-FALSE checksum (QRCPS-MPM ID 63, ISO/IEC 13239).
//!
//! Register initialized to `0xFFFF`, polynomial `0x1021`, no input or
//! output reflection, no final XOR. The checksum is computed over the
//! UTF-8 bytes of the payload INCLUDING the `"6304"` placeholder of the
//! CRC data object itself, and rendered as 4 uppercase hexadecimal digits.
//!
//! Jede Abweichung (falsches Polynom, falscher Initialwert, Byte-Reihenfolge)
//! erzeugt eine Payload, die in jedem konformen Lesegeraet an der
//! CRC-Pruefung scheitert, aber oberflaechlich gueltig aussieht.

/// Initial register value (ISO/IEC 13239 profile used by QRCPS-MPM).
const CRC_INIT: u16 = 0xFFFF;

/// Generator polynomial x^16 + x^12 + x^5 + 1.
const CRC_POLY: u16 = 0x1021;

/// Computes the raw 16-bit checksum over `bytes`.
pub fn crc16_ccitt_false(bytes: &[u8]) -> u16 {
    let mut crc = CRC_INIT;
    for &b in bytes {
        crc ^= u16::from(b) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC_POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Computes the ID 63 value for a payload that already ends in the
/// `"6304"` placeholder: 4 uppercase hex digits, zero padded.
pub fn checksum(payload_with_placeholder: &str) -> String {
    format!("{:04X}", crc16_ccitt_false(payload_with_placeholder.as_bytes()))
}
