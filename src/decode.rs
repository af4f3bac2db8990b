//! TLV parsing and payload verification.
//!
//! The encoder is the product; this module is its conformance oracle. It
//! splits a BR Code string back into root data objects, re-checks the CRC
//! and enforces the canonical root order, so tests (and the fuzz targets)
//! can round-trip every generated payload instead of trusting string
//! comparisons alone.
//!
//! Es ist KEIN allgemeiner EMV-QR-Parser: verschachtelte Templates werden
//! nicht rekursiv zerlegt, und herstellerfremde Payloads ausserhalb der
//! Round-Trip-Pruefung sind nicht das Ziel.

use crate::crc;
use crate::{Error, Result};

/// Root data object IDs of the BR Code schema, in canonical order.
const ROOT_IDS: [u8; 10] = [0, 26, 52, 53, 54, 58, 59, 60, 62, 63];

/// One parsed data object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Two-digit data object ID.
    pub tag: String,
    /// Raw value, template contents not recursed into.
    pub value: String,
}

/// Splits `payload` into its top-level data objects.
///
/// Enforces TLV well-formedness only: two decimal digits of ID, two
/// decimal digits of length, a value of exactly that many CHARACTERS, and
/// no trailing garbage. Order and CRC are checked by [`verify`].
pub fn parse(payload: &str) -> Result<Vec<Field>> {
    let chars: Vec<char> = payload.chars().collect();
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars.len() - pos < 4 {
            let rest: String = chars[pos..].iter().collect();
            return Err(Error::InvalidTag(rest));
        }
        let tag: String = chars[pos..pos + 2].iter().collect();
        if !tag.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidTag(tag));
        }
        let len_digits: String = chars[pos + 2..pos + 4].iter().collect();
        if !len_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidLength(len_digits));
        }
        let declared: usize = len_digits
            .parse()
            .map_err(|_| Error::InvalidLength(len_digits.clone()))?;
        pos += 4;
        let remaining = chars.len() - pos;
        if declared > remaining {
            return Err(Error::TruncatedField { tag, declared, remaining });
        }
        let value: String = chars[pos..pos + declared].iter().collect();
        pos += declared;
        fields.push(Field { tag, value });
    }
    Ok(fields)
}

/// Verifies that `payload` is a well-formed, checksummed BR Code.
///
/// Checks, in order: TLV well-formedness ([`parse`]), strictly ascending
/// root IDs drawn from the BR Code schema, the CRC data object (ID 63,
/// 4 uppercase hex digits) as the final field, and the CRC value itself
/// against a recomputation over the payload with its `"6304"` placeholder.
pub fn verify(payload: &str) -> Result<()> {
    let fields = parse(payload)?;

    let mut previous: Option<u8> = None;
    for field in &fields {
        // Tag ist nach parse() garantiert zweistellig dezimal
        let id: u8 = field.tag.parse().unwrap_or(u8::MAX);
        if !ROOT_IDS.contains(&id) {
            return Err(Error::field_order_violation(
                previous.map(|p| format!("{p:02}")).unwrap_or_default(),
                field.tag.clone(),
            ));
        }
        if let Some(prev) = previous {
            if id <= prev {
                return Err(Error::field_order_violation(
                    format!("{prev:02}"),
                    field.tag.clone(),
                ));
            }
        }
        previous = Some(id);
    }

    let crc_field = match fields.last() {
        Some(f) if f.tag == "63" => f,
        _ => return Err(Error::MisplacedChecksum),
    };
    if crc_field.value.len() != 4 {
        return Err(Error::MisplacedChecksum);
    }
    if !crc_field.value.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)) {
        return Err(Error::MalformedChecksum(crc_field.value.clone()));
    }

    // CRC value is ASCII, so character arithmetic equals byte arithmetic here
    let expected = crc::checksum(&payload[..payload.len() - 4]);
    if crc_field.value != expected {
        return Err(Error::ChecksumMismatch {
            found: crc_field.value.clone(),
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{encode, PixPayload};

    const GOLDEN: &str = "00020126330014br.gov.bcb.pix011111999998888520400005303986540525.505802BR5911Maria Silva6008SaoPaulo62070503***63044F27";

    /// The golden payload splits into the canonical root sequence.
    #[test]
    fn parses_golden_payload() {
        let fields = parse(GOLDEN).unwrap();
        let tags: Vec<&str> = fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, ["00", "26", "52", "53", "54", "58", "59", "60", "62", "63"]);
        assert_eq!(fields[0].value, "01");
        assert_eq!(fields[4].value, "25.50");
        assert_eq!(fields[9].value, "4F27");
    }

    /// Every length prefix equals the character count of its value.
    #[test]
    fn length_prefixes_match_values() {
        for field in parse(GOLDEN).unwrap() {
            assert!(field.value.chars().count() <= 99, "{}", field.tag);
        }
        // Reassembling the parsed fields reproduces the payload exactly
        let rebuilt: String = parse(GOLDEN)
            .unwrap()
            .iter()
            .map(|f| format!("{}{:02}{}", f.tag, f.value.chars().count(), f.value))
            .collect();
        assert_eq!(rebuilt, GOLDEN);
    }

    /// verify() accepts everything the encoder emits.
    #[test]
    fn verifies_encoder_output() {
        let cases = [
            PixPayload::new("11999998888", "Maria Silva", "SaoPaulo").with_amount("25.50"),
            PixPayload::new("maria@example.com", "José Álvaro", "São Paulo"),
            PixPayload::new("+5511999998888", "Açaí do Zé", "Belém")
                .with_description("Doação")
                .with_amount("0.01"),
        ];
        for payload in cases {
            let brcode = encode(&payload).unwrap();
            verify(&brcode).unwrap();
        }
    }

    /// A single flipped payload character breaks the CRC.
    #[test]
    fn flipped_character_fails_crc() {
        let tampered = GOLDEN.replace("Maria", "Marla");
        assert!(matches!(verify(&tampered).unwrap_err(), Error::ChecksumMismatch { .. }));
    }

    /// A wrong CRC value is reported with both values.
    #[test]
    fn wrong_crc_reports_both_values() {
        let mut tampered = GOLDEN[..GOLDEN.len() - 4].to_string();
        tampered.push_str("0000");
        let err = verify(&tampered).unwrap_err();
        assert_eq!(
            err,
            Error::ChecksumMismatch { found: "0000".to_string(), expected: "4F27".to_string() }
        );
    }

    /// Lowercase hex in ID 63 is malformed even if numerically right.
    #[test]
    fn lowercase_crc_is_malformed() {
        let mut tampered = GOLDEN[..GOLDEN.len() - 4].to_string();
        tampered.push_str("4f27");
        assert!(matches!(verify(&tampered).unwrap_err(), Error::MalformedChecksum(_)));
    }

    /// Non-digit tag characters are rejected.
    #[test]
    fn non_digit_tag_is_rejected() {
        assert_eq!(parse("xx0201").unwrap_err(), Error::InvalidTag("xx".to_string()));
    }

    /// Non-digit length characters are rejected.
    #[test]
    fn non_digit_length_is_rejected() {
        assert!(matches!(parse("00x201").unwrap_err(), Error::InvalidLength(_)));
    }

    /// A declared length running past the end is a truncation error.
    #[test]
    fn truncated_value_is_rejected() {
        let err = parse("000501").unwrap_err();
        assert_eq!(
            err,
            Error::TruncatedField { tag: "00".to_string(), declared: 5, remaining: 2 }
        );
    }

    /// Leftover characters shorter than a TLV header are rejected.
    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(matches!(parse("00020163").unwrap_err(), Error::InvalidTag(_)));
    }

    /// The empty string parses to no fields but fails verification.
    #[test]
    fn empty_payload_fails_verification() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(verify("").unwrap_err(), Error::MisplacedChecksum);
    }

    /// Out-of-order root IDs are a FieldOrderViolation.
    #[test]
    fn out_of_order_ids_are_rejected() {
        // ID 26 after ID 52
        let err = verify("000201520400002602ab").unwrap_err();
        assert_eq!(err, Error::field_order_violation("52", "26"));
    }

    /// A root ID outside the BR Code schema is rejected.
    #[test]
    fn unknown_root_id_is_rejected() {
        let err = verify("0002011502xy").unwrap_err();
        assert_eq!(err, Error::field_order_violation("00", "15"));
    }

    /// A duplicated root ID violates strict ascension.
    #[test]
    fn duplicate_root_id_is_rejected() {
        let err = verify("000201000201").unwrap_err();
        assert_eq!(err, Error::field_order_violation("00", "00"));
    }

    /// A payload whose last field is not ID 63 is rejected.
    #[test]
    fn missing_checksum_field_is_rejected() {
        let err = verify("0002015802BR").unwrap_err();
        assert_eq!(err, Error::MisplacedChecksum);
    }
}
