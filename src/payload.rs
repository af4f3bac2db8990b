//! BR Code payload assembly (QRCPS-MPM root data objects).
//!
//! Builds the canonical root sequence of a static Pix payload:
//!
//! - `00` Payload Format Indicator, constant `"01"`
//! - `26` Merchant Account Information template:
//!   `00` = GUI `"br.gov.bcb.pix"`, `01` = raw Pix key,
//!   `02` = sanitized description (only when supplied)
//! - `52` Merchant Category Code, constant `"0000"`
//! - `53` Transaction Currency, constant `"986"` (ISO 4217 BRL)
//! - `54` Transaction Amount (only for a positive amount, see [`crate::amount`])
//! - `58` Country Code, constant `"BR"`
//! - `59` Merchant Name, sanitized to 25 characters
//! - `60` Merchant City, sanitized to 15 characters
//! - `62` Additional Data Field Template: `05` = txid placeholder `"***"`
//! - `63` CRC, spliced in by [`crate::crc`]
//!
//! Die Reihenfolge ist Teil des Formats: Lesegeraete ueberspringen optionale
//! Data Objects anhand der kanonisch aufsteigenden ID-Folge. Eine
//! Umsortierung erzeugt Payloads, die manche Apps ablehnen.

use crate::amount::format_amount;
use crate::sanitize::{sanitize, DESCRIPTION_MAX, MERCHANT_CITY_MAX, MERCHANT_NAME_MAX};
use crate::tlv::{self, MAX_VALUE_CHARS};
use crate::{Error, Result};

/// Globally Unique Identifier of the Pix arrangement (ID 26-00).
pub const PIX_GUI: &str = "br.gov.bcb.pix";

/// Payload Format Indicator value (ID 00).
const PAYLOAD_FORMAT: &str = "01";

/// Merchant Category Code for "not informed" (ID 52).
const MCC_UNINFORMED: &str = "0000";

/// ISO 4217 numeric code for the Brazilian real (ID 53).
const CURRENCY_BRL: &str = "986";

/// ISO 3166-1 alpha-2 country code (ID 58).
const COUNTRY_BR: &str = "BR";

/// Txid placeholder meaning "no specific transaction id" (ID 62-05).
const TXID_NONE: &str = "***";

/// Input parameters for one static Pix payload.
///
/// Caller-owned and immutable; the struct exists only for the duration of
/// a single [`encode`] call. The Pix key is passed through verbatim — its
/// syntax (CPF, CNPJ, e-mail, phone, random key) is the caller's concern.
///
/// # Beispiel
///
/// ```
/// use brcode::PixPayload;
///
/// let payload = PixPayload::new("11999998888", "Maria Silva", "SaoPaulo")
///     .with_amount("25.50");
/// let brcode = brcode::encode(&payload).unwrap();
/// assert!(brcode.starts_with("000201"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixPayload {
    /// Pix key, embedded verbatim as ID 26-01.
    pub pix_key: String,
    /// Merchant display name (ID 59), sanitized before encoding.
    pub merchant_name: String,
    /// Merchant city (ID 60), sanitized before encoding.
    pub merchant_city: String,
    /// Optional decimal amount string (ID 54); `None` or an unparseable /
    /// non-positive value yields an open-amount payload.
    pub amount: Option<String>,
    /// Optional payment description (ID 26-02), sanitized before encoding.
    pub description: Option<String>,
}

impl PixPayload {
    /// Erstellt eine Payload ohne Betrag und ohne Beschreibung.
    pub fn new(
        pix_key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            pix_key: pix_key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
            amount: None,
            description: None,
        }
    }

    /// Setzt den Betrag (ID 54).
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Setzt die Beschreibung (ID 26-02).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Encodes `payload` into a complete, checksummed BR Code string.
///
/// The result is ready for QR rasterization by a downstream library.
/// Fails only on contract violations: an empty Pix key, or a key so long
/// that the Merchant Account Information template (ID 26) cannot hold it.
pub fn encode(payload: &PixPayload) -> Result<String> {
    if payload.pix_key.is_empty() {
        return Err(Error::EmptyPixKey);
    }

    let merchant_account = merchant_account_information(payload)?;

    let mut out = String::with_capacity(128);
    tlv::emit(&mut out, "00", PAYLOAD_FORMAT)?;
    tlv::emit(&mut out, "26", &merchant_account)?;
    tlv::emit(&mut out, "52", MCC_UNINFORMED)?;
    tlv::emit(&mut out, "53", CURRENCY_BRL)?;
    if let Some(raw) = payload.amount.as_deref() {
        match format_amount(raw) {
            Some(rendered) => tlv::emit(&mut out, "54", &rendered)?,
            None => log::debug!("amount '{raw}' not positive or unparseable, emitting open-amount payload"),
        }
    }
    tlv::emit(&mut out, "58", COUNTRY_BR)?;
    tlv::emit(&mut out, "59", &sanitize(&payload.merchant_name, MERCHANT_NAME_MAX))?;
    tlv::emit(&mut out, "60", &sanitize(&payload.merchant_city, MERCHANT_CITY_MAX))?;
    tlv::emit(&mut out, "62", &tlv::field("05", TXID_NONE)?)?;

    // CRC over everything emitted so far plus the ID 63 placeholder
    out.push_str("6304");
    let crc = crate::crc::checksum(&out);
    out.push_str(&crc);
    Ok(out)
}

/// Builds the ID 26 template value: GUI, raw key, optional description.
///
/// The sanitizer caps each field individually, but the template total can
/// still exceed the 99-character TLV budget when a long key meets a long
/// description. The description is cut to the remaining space (it is the
/// only expendable field); an oversized key surfaces as `ValueTooLong`.
fn merchant_account_information(payload: &PixPayload) -> Result<String> {
    let mut inner = String::new();
    tlv::emit(&mut inner, "00", PIX_GUI)?;
    tlv::emit(&mut inner, "01", &payload.pix_key)?;

    if let Some(description) = payload.description.as_deref() {
        let description = sanitize(description, DESCRIPTION_MAX);
        if !description.is_empty() {
            let used = inner.chars().count();
            let budget = MAX_VALUE_CHARS.saturating_sub(used + 4);
            let description: String = description.chars().take(budget).collect();
            if !description.is_empty() {
                tlv::emit(&mut inner, "02", &description)?;
            }
        }
    }
    Ok(inner)
}
