//! Transaction Amount formatting (QRCPS-MPM ID 54).
//!
//! The amount reaches the codec as the free-form decimal string the user
//! typed. ID 54 is only emitted for a finite, strictly positive value,
//! rendered with exactly two fractional digits (`"25.5"` → `"25.50"`).
//! Everything else — zero, negative, garbage, empty — means "no amount":
//! the payer enters the value manually in their banking app. That is a
//! deliberate open-amount policy, not an error.

/// Largest rendered amount accepted by ID 54 (13 characters including the
/// decimal separator, per the QRCPS-MPM field definition).
const MAX_AMOUNT_CHARS: usize = 13;

/// Parses `raw` and renders it as an ID 54 value, or `None` for the
/// open-amount case.
pub fn format_amount(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let rendered = format!("{value:.2}");
    if rendered.len() > MAX_AMOUNT_CHARS {
        return None;
    }
    Some(rendered)
}
