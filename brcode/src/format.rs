//! pt-BR display formatting and WhatsApp deep links.
//!
//! Helpers for rendering values the way Brazilian customers read them —
//! currency as `R$ 1.234,56`, mobile numbers as `(11) 99999-9999` — plus
//! `wa.me` deep links for sending a charge over WhatsApp next to its
//! copy-paste code.

use rust_decimal::{Decimal, RoundingStrategy};
use url::Url;

/// Renders a decimal as Brazilian currency: `R$ 1.234,56`.
///
/// Thousands are grouped with `.`, the decimal separator is `,`, and the
/// value is rounded to two fraction digits half away from zero. Negative
/// values are prefixed with `-`.
#[must_use]
pub fn currency_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac_part}")
}

/// Formats an 11-digit Brazilian mobile number as `(DD) NNNNN-NNNN`.
///
/// Inputs that do not contain exactly 11 digits are returned unchanged.
#[must_use]
pub fn phone_br(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 11 {
        format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
    } else {
        phone.to_owned()
    }
}

/// Builds a `wa.me` deep link carrying a pre-filled message.
///
/// Non-digit characters are stripped from the phone number and the `55`
/// country prefix is prepended when missing. The message lands
/// percent-encoded in the `text` query parameter.
///
/// # Errors
///
/// Returns an error if the assembled link is not a valid URL.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url, url::ParseError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let full_number = if digits.starts_with("55") {
        digits
    } else {
        format!("55{digits}")
    };

    let mut link = Url::parse(&format!("https://wa.me/{full_number}"))?;
    link.query_pairs_mut().append_pair("text", message);
    Ok(link)
}
