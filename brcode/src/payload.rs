//! BR Code payload assembly.
//!
//! A BR Code is a flat string of TLV fields in a fixed order, closed by a
//! CRC-16/CCITT-FALSE checksum over everything before it:
//!
//! | ID   | Content                                                    |
//! |------|------------------------------------------------------------|
//! | `00` | Payload format indicator, always `01`                      |
//! | `26` | Merchant account info: `br.gov.bcb.pix` GUI + the Pix key  |
//! | `52` | Merchant category code, `0000` (not categorized)           |
//! | `53` | Currency, `986` (BRL)                                      |
//! | `54` | Amount, two decimals — only when strictly positive         |
//! | `58` | Country code, `BR`                                         |
//! | `59` | Merchant name, at most 25 characters                       |
//! | `60` | Merchant city, at most 15 characters                       |
//! | `62` | Additional data: transaction reference, at most 25 chars   |
//! | `63` | CRC16 of the payload including the `6304` prefix           |
//!
//! # Example
//!
//! ```
//! use brcode::payload::PixPayload;
//!
//! let code = PixPayload::new("11999999999", "LOJA TESTE", "SAO PAULO")
//!     .with_tx_id("PED001")
//!     .encode()?;
//! assert!(code.starts_with("000201"));
//! # Ok::<(), brcode::error::PayloadError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::crc;
use crate::error::PayloadError;
use crate::tlv;

/// Scheme identifier carried in the merchant account information group.
pub const PIX_GUI: &str = "br.gov.bcb.pix";

/// Default transaction reference, meaning "no specific reference".
pub const DEFAULT_TX_ID: &str = "***";

/// Maximum merchant name length reaching the wire.
pub const MAX_MERCHANT_NAME: usize = 25;

/// Maximum merchant city length reaching the wire.
pub const MAX_MERCHANT_CITY: usize = 15;

/// Maximum transaction reference length reaching the wire.
pub const MAX_TX_ID: usize = 25;

// Top-level field identifiers, in payload order.
const ID_PAYLOAD_FORMAT: &str = "00";
const ID_MERCHANT_ACCOUNT_INFO: &str = "26";
const ID_MERCHANT_CATEGORY: &str = "52";
const ID_CURRENCY: &str = "53";
const ID_AMOUNT: &str = "54";
const ID_COUNTRY: &str = "58";
const ID_MERCHANT_NAME: &str = "59";
const ID_MERCHANT_CITY: &str = "60";
const ID_ADDITIONAL_DATA: &str = "62";

// Sub-field identifiers inside the nested groups.
const ID_GUI: &str = "00";
const ID_PIX_KEY: &str = "01";
const ID_TX_ID: &str = "05";

// Fixed field values.
const PAYLOAD_FORMAT: &str = "01";
const MERCHANT_CATEGORY_NONE: &str = "0000";
const CURRENCY_BRL: &str = "986";
const COUNTRY_BR: &str = "BR";

// The CRC field's id + declared length; the four checksum digits follow.
const CRC_PREFIX: &str = "6304";

/// The data behind one Pix charge.
///
/// Construct with [`PixPayload::new`], optionally bind an amount and a
/// transaction reference, then call [`PixPayload::encode`] for the
/// QR/copy-paste string. Without an amount the code is static: the payer
/// types the value, and the same string can be reused indefinitely.
///
/// The Pix key is passed through verbatim — key validation is the
/// caller's concern. Name, city, and reference are truncated to their
/// field maximums during encoding.
///
/// # Serialization
///
/// Serializes with camelCase field names (`pixKey`, `merchantName`,
/// `merchantCity`, `amount`, `txId`); absent optionals are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixPayload {
    /// The receiving party's registered Pix key: phone, tax id, email, or
    /// a random key.
    pub pix_key: String,
    /// Receiver display name shown by the payer's banking app.
    pub merchant_name: String,
    /// Receiver city.
    pub merchant_city: String,
    /// Transaction amount; the field is omitted unless strictly positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Transaction reference; [`DEFAULT_TX_ID`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
}

impl PixPayload {
    /// Creates a payload for the given key, merchant name, and city, with
    /// no amount and no transaction reference.
    pub fn new<K, N, C>(pix_key: K, merchant_name: N, merchant_city: C) -> Self
    where
        K: Into<String>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            pix_key: pix_key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
            amount: None,
            tx_id: None,
        }
    }

    /// Binds the payload to an exact transaction amount.
    #[must_use]
    pub const fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the transaction reference shown on the payer's statement.
    #[must_use]
    pub fn with_tx_id<T: Into<String>>(mut self, tx_id: T) -> Self {
        self.tx_id = Some(tx_id.into());
        self
    }

    /// Encodes the complete, checksummed BR Code string.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::ValueTooLong`] when the Pix key (or the
    /// merchant account group it nests in) does not fit a 2-digit TLV
    /// length prefix.
    pub fn encode(&self) -> Result<String, PayloadError> {
        let account_info = [
            tlv::field(ID_GUI, PIX_GUI)?,
            tlv::field(ID_PIX_KEY, &self.pix_key)?,
        ]
        .concat();

        let mut payload = String::new();
        payload.push_str(&tlv::field(ID_PAYLOAD_FORMAT, PAYLOAD_FORMAT)?);
        payload.push_str(&tlv::field(ID_MERCHANT_ACCOUNT_INFO, &account_info)?);
        payload.push_str(&tlv::field(ID_MERCHANT_CATEGORY, MERCHANT_CATEGORY_NONE)?);
        payload.push_str(&tlv::field(ID_CURRENCY, CURRENCY_BRL)?);

        if let Some(amount) = self.amount.as_ref().filter(|a| a.is_positive()) {
            payload.push_str(&tlv::field(ID_AMOUNT, &amount.to_wire())?);
        }

        payload.push_str(&tlv::field(ID_COUNTRY, COUNTRY_BR)?);
        payload.push_str(&tlv::field(
            ID_MERCHANT_NAME,
            truncate(&self.merchant_name, MAX_MERCHANT_NAME),
        )?);
        payload.push_str(&tlv::field(
            ID_MERCHANT_CITY,
            truncate(&self.merchant_city, MAX_MERCHANT_CITY),
        )?);

        let tx_id = self.tx_id.as_deref().unwrap_or(DEFAULT_TX_ID);
        let additional_data = tlv::field(ID_TX_ID, truncate(tx_id, MAX_TX_ID))?;
        payload.push_str(&tlv::field(ID_ADDITIONAL_DATA, &additional_data)?);

        // The placeholder's id + length digits are part of the checksummed
        // region; the checksum value itself is not.
        payload.push_str(CRC_PREFIX);
        let digest = crc::checksum(&payload);

        #[cfg(feature = "telemetry")]
        tracing::debug!(
            len = payload.len() + crc::CHECKSUM_LEN,
            crc = %digest,
            "encoded BR Code payload"
        );

        payload.push_str(&digest);
        Ok(payload)
    }
}

/// Truncates to the first `max` characters without splitting a character.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
