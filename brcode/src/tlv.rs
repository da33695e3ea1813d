//! TLV (tag-length-value) field emission for EMV-style payloads.
//!
//! Every field of a BR Code payload is `ID (2 digits) + LEN (2 digits,
//! zero-padded decimal) + VALUE`, where LEN is the exact length of VALUE.
//! Nested groups (merchant account information, additional data) are built
//! by emitting the inner fields first and passing their concatenation as
//! the outer value, so the outer LEN covers the whole inner string.

use crate::error::PayloadError;

/// Maximum value length a fixed 2-digit length prefix can declare.
pub const MAX_VALUE_LEN: usize = 99;

/// Emits a single TLV field: `id` + zero-padded length + `value`.
///
/// Length is the character count of `value`. BR Code payloads use the EMV
/// ASCII subset, where character count and byte count coincide; callers
/// emitting non-ASCII values get character-count semantics.
///
/// # Errors
///
/// Returns [`PayloadError::ValueTooLong`] when `value` does not fit the
/// 2-digit length prefix. Bounded fields are truncated by the payload
/// assembly before they reach this point; only unbounded values (the Pix
/// key) can trip this.
pub fn field(id: &str, value: &str) -> Result<String, PayloadError> {
    let len = value.chars().count();
    if len > MAX_VALUE_LEN {
        return Err(PayloadError::ValueTooLong {
            id: id.to_owned(),
            len,
        });
    }
    Ok(format!("{id}{len:02}{value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_basic() {
        assert_eq!(field("00", "01").unwrap(), "000201");
    }

    #[test]
    fn test_field_zero_pads_length() {
        assert_eq!(field("58", "BR").unwrap(), "5802BR");
        assert_eq!(field("62", "x").unwrap(), "6201x");
    }

    #[test]
    fn test_field_nested_group_measures_concatenation() {
        let gui = field("00", "br.gov.bcb.pix").unwrap();
        let key = field("01", "11999999999").unwrap();
        let outer = field("26", &(gui + &key)).unwrap();
        assert!(outer.starts_with("2633"));
        assert_eq!(outer.len(), 4 + 33);
    }

    #[test]
    fn test_field_at_limit() {
        let value = "x".repeat(99);
        let emitted = field("01", &value).unwrap();
        assert!(emitted.starts_with("0199"));
    }

    #[test]
    fn test_field_over_limit() {
        let value = "x".repeat(100);
        let err = field("01", &value).unwrap_err();
        match err {
            PayloadError::ValueTooLong { id, len } => {
                assert_eq!(id, "01");
                assert_eq!(len, 100);
            }
        }
    }
}
