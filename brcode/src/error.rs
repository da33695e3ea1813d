//! Error types for BR Code payload assembly.

/// Errors that can occur while assembling a BR Code payload.
///
/// The encoder is total over well-formed inputs: the merchant name, city,
/// and transaction reference are truncated to their field maximums before
/// emission, so the only failure path is a value the fixed-width TLV
/// length prefix cannot describe (in practice, an oversized Pix key).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PayloadError {
    /// A field value exceeds the 99 characters a 2-digit length prefix can declare.
    #[error("field {id} value is {len} characters, above the TLV limit of 99")]
    ValueTooLong {
        /// The 2-digit field identifier.
        id: String,
        /// The offending value's character length.
        len: usize,
    },
}
