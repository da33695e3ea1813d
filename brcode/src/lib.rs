#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Pix BR Code payload encoding.
//!
//! This crate builds the EMV-style merchant payment string behind every Pix
//! QR code and "copia e cola" text. A payload is a flat sequence of TLV
//! (tag-length-value) fields closed by a CRC-16/CCITT-FALSE checksum; the
//! same string is rendered as a QR code or pasted directly into a banking
//! app.
//!
//! # Overview
//!
//! The caller fills a [`payload::PixPayload`] with the receiving key,
//! merchant name and city, and optionally an amount and a transaction
//! reference. [`payload::PixPayload::encode`] returns the complete,
//! checksummed string. A payload without an amount is static — reusable for
//! any value — while one carrying the amount field is bound to that exact
//! charge.
//!
//! Encoding is pure and synchronous: no I/O, no shared state, identical
//! inputs always produce an identical string.
//!
//! # Modules
//!
//! - [`amount`] - Transaction amount with fixed two-decimal wire rendering
//! - [`crc`] - CRC-16/CCITT-FALSE checksum engine
//! - [`error`] - Payload assembly errors
//! - [`format`] - pt-BR display formatting and WhatsApp deep links
//! - [`payload`] - The payload value object and TLV assembly
//! - [`tlv`] - TLV field emission
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod amount;
pub mod crc;
pub mod error;
pub mod format;
pub mod payload;
pub mod tlv;
