//! Supporting library for the `brcode` command-line tool.
//!
//! The binary itself lives in `main.rs`; this crate exposes the pieces
//! that are useful to test in isolation.
//!
//! # Modules
//!
//! - [`config`] — merchant configuration loaded from TOML

pub mod config;
