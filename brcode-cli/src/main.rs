//! Pix BR Code command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Static, reusable payload for the configured merchant
//! brcode generate
//!
//! # Payload bound to an amount and an order reference
//! brcode generate --amount 10.00 --tx-id PED001
//!
//! # Also print a WhatsApp link carrying the copy-paste code
//! brcode generate --amount 59.90 --whatsapp
//!
//! # Validate an existing payload's trailing checksum
//! brcode check 000201...6304ABCD
//! ```
//!
//! # Environment Variables
//!
//! - `MERCHANT_CONFIG` — Path to the merchant TOML file (default: `merchant.toml`)
//! - `PIX_KEY` / `MERCHANT_NAME` / `MERCHANT_CITY` — Override the file values
//! - `RUST_LOG` — Log level filter (default: `warn`)

#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use brcode::amount::Amount;
use brcode::crc;
use brcode::format;
use brcode::payload::PixPayload;
use brcode_cli::config::MerchantConfig;

/// Generates and checks Pix BR Code payloads.
#[derive(Debug, Parser)]
#[command(name = "brcode", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generates a BR Code payload for the configured merchant.
    Generate {
        /// Transaction amount in reais; omitted, the code is static and
        /// the payer types the value.
        #[arg(long)]
        amount: Option<Decimal>,

        /// Transaction reference shown on the payer's statement.
        #[arg(long)]
        tx_id: Option<String>,

        /// Also print a WhatsApp link carrying the copy-paste code.
        #[arg(long)]
        whatsapp: bool,
    },
    /// Verifies the trailing CRC16 of an existing payload.
    Check {
        /// The full copy-paste payload.
        payload: String,
    },
}

fn main() {
    // A .env file is optional; ignore its absence.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("brcode failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            amount,
            tx_id,
            whatsapp,
        } => generate(amount, tx_id, whatsapp),
        Command::Check { payload } => check(&payload),
    }
}

fn generate(
    amount: Option<Decimal>,
    tx_id: Option<String>,
    whatsapp: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = MerchantConfig::load()?;
    tracing::info!(
        merchant = %config.merchant_name,
        city = %config.merchant_city,
        "loaded merchant configuration"
    );

    let mut request = PixPayload::new(
        config.pix_key.clone(),
        config.merchant_name.clone(),
        config.merchant_city.clone(),
    );
    if let Some(value) = amount {
        request = request.with_amount(Amount::new(value));
    }
    if let Some(reference) = tx_id {
        request = request.with_tx_id(reference);
    }

    let code = request.encode()?;
    println!("{code}");

    if whatsapp {
        let number = config
            .whatsapp_number
            .as_deref()
            .ok_or("whatsapp_number is not set in the merchant configuration")?;
        let message = match amount {
            Some(value) => format!(
                "Pagamento de {} via Pix:\n{code}",
                format::currency_brl(value)
            ),
            None => format!("Pagamento via Pix:\n{code}"),
        };
        println!("{}", format::whatsapp_link(number, &message)?);
    }

    Ok(())
}

fn check(payload: &str) -> Result<(), Box<dyn std::error::Error>> {
    if crc::verify(payload) {
        println!("OK");
        Ok(())
    } else {
        Err("payload checksum does not match its contents".into())
    }
}
