//! Merchant configuration for the BR Code CLI.
//!
//! Loads the merchant's Pix settings from a TOML file, with support for
//! environment variable expansion in string values. Variables use `$VAR`
//! or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! pix_key = "$PIX_KEY"
//! merchant_name = "LOJA DA RITA"
//! merchant_city = "SAO PAULO"
//! whatsapp_number = "11999998888"
//! ```
//!
//! # Environment Variables
//!
//! - `MERCHANT_CONFIG` — Path to the configuration file (default: `merchant.toml`)
//! - `PIX_KEY` / `MERCHANT_NAME` / `MERCHANT_CITY` — Override the file values
//! - Any variable referenced by `$VAR` / `${VAR}` in the file

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Merchant settings consumed by `brcode generate`.
///
/// These are the values every payload for this merchant shares; the
/// amount and transaction reference vary per charge and come in as CLI
/// flags instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// Pix key payments are addressed to (phone, tax id, email, or a
    /// random key).
    pub pix_key: String,

    /// Display name shown by the payer's banking app. The first 25
    /// characters reach the payload.
    pub merchant_name: String,

    /// Merchant city. The first 15 characters reach the payload.
    pub merchant_city: String,

    /// WhatsApp number charges are sent from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
}

impl MerchantConfig {
    /// Loads configuration from the path given by the `MERCHANT_CONFIG`
    /// environment variable, falling back to `merchant.toml` in the
    /// current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path =
            std::env::var("MERCHANT_CONFIG").unwrap_or_else(|_| "merchant.toml".to_owned());
        Self::load_from(Path::new(&path))
    }

    /// Loads configuration from a specific file path.
    ///
    /// After parsing, `PIX_KEY`, `MERCHANT_NAME`, and `MERCHANT_CITY`
    /// environment variables override the file values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&expand_env_vars(&content))?;

        if let Ok(key) = std::env::var("PIX_KEY") {
            config.pix_key = key;
        }
        if let Ok(name) = std::env::var("MERCHANT_NAME") {
            config.merchant_name = name;
        }
        if let Ok(city) = std::env::var("MERCHANT_CITY") {
            config.merchant_city = city;
        }

        Ok(config)
    }
}

/// Expands `$VAR` and `${VAR}` references from the process environment.
///
/// Unresolved references are left as-is.
fn expand_env_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.split_once('}') {
                Some((name, _)) => (name, name.len() + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        if name.is_empty() {
            out.push('$');
            rest = after;
        } else if let Ok(value) = std::env::var(name) {
            out.push_str(&value);
            rest = &after[consumed..];
        } else {
            out.push('$');
            out.push_str(&after[..consumed]);
            rest = &after[consumed..];
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: MerchantConfig = toml::from_str(
            r#"
            pix_key = "loja@example.com"
            merchant_name = "LOJA DA RITA"
            merchant_city = "SAO PAULO"
            whatsapp_number = "11999998888"
            "#,
        )
        .unwrap();
        assert_eq!(config.pix_key, "loja@example.com");
        assert_eq!(config.merchant_name, "LOJA DA RITA");
        assert_eq!(config.merchant_city, "SAO PAULO");
        assert_eq!(config.whatsapp_number.as_deref(), Some("11999998888"));
    }

    #[test]
    fn test_whatsapp_number_is_optional() {
        let config: MerchantConfig = toml::from_str(
            r#"
            pix_key = "11999998888"
            merchant_name = "LOJA"
            merchant_city = "RECIFE"
            "#,
        )
        .unwrap();
        assert!(config.whatsapp_number.is_none());
    }

    #[test]
    fn test_expand_resolves_known_variable() {
        // PATH is set in every environment the tests run in.
        let expected = std::env::var("PATH").unwrap();
        assert_eq!(expand_env_vars("$PATH"), expected);
        assert_eq!(expand_env_vars("${PATH}"), expected);
        assert_eq!(expand_env_vars("pre $PATH post"), format!("pre {expected} post"));
    }

    #[test]
    fn test_expand_leaves_unresolved_variable() {
        assert_eq!(
            expand_env_vars("$BRCODE_TEST_UNSET_VARIABLE"),
            "$BRCODE_TEST_UNSET_VARIABLE"
        );
        assert_eq!(
            expand_env_vars("${BRCODE_TEST_UNSET_VARIABLE}"),
            "${BRCODE_TEST_UNSET_VARIABLE}"
        );
    }

    #[test]
    fn test_expand_leaves_bare_dollar_signs() {
        assert_eq!(expand_env_vars("R$ 10,00"), "R$ 10,00");
        assert_eq!(expand_env_vars("$"), "$");
        assert_eq!(expand_env_vars("${unclosed"), "${unclosed");
    }

    #[test]
    fn test_load_from_reads_file() {
        let path = std::env::temp_dir().join("brcode-merchant-config-test.toml");
        std::fs::write(
            &path,
            "pix_key = \"11999998888\"\nmerchant_name = \"LOJA\"\nmerchant_city = \"RECIFE\"\n",
        )
        .unwrap();
        let config = MerchantConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.merchant_city, "RECIFE");
    }
}
