use serde::{Deserialize, Serialize};

use crate::core::errors::{FinanceError, FinanceResult};
use crate::currency::DEFAULT_SYMBOL;

/// User preferences. The ledger itself is never part of this file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub color_enabled: bool,
    pub log_level: String,
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_SYMBOL.into(),
            color_enabled: true,
            log_level: "warn".into(),
            show_banner: true,
        }
    }
}

/// Keys accepted by `config set`.
pub const CONFIG_KEYS: &[&str] = &["currency", "color", "log-level", "banner"];

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

impl Config {
    /// Applies a `config set <key> <value>` pair.
    pub fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        match key.to_ascii_lowercase().as_str() {
            "currency" => self.currency_symbol = value.trim().to_string(),
            "color" => self.color_enabled = parse_flag(value)?,
            "banner" => self.show_banner = parse_flag(value)?,
            "log-level" => {
                let level = value.trim().to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(FinanceError::InvalidInput(format!(
                        "log level must be one of: {}",
                        LOG_LEVELS.join(", ")
                    )));
                }
                self.log_level = level;
            }
            other => {
                return Err(FinanceError::InvalidInput(format!(
                    "unknown config key `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency", self.currency_symbol.clone()),
            ("color", on_off(self.color_enabled).into()),
            ("log-level", self.log_level.clone()),
            ("banner", on_off(self.show_banner).into()),
        ]
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn parse_flag(raw: &str) -> FinanceResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(FinanceError::InvalidInput(format!(
            "expected on/off, got `{other}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_known_keys() {
        let mut config = Config::default();
        config.set("currency", "$").unwrap();
        config.set("color", "off").unwrap();
        config.set("LOG-LEVEL", "Debug").unwrap();
        config.set("banner", "no").unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert!(!config.color_enabled);
        assert_eq!(config.log_level, "debug");
        assert!(!config.show_banner);
    }

    #[test]
    fn set_rejects_unknown_keys_and_values() {
        let mut config = Config::default();
        assert!(config.set("theme", "dark").is_err());
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("log-level", "loud").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency_symbol":"€"}"#).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert!(config.color_enabled);
        assert_eq!(config.log_level, "warn");
    }
}
