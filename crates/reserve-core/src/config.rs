//! Genesis and operator configuration
//!
//! Layering is defaults, then a TOML file, then `RESERVE_*` environment
//! variables, then [`ReserveConfig::validate`]. The supply cap is deliberately
//! absent: it is a compile-time constant.

use crate::errors::{ReserveError, Result};
use crate::identifiers::AccountId;
use crate::metadata::{ReservePublicKey, TokenMetadata};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "RESERVE_";

/// Sections that environment overrides may target
const ENV_SECTIONS: [&str; 3] = ["token", "genesis", "logging"];

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReserveConfig {
    /// Token metadata
    pub token: TokenConfig,
    /// Initial state
    pub genesis: GenesisConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Token metadata section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub uri: Option<String>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        let metadata = TokenMetadata::default();
        Self {
            name: metadata.name,
            symbol: metadata.symbol,
            uri: metadata.uri,
        }
    }
}

/// Genesis section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisConfig {
    /// Initial controller: a UUID, or a name that is hashed into one
    pub controller: String,
    /// Hex-encoded compressed reserve wallet public key
    pub reserve_public_key: Option<String>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            controller: "controller".to_string(),
            reserve_public_key: None,
        }
    }
}

/// Logging section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or an env-filter directive
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ReserveConfig {
    /// Parse a TOML document on top of the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReserveError::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `RESERVE_SECTION_KEY=value` overrides from the process environment
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply overrides from an explicit set of variables
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(rest) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let rest = rest.to_lowercase();
            let Some((section, field)) = rest.split_once('_') else {
                continue;
            };
            if !ENV_SECTIONS.contains(&section) {
                tracing::debug!(variable = key.as_ref(), "ignoring environment variable outside config sections");
                continue;
            }
            tracing::debug!(section, field, "config override from environment");
            self.set_from_string(&format!("{section}.{field}"), value.as_ref())?;
        }
        Ok(())
    }

    /// Set a single value by dotted key
    pub fn set_from_string(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "token.name" => self.token.name = value.to_string(),
            "token.symbol" => self.token.symbol = value.to_string(),
            "token.uri" => self.token.uri = non_empty(value),
            "genesis.controller" => self.genesis.controller = value.to_string(),
            "genesis.reserve_public_key" => self.genesis.reserve_public_key = non_empty(value),
            "logging.level" => self.logging.level = value.to_string(),
            other => {
                return Err(ReserveError::config(format!("unknown config key: {other}")));
            }
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.token.name.trim().is_empty() {
            return Err(ReserveError::config("token.name must not be empty"));
        }
        if self.token.symbol.trim().is_empty() {
            return Err(ReserveError::config("token.symbol must not be empty"));
        }
        if self.genesis.controller.trim().is_empty() {
            return Err(ReserveError::config("genesis.controller must not be empty"));
        }
        self.reserve_public_key()?;
        Ok(())
    }

    /// Metadata fixed at genesis
    pub fn token_metadata(&self) -> TokenMetadata {
        TokenMetadata::new(
            self.token.name.clone(),
            self.token.symbol.clone(),
            self.token.uri.clone(),
        )
    }

    /// Initial controller identity
    pub fn controller(&self) -> AccountId {
        AccountId::parse_or_named(self.genesis.controller.trim())
    }

    /// Decoded reserve wallet key, if configured
    pub fn reserve_public_key(&self) -> Result<Option<ReservePublicKey>> {
        self.genesis
            .reserve_public_key
            .as_deref()
            .map(|hex| {
                hex.parse()
                    .map_err(|e| ReserveError::config(format!("genesis.reserve_public_key: {e}")))
            })
            .transpose()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    const KEY: &str = "03556902f83defc6c63a7eb56a2d8ee4baee109f2126aac41e4f9e3a0835f34bc5";

    #[test]
    fn defaults_validate() {
        let config = ReserveConfig::default();
        config.validate().unwrap();
        assert_eq!(config.controller(), AccountId::from_name("controller"));
        assert_eq!(config.token_metadata().decimals, 8);
    }

    #[test]
    fn loads_partial_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[token]\nname = \"Test Coin\"\nsymbol = \"TST\"\n\n[genesis]\nreserve_public_key = \"{KEY}\""
        )
        .unwrap();

        let config = ReserveConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.token.name, "Test Coin");
        assert_eq!(config.token.uri, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.reserve_public_key().unwrap().unwrap().to_string(), KEY);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = ReserveConfig::load_from_file(Path::new("/nonexistent/reserve.toml")).unwrap_err();
        assert_matches!(err, ReserveError::Config { .. });
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = ReserveConfig::default();
        config
            .merge_with_vars([
                ("RESERVE_TOKEN_URI", "https://example.org/token.json"),
                ("RESERVE_GENESIS_RESERVE_PUBLIC_KEY", KEY),
                ("RESERVE_LOGGING_LEVEL", "debug"),
                ("UNRELATED", "ignored"),
            ])
            .unwrap();
        assert_eq!(config.token.uri.as_deref(), Some("https://example.org/token.json"));
        assert_eq!(config.genesis.reserve_public_key.as_deref(), Some(KEY));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unknown_env_key_is_rejected() {
        let mut config = ReserveConfig::default();
        let err = config
            .merge_with_vars([("RESERVE_TOKEN_SUPPLY", "1")])
            .unwrap_err();
        assert_matches!(err, ReserveError::Config { .. });
    }

    #[test]
    fn variables_outside_config_sections_are_ignored() {
        let mut config = ReserveConfig::default();
        config
            .merge_with_vars([("RESERVE_DATA_DIR", "/var/lib/reserve"), ("RESERVE_HOME", "/tmp")])
            .unwrap();
        assert_eq!(config, ReserveConfig::default());
    }

    #[test]
    fn bad_reserve_key_fails_validation() {
        let mut config = ReserveConfig::default();
        config.genesis.reserve_public_key = Some("04abcd".to_string());
        assert_matches!(config.validate(), Err(ReserveError::Config { .. }));
    }
}
