use serde::Deserialize;
use std::sync::OnceLock;

use super::enumerate::DEFAULT_ENUMERATION_LIMIT;
use super::error::Error;

const DEFAULT_CONFIG_TOML: &str = include_str!("../../resources/default.scope.toml");

static DEFAULT_CONFIG: OnceLock<ScopeConfig> = OnceLock::new();

/// Tunables for enumeration and coverage analysis.
///
/// Every field has a serde default, so a partial TOML document only overrides
/// what it names.
///
/// ```
/// use patent_scope::load_config;
///
/// let config = load_config(Some("[coverage]\nmin_confidence = 0.75\n")).unwrap();
/// assert_eq!(config.coverage.min_confidence, 0.75);
/// assert_eq!(config.enumeration.default_limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScopeConfig {
    #[serde(default)]
    pub enumeration: EnumerationConfig,
    #[serde(default)]
    pub coverage: CoverageConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumerationConfig {
    /// Examples produced when no explicit limit is requested.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_ENUMERATION_LIMIT
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoverageConfig {
    /// Minimum match confidence for a molecule to count as covered.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

fn default_min_confidence() -> f64 {
    0.0
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
        }
    }
}

impl CoverageConfig {
    /// Rejects a `min_confidence` that is NaN or outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(Error::InvalidSetting {
                key: "coverage.min_confidence",
                value: self.min_confidence,
                range: "0.0..=1.0",
            });
        }
        Ok(())
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        default_config().clone()
    }
}

/// Parses `custom_toml`, or returns the embedded defaults when it is `None`.
///
/// # Errors
///
/// Returns [`Error::ConfigParse`] for malformed TOML and [`Error::InvalidSetting`]
/// when a value parses but is out of range.
pub fn load_config(custom_toml: Option<&str>) -> Result<ScopeConfig, Error> {
    match custom_toml {
        Some(toml) => {
            let config: ScopeConfig = toml::from_str(toml)?;
            config.coverage.validate()?;
            Ok(config)
        }
        None => Ok(default_config().clone()),
    }
}

pub fn default_config() -> &'static ScopeConfig {
    DEFAULT_CONFIG.get_or_init(|| {
        toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("Failed to parse embedded default configuration. This is a library bug.")
    })
}
