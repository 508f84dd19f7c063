//! Configuration types for naming policy selection.

use serde::{Deserialize, Serialize};

use super::error::NamerError;
use super::sanitize::PunctuationClass;

/// Naming configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamerConfig {
    /// Which built-in policy to use
    #[serde(default)]
    pub policy: NamingPolicy,
    /// Underscore-specific knobs (optional when policy = "underscore")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underscore: Option<UnderscoreConfig>,
}

impl Default for NamerConfig {
    fn default() -> Self {
        Self {
            policy: NamingPolicy::default(),
            underscore: None,
        }
    }
}

/// Available built-in naming policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    Underscore,
    IdOnly,
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::Underscore
    }
}

/// Knobs for the underscore policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnderscoreConfig {
    /// Token joining the id to the title and replacing spaces
    #[serde(default = "default_join")]
    pub join: String,
    /// Whether the sanitized title is lowercased
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Which characters are stripped from titles
    #[serde(default)]
    pub punctuation: PunctuationClass,
}

fn default_join() -> String {
    "_".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for UnderscoreConfig {
    fn default() -> Self {
        Self {
            join: default_join(),
            lowercase: true,
            punctuation: PunctuationClass::default(),
        }
    }
}

/// Parses a naming configuration from a TOML snippet.
///
/// File and environment loading stay with the host; this only turns text
/// it already holds into a validated-by-shape config value.
pub fn namer_config_from_str(toml_str: &str) -> Result<NamerConfig, NamerError> {
    toml::from_str(toml_str).map_err(|e| NamerError::Configuration(e.to_string()))
}
