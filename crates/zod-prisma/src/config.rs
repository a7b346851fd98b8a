//! Generator options.
//!
//! Options arrive as an untyped string map (the `generator` block of a Prisma
//! schema). [`GenerationConfig::resolve`] applies defaults and rejects values
//! outside each option's set.
//!
//! ```prisma
//! generator zod {
//!   provider      = "zod-prisma"
//!   relationModel = "default"   // "default", "true" or "false"
//!   modelSuffix   = "Model"
//!   modelCase     = "PascalCase" // or "camelCase"
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;

/// Whether and how relation-aware validators are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelationModel {
    /// Relation-aware validator takes the plain name; the base one gets a `_` prefix.
    #[default]
    Default,
    /// Relation-aware validator is named `Related<Model>`.
    Enabled,
    /// No relation-aware validators at all.
    Disabled,
}

impl RelationModel {
    pub fn is_enabled(self) -> bool {
        self != RelationModel::Disabled
    }
}

/// Case applied to model names before the suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelCase {
    #[default]
    PascalCase,
    CamelCase,
}

/// Resolved generator options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub relation_model: RelationModel,
    pub model_suffix: String,
    pub model_case: ModelCase,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            relation_model: RelationModel::Default,
            model_suffix: "Model".to_string(),
            model_case: ModelCase::PascalCase,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for option `{option}` (expected one of: {expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("malformed generator options: {0}")]
    Malformed(String),
}

/// Options as written by the user, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    relation_model: Option<String>,
    model_suffix: Option<String>,
    model_case: Option<String>,
}

impl GenerationConfig {
    /// Validate and default an options bag.
    pub fn resolve(options: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        for key in options.keys() {
            if !matches!(
                key.as_str(),
                "relationModel" | "modelSuffix" | "modelCase"
            ) {
                tracing::debug!(option = %key, "ignoring unknown generator option");
            }
        }

        let raw = RawConfig {
            relation_model: options.get("relationModel").cloned(),
            model_suffix: options.get("modelSuffix").cloned(),
            model_case: options.get("modelCase").cloned(),
        };
        Self::from_raw(raw)
    }

    /// Validate options given as a JSON object (e.g. a host's `config` field).
    pub fn from_json(options: &serde_json::Value) -> Result<Self, ConfigError> {
        let raw = RawConfig::deserialize(options)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let relation_model = match raw.relation_model.as_deref() {
            None | Some("default") => RelationModel::Default,
            Some("true") => RelationModel::Enabled,
            Some("false") => RelationModel::Disabled,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    option: "relationModel",
                    value: other.to_string(),
                    expected: "\"default\", \"true\", \"false\"",
                });
            }
        };

        let model_case = match raw.model_case.as_deref() {
            None | Some("PascalCase") => ModelCase::PascalCase,
            Some("camelCase") => ModelCase::CamelCase,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    option: "modelCase",
                    value: other.to_string(),
                    expected: "\"PascalCase\", \"camelCase\"",
                });
            }
        };

        Ok(Self {
            relation_model,
            model_suffix: raw.model_suffix.unwrap_or_else(|| "Model".to_string()),
            model_case,
        })
    }
}
