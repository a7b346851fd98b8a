//! Exported validator names.
//!
//! | `relationModel` | base validator | relation-aware validator |
//! |-----------------|----------------|--------------------------|
//! | `"default"`     | `_UserModel`   | `UserModel`              |
//! | `true`          | `UserModel`    | `RelatedUserModel`       |
//! | `false`         | `UserModel`    | (none)                   |

use crate::config::{GenerationConfig, ModelCase, RelationModel};

/// Computes validator identifiers under one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Naming<'a> {
    config: &'a GenerationConfig,
}

impl<'a> Naming<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    fn format(&self, name: &str, prefix: &str) -> String {
        let cased = match self.config.model_case {
            ModelCase::PascalCase => name.to_string(),
            ModelCase::CamelCase => lower_first(name),
        };
        format!("{}{}{}", prefix, cased, self.config.model_suffix)
    }

    /// Name of the validator over a model's non-relation fields.
    pub fn base_name(&self, model: &str) -> String {
        let prefix = match self.config.relation_model {
            RelationModel::Default => "_",
            RelationModel::Enabled | RelationModel::Disabled => "",
        };
        self.format(model, prefix)
    }

    /// Name of the validator that also covers relations.
    pub fn related_name(&self, model: &str) -> String {
        match self.config.relation_model {
            RelationModel::Default => self.format(model, ""),
            RelationModel::Enabled | RelationModel::Disabled => {
                self.format(&format!("Related{}", model), "")
            }
        }
    }

    /// Name of the interface describing a model with all relations loaded.
    pub fn complete_name(&self, model: &str) -> String {
        format!("Complete{}", model)
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
