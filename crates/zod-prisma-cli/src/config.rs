//! Configuration for the `zod-prisma` binary.
//!
//! Loaded from a TOML file and overridden by `-c key=value` flags.
//!
//! Example zod-prisma.toml:
//! ```toml
//! output = "prisma/zod"
//! client = "node_modules/@prisma/client"
//!
//! [generator]
//! relationModel = true
//! modelSuffix = "Schema"
//! modelCase = "camelCase"
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Output directory for generated modules.
    pub output: Option<PathBuf>,
    /// Location of the generated Prisma client.
    pub client: Option<PathBuf>,
    /// Generator options, passed to the generator as strings.
    pub generator: BTreeMap<String, toml::Value>,
}

impl CliConfig {
    /// Load configuration from a file path.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generator options as the string bag the generator expects, with
    /// `overrides` taking precedence.
    pub fn options(&self, overrides: &[String]) -> Result<BTreeMap<String, String>> {
        let mut options: BTreeMap<String, String> = self
            .generator
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect();

        for pair in overrides {
            let Some((key, value)) = pair.split_once('=') else {
                bail!("expected key=value, got {:?}", pair);
            };
            options.insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.output.is_none());
        assert!(config.options(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zod-prisma.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
output = "prisma/zod"

[generator]
relationModel = false
modelSuffix = "Schema"
"#
        )
        .unwrap();

        let config = CliConfig::load_file(&path).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("prisma/zod")));
        assert!(config.client.is_none());

        let options = config.options(&[]).unwrap();
        assert_eq!(options["relationModel"], "false");
        assert_eq!(options["modelSuffix"], "Schema");
    }

    #[test]
    fn test_overrides_win() {
        let mut config = CliConfig::default();
        config
            .generator
            .insert("modelCase".into(), toml::Value::String("camelCase".into()));

        let options = config
            .options(&["modelCase=PascalCase".into(), "relationModel = true".into()])
            .unwrap();
        assert_eq!(options["modelCase"], "PascalCase");
        assert_eq!(options["relationModel"], "true");
    }

    #[test]
    fn test_malformed_override() {
        let config = CliConfig::default();
        assert!(config.options(&["relationModel".into()]).is_err());
    }
}
