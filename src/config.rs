//! `tsa.json` configuration.
//!
//! ```json
//! { "maxDepth": 512, "eagerImports": "true" }
//! ```
//!
//! Every key is optional. Boolean options also accept the strings `"true"`,
//! `"false"`, `"yes"`, `"no"`, `"on"`, `"off"`, `"1"` and `"0"`.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tsa_ast::MaterializeOptions;

fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsaConfig {
    /// Maximum node nesting depth accepted by the materializer. Unbounded when
    /// absent.
    #[serde(default)]
    pub max_depth: Option<u32>,
    /// Resolve import bindings as soon as a file is loaded instead of on the
    /// first import query.
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub eager_imports: Option<bool>,
}

impl TsaConfig {
    pub fn materialize_options(&self) -> MaterializeOptions {
        MaterializeOptions {
            max_depth: self.max_depth,
        }
    }

    pub fn eager_imports(&self) -> bool {
        self.eager_imports.unwrap_or(false)
    }
}

pub fn parse_config(source: &str) -> Result<TsaConfig> {
    let config = serde_json::from_str(source).context("failed to parse tsa config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<TsaConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tsa config: {}", path.display()))?;
    let config = parse_config(&source)
        .with_context(|| format!("failed to parse tsa config: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        max_depth = ?config.max_depth,
        eager_imports = config.eager_imports(),
        "loaded config"
    );
    Ok(config)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
