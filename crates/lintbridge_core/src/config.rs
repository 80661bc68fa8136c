//! Serialized linter settings.
//!
//! Rule, plugin and filter implementations are Rust values and can only
//! be registered in code. Their options, along with the file extension
//! and virtual file path, can also come from a JSON or JSONC document:
//!
//! ```jsonc
//! {
//!   // options per rule id
//!   "rulesConfig": { "no-todo": { "severity": "warning" } },
//!   "filterRulesConfig": { "allow-comments": true },
//!   "ext": ".md",
//!   "filePath": "notes/today.md"
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ConfigError;

/// Data half of the linter options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LinterSettings {
    /// Options per rule id.
    #[serde(default)]
    pub rules_config: HashMap<String, Value>,

    /// Options per plugin id.
    #[serde(default)]
    pub plugins_config: HashMap<String, Value>,

    /// Options per filter rule id.
    #[serde(default)]
    pub filter_rules_config: HashMap<String, Value>,

    /// File extension used to select a processor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,

    /// Virtual file path presented to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl LinterSettings {
    /// Parses settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses settings from a JSONC string (comments and trailing commas allowed).
    pub fn from_jsonc(content: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| ConfigError::parse(e.to_string()))?
            .unwrap_or(Value::Object(serde_json::Map::new()));

        Ok(serde_json::from_value(value)?)
    }

    /// Loads settings from a `.json` or `.jsonc` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_jsonc(&content)
    }
}
