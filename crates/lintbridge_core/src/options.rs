//! Linter options and their normalized form.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use lintbridge_kernel::{
    FilterRule, KernelFilterRule, KernelPlugin, KernelRule, LintRequest, Plugin, Rule,
};
use serde_json::Value;

use crate::LinterSettings;

/// Default file extension.
pub const DEFAULT_EXT: &str = ".md";

/// Default virtual file path.
pub const DEFAULT_FILE_PATH: &str = "document.md";

/// Insertion-ordered map with unique keys.
///
/// Re-inserting a key replaces the value but keeps its original position.
#[derive(Clone)]
struct Registry<T> {
    entries: Vec<(String, T)>,
}

impl<T> Registry<T> {
    fn insert(&mut self, id: String, value: T) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((id, value)),
        }
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

/// Options accepted by the linter factory.
///
/// Every option is optional. Rules, plugins and filter rules keep the
/// order in which they were registered.
#[derive(Clone, Default)]
pub struct LinterOptions {
    rules: Registry<Arc<dyn Rule>>,
    rules_config: HashMap<String, Value>,
    plugins: Registry<Arc<dyn Plugin>>,
    plugins_config: HashMap<String, Value>,
    filter_rules: Registry<Arc<dyn FilterRule>>,
    filter_rules_config: HashMap<String, Value>,
    ext: Option<String>,
    file_path: Option<String>,
}

impl fmt::Debug for LinterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinterOptions")
            .field("rules", &self.rules.ids().collect::<Vec<_>>())
            .field("rules_config", &self.rules_config)
            .field("plugins", &self.plugins.ids().collect::<Vec<_>>())
            .field("plugins_config", &self.plugins_config)
            .field("filter_rules", &self.filter_rules.ids().collect::<Vec<_>>())
            .field("filter_rules_config", &self.filter_rules_config)
            .field("ext", &self.ext)
            .field("file_path", &self.file_path)
            .finish()
    }
}

impl LinterOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    pub fn rule(self, rule_id: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.shared_rule(rule_id, Arc::new(rule))
    }

    /// Registers a rule that is already shared.
    pub fn shared_rule(mut self, rule_id: impl Into<String>, rule: Arc<dyn Rule>) -> Self {
        self.rules.insert(rule_id.into(), rule);
        self
    }

    /// Sets the options of a rule.
    pub fn rule_config(mut self, rule_id: impl Into<String>, config: Value) -> Self {
        self.rules_config.insert(rule_id.into(), config);
        self
    }

    /// Registers a plugin.
    pub fn plugin(mut self, plugin_id: impl Into<String>, plugin: impl Plugin + 'static) -> Self {
        self.plugins.insert(plugin_id.into(), Arc::new(plugin));
        self
    }

    /// Sets the options of a plugin.
    pub fn plugin_config(mut self, plugin_id: impl Into<String>, config: Value) -> Self {
        self.plugins_config.insert(plugin_id.into(), config);
        self
    }

    /// Registers a filter rule.
    pub fn filter_rule(
        mut self,
        rule_id: impl Into<String>,
        rule: impl FilterRule + 'static,
    ) -> Self {
        self.filter_rules.insert(rule_id.into(), Arc::new(rule));
        self
    }

    /// Sets the options of a filter rule.
    pub fn filter_rule_config(mut self, rule_id: impl Into<String>, config: Value) -> Self {
        self.filter_rules_config.insert(rule_id.into(), config);
        self
    }

    /// Sets the file extension used to select a processor.
    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }

    /// Sets the virtual file path presented to the engine.
    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Applies serialized settings on top of these options.
    ///
    /// Config entries are merged per id; `ext` and `file_path` are only
    /// replaced when the settings carry them.
    pub fn with_settings(mut self, settings: LinterSettings) -> Self {
        self.rules_config.extend(settings.rules_config);
        self.plugins_config.extend(settings.plugins_config);
        self.filter_rules_config.extend(settings.filter_rules_config);
        if settings.ext.is_some() {
            self.ext = settings.ext;
        }
        if settings.file_path.is_some() {
            self.file_path = settings.file_path;
        }
        self
    }

    /// Resolves defaults and builds the sequences handed to the engine.
    pub fn normalize(self) -> NormalizedOptions {
        let rules: Vec<KernelRule> = self
            .rules
            .entries
            .into_iter()
            .map(|(rule_id, rule)| KernelRule {
                options: resolve_config(&self.rules_config, &rule_id),
                rule_id,
                rule,
            })
            .collect();

        let filter_rules: Vec<KernelFilterRule> = self
            .filter_rules
            .entries
            .into_iter()
            .map(|(rule_id, rule)| KernelFilterRule {
                options: resolve_config(&self.filter_rules_config, &rule_id),
                rule_id,
                rule,
            })
            .collect();

        let plugins: Vec<KernelPlugin> = self
            .plugins
            .entries
            .into_iter()
            .map(|(plugin_id, plugin)| KernelPlugin {
                options: resolve_config(&self.plugins_config, &plugin_id),
                plugin_id,
                plugin,
            })
            .collect();

        NormalizedOptions {
            rules: rules.into(),
            filter_rules: filter_rules.into(),
            plugins: plugins.into(),
            ext: self.ext.unwrap_or_else(|| DEFAULT_EXT.to_string()),
            file_path: self.file_path.unwrap_or_else(|| DEFAULT_FILE_PATH.to_string()),
        }
    }
}

/// Returns the configured value, or `true` when it is absent or null.
fn resolve_config(configs: &HashMap<String, Value>, id: &str) -> Value {
    match configs.get(id) {
        Some(Value::Null) | None => Value::Bool(true),
        Some(value) => value.clone(),
    }
}

/// Options with every default resolved, built once per linter.
#[derive(Debug, Clone)]
pub struct NormalizedOptions {
    pub rules: Arc<[KernelRule]>,
    pub filter_rules: Arc<[KernelFilterRule]>,
    pub plugins: Arc<[KernelPlugin]>,
    pub ext: String,
    pub file_path: String,
}

impl NormalizedOptions {
    /// Returns true if at least one rule is registered.
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Builds the request for one pass over `text`.
    pub fn request(&self, text: &str) -> LintRequest {
        LintRequest {
            text: text.to_owned(),
            ext: self.ext.clone(),
            file_path: self.file_path.clone(),
            rules: Arc::clone(&self.rules),
            filter_rules: Arc::clone(&self.filter_rules),
            plugins: Arc::clone(&self.plugins),
        }
    }
}

impl Default for NormalizedOptions {
    fn default() -> Self {
        LinterOptions::default().normalize()
    }
}
