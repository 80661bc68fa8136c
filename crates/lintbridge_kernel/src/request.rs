//! Request types handed to a [`LintEngine`](crate::LintEngine).

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::{FilterRule, Plugin, Rule};

/// A rule with its identifier and resolved options.
#[derive(Clone)]
pub struct KernelRule {
    pub rule_id: String,
    pub rule: Arc<dyn Rule>,
    pub options: Value,
}

/// A filter rule with its identifier and resolved options.
#[derive(Clone)]
pub struct KernelFilterRule {
    pub rule_id: String,
    pub rule: Arc<dyn FilterRule>,
    pub options: Value,
}

/// A plugin with its identifier and resolved options.
#[derive(Clone)]
pub struct KernelPlugin {
    pub plugin_id: String,
    pub plugin: Arc<dyn Plugin>,
    pub options: Value,
}

impl fmt::Debug for KernelRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelRule")
            .field("rule_id", &self.rule_id)
            .field("rule", &"<dyn Rule>")
            .field("options", &self.options)
            .finish()
    }
}

impl fmt::Debug for KernelFilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelFilterRule")
            .field("rule_id", &self.rule_id)
            .field("rule", &"<dyn FilterRule>")
            .field("options", &self.options)
            .finish()
    }
}

impl fmt::Debug for KernelPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelPlugin")
            .field("plugin_id", &self.plugin_id)
            .field("plugin", &"<dyn Plugin>")
            .field("options", &self.options)
            .finish()
    }
}

/// Everything the engine needs for one linting pass.
///
/// The rule, filter rule and plugin sequences are shared, so building a
/// request per pass only copies the document text.
#[derive(Debug, Clone)]
pub struct LintRequest {
    /// Document text.
    pub text: String,
    /// File extension used to select a processor (e.g. `.md`).
    pub ext: String,
    /// Virtual file path presented to rules.
    pub file_path: String,
    pub rules: Arc<[KernelRule]>,
    pub filter_rules: Arc<[KernelFilterRule]>,
    pub plugins: Arc<[KernelPlugin]>,
}

impl LintRequest {
    /// Creates a request with no rules, filter rules or plugins.
    pub fn new(
        text: impl Into<String>,
        ext: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            ext: ext.into(),
            file_path: file_path.into(),
            rules: Arc::from(Vec::new()),
            filter_rules: Arc::from(Vec::new()),
            plugins: Arc::from(Vec::new()),
        }
    }

    /// Sets the rules.
    pub fn with_rules(mut self, rules: impl Into<Arc<[KernelRule]>>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Sets the filter rules.
    pub fn with_filter_rules(mut self, filter_rules: impl Into<Arc<[KernelFilterRule]>>) -> Self {
        self.filter_rules = filter_rules.into();
        self
    }

    /// Sets the plugins.
    pub fn with_plugins(mut self, plugins: impl Into<Arc<[KernelPlugin]>>) -> Self {
        self.plugins = plugins.into();
        self
    }
}
