//! The built-in linting engine.

use std::panic::{self, AssertUnwindSafe};

use futures_util::future::BoxFuture;
use serde_json::Value;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::rule::{FilterContext, ReportLocation, RuleContext, RuleError};
use crate::{
    Finding, KernelError, KernelPlugin, LineIndex, LintEngine, LintRequest, Location,
    SEVERITY_ERROR, SEVERITY_INFO, SEVERITY_WARNING,
};

/// Extensions handled without a plugin. Their text is linted as is.
const BUILTIN_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// The built-in linting engine.
///
/// Runs every enabled rule over the document, applies filter rules and
/// returns findings sorted by position. Inside a Tokio runtime, async
/// passes are offloaded to `spawn_blocking` so rules never block the
/// caller's runtime. Without one, the pass runs on the polling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kernel;

impl Kernel {
    /// Creates a new kernel.
    pub fn new() -> Self {
        Self
    }

    /// Runs one pass on the current thread.
    ///
    /// A report outside the document is dropped with a warning; the other
    /// findings of the pass are kept.
    pub fn lint_sync(&self, request: &LintRequest) -> Result<Vec<Finding>, KernelError> {
        debug!(
            "Linting {} as {} with {} rules",
            request.file_path,
            request.ext,
            request.rules.len()
        );

        let processor = Self::select_processor(request)?;
        let source = match processor {
            Some(plugin) => Self::preprocess(plugin, &request.text)?,
            None => request.text.clone(),
        };
        let index = LineIndex::new(&source);

        let mut findings = Vec::new();
        for rule in request.rules.iter() {
            if is_disabled(&rule.options) {
                debug!("Skipping disabled rule '{}'", rule.rule_id);
                continue;
            }

            let severity = severity_from_options(&rule.options);
            let mut ctx = RuleContext::new(&source, &request.file_path, &request.ext);
            rule.rule.lint(&mut ctx, &rule.options);

            for report in ctx.into_reports() {
                match to_finding(&rule.rule_id, report, severity, &index) {
                    Ok(finding) => findings.push(finding),
                    Err(e) => warn!("Dropping report: {}", e),
                }
            }
        }

        let filter_ctx = FilterContext {
            source: &request.text,
            file_path: &request.file_path,
        };
        let ignores: Vec<_> = request
            .filter_rules
            .iter()
            .filter(|filter| !is_disabled(&filter.options))
            .flat_map(|filter| filter.rule.ignores(&filter_ctx, &filter.options))
            .collect();
        if !ignores.is_empty() {
            findings.retain(|finding| !ignores.iter().any(|range| range.matches(finding)));
        }

        if let Some(plugin) = processor {
            findings = plugin.plugin.postprocess(findings, &plugin.options);
        }

        findings.sort_by_key(|finding| (finding.line, finding.column));
        Ok(findings)
    }

    /// Selects the plugin that processes `request.ext`.
    ///
    /// Returns `Ok(None)` when the built-in text processor applies.
    fn select_processor(request: &LintRequest) -> Result<Option<&KernelPlugin>, KernelError> {
        let plugin = request
            .plugins
            .iter()
            .filter(|plugin| !is_disabled(&plugin.options))
            .find(|plugin| plugin.plugin.can_process(&request.ext));
        if plugin.is_some() {
            return Ok(plugin);
        }

        let ext = request.ext.trim_start_matches('.');
        if BUILTIN_EXTENSIONS
            .iter()
            .any(|builtin| builtin.eq_ignore_ascii_case(ext))
        {
            Ok(None)
        } else {
            Err(KernelError::unsupported_extension(&request.ext))
        }
    }

    fn preprocess(plugin: &KernelPlugin, text: &str) -> Result<String, KernelError> {
        let processed = plugin.plugin.preprocess(text, &plugin.options)?;
        if processed.chars().count() != text.chars().count() {
            return Err(KernelError::plugin(
                &plugin.plugin_id,
                "preprocess changed the document length",
            ));
        }
        Ok(processed)
    }

    /// Runs a pass on the current thread, turning a rule panic into an error.
    fn lint_catching_panics(&self, request: &LintRequest) -> Result<Vec<Finding>, KernelError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.lint_sync(request)))
            .unwrap_or_else(|_| Err(KernelError::internal("Lint pass panicked")))
    }
}

impl LintEngine for Kernel {
    fn lint_text(
        &self,
        request: LintRequest,
    ) -> BoxFuture<'static, Result<Vec<Finding>, KernelError>> {
        let kernel = *self;
        match Handle::try_current() {
            Ok(handle) => Box::pin(async move {
                handle
                    .spawn_blocking(move || kernel.lint_sync(&request))
                    .await
                    .map_err(|e| KernelError::internal(format!("Lint pass aborted: {}", e)))?
            }),
            Err(_) => {
                debug!("No Tokio runtime, linting on the calling thread");
                Box::pin(async move { kernel.lint_catching_panics(&request) })
            }
        }
    }
}

/// A rule, filter rule or plugin configured with `false` is turned off.
fn is_disabled(options: &Value) -> bool {
    matches!(options, Value::Bool(false))
}

/// Reads the default severity from a `{ "severity": ... }` options object.
fn severity_from_options(options: &Value) -> i32 {
    match options.get("severity").and_then(Value::as_str) {
        Some("warning") => SEVERITY_WARNING,
        Some("info") => SEVERITY_INFO,
        _ => SEVERITY_ERROR,
    }
}

fn to_finding(
    rule_id: &str,
    report: RuleError,
    severity: i32,
    index: &LineIndex,
) -> Result<Finding, KernelError> {
    let (start, end) = match report.location {
        ReportLocation::Index(offset) => (offset, None),
        ReportLocation::Range(range) => {
            if range.start > range.end {
                return Err(KernelError::out_of_range(
                    rule_id,
                    format!("range {}..{} is reversed", range.start, range.end),
                ));
            }
            (range.start, Some(range.end))
        }
    };

    let position = |offset: usize| {
        index.position(offset).ok_or_else(|| {
            KernelError::out_of_range(
                rule_id,
                format!("offset {} exceeds length {}", offset, index.len()),
            )
        })
    };

    let start_pos = position(start)?;
    let mut finding = Finding::new(report.message, start_pos.line, start_pos.column)
        .with_rule_id(rule_id)
        .with_index(start as u32)
        .with_severity(severity);

    if let Some(end) = end {
        finding = finding.with_location(Location::new(start_pos, position(end)?));
    }

    Ok(finding)
}
