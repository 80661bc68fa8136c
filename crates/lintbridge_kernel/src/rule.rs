//! Capability traits for rules, filter rules and plugins.
//!
//! The kernel only routes these objects: it hands each one the document
//! and its resolved options, then collects what it reports.

use std::ops::Range;

use serde_json::Value;

use crate::{Finding, KernelError};

/// An error reported by a rule.
///
/// Locations are char offsets into the whole document. A report with no
/// location points at the start of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleError {
    /// The message shown to the user.
    pub message: String,
    /// Reported location.
    pub location: ReportLocation,
}

/// Where a [`RuleError`] points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLocation {
    /// A single char offset.
    Index(usize),
    /// A char range (`start..end`).
    Range(Range<usize>),
}

impl RuleError {
    /// Creates an error pointing at the start of the document.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: ReportLocation::Index(0),
        }
    }

    /// Points the error at a single char offset.
    pub fn at(mut self, index: usize) -> Self {
        self.location = ReportLocation::Index(index);
        self
    }

    /// Points the error at a char range.
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.location = ReportLocation::Range(range);
        self
    }
}

/// Per-rule view of the document being linted.
#[derive(Debug)]
pub struct RuleContext<'a> {
    source: &'a str,
    file_path: &'a str,
    ext: &'a str,
    reports: Vec<RuleError>,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn new(source: &'a str, file_path: &'a str, ext: &'a str) -> Self {
        Self {
            source,
            file_path,
            ext,
            reports: Vec::new(),
        }
    }

    /// Returns the (preprocessed) document text.
    pub fn source(&self) -> &str {
        self.source
    }

    /// Returns the virtual file path of the document.
    pub fn file_path(&self) -> &str {
        self.file_path
    }

    /// Returns the file extension the document was processed as.
    pub fn ext(&self) -> &str {
        self.ext
    }

    /// Reports an error.
    pub fn report(&mut self, error: RuleError) {
        self.reports.push(error);
    }

    pub(crate) fn into_reports(self) -> Vec<RuleError> {
        self.reports
    }
}

/// A lint rule: given document text, produces zero or more reports.
pub trait Rule: Send + Sync {
    /// Lints the document held by `ctx`.
    fn lint(&self, ctx: &mut RuleContext<'_>, options: &Value);
}

impl<F> Rule for F
where
    F: Fn(&mut RuleContext<'_>, &Value) + Send + Sync,
{
    fn lint(&self, ctx: &mut RuleContext<'_>, options: &Value) {
        self(ctx, options)
    }
}

/// A char range in which findings are suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRange {
    /// Suppressed char range (`start..end`).
    pub range: Range<usize>,
    /// Only suppress findings of this rule. `None` suppresses every rule.
    pub rule_id: Option<String>,
}

impl IgnoreRange {
    /// Suppresses every rule within `range`.
    pub fn all(range: Range<usize>) -> Self {
        Self {
            range,
            rule_id: None,
        }
    }

    /// Suppresses a single rule within `range`.
    pub fn rule(range: Range<usize>, rule_id: impl Into<String>) -> Self {
        Self {
            range,
            rule_id: Some(rule_id.into()),
        }
    }

    /// Returns true if `finding` falls inside this range.
    pub fn matches(&self, finding: &Finding) -> bool {
        if !self.range.contains(&(finding.index as usize)) {
            return false;
        }
        match (&self.rule_id, &finding.rule_id) {
            (None, _) => true,
            (Some(ignored), Some(rule_id)) => ignored == rule_id,
            (Some(_), None) => false,
        }
    }
}

/// Document view handed to filter rules.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    /// The original document text.
    pub source: &'a str,
    /// Virtual file path of the document.
    pub file_path: &'a str,
}

/// A post-filter rule that suppresses findings.
pub trait FilterRule: Send + Sync {
    /// Returns the ranges whose findings should be dropped.
    fn ignores(&self, ctx: &FilterContext<'_>, options: &Value) -> Vec<IgnoreRange>;
}

/// A document processor selected by file extension.
pub trait Plugin: Send + Sync {
    /// Extensions handled by this plugin, without the leading dot.
    fn extensions(&self) -> &[&str];

    /// Rewrites the text rules will see.
    ///
    /// The result must have the same length in chars so reported offsets
    /// still refer to the original document.
    fn preprocess(&self, text: &str, _options: &Value) -> Result<String, KernelError> {
        Ok(text.to_owned())
    }

    /// Adjusts the findings of a pass.
    fn postprocess(&self, findings: Vec<Finding>, _options: &Value) -> Vec<Finding> {
        findings
    }

    /// Returns true if this plugin handles `ext` (with or without a leading dot).
    fn can_process(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.extensions()
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }
}
