//! Finding to editor diagnostic conversion.
//!
//! Two editor coordinate models are supported:
//!
//! - [`LineColumnModel`]: 0-indexed `{ line, ch }` pairs
//! - [`OffsetModel`]: absolute char offsets from the start of the document
//!
//! Conversion never fails. Locations outside the document are clamped so
//! one malformed finding cannot suppress the rest of the batch.

use std::fmt;

use lintbridge_kernel::{Finding, LineIndex, Position};
use serde::{Deserialize, Serialize};

/// Severity label shown by the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Maps an engine severity ordinal to a label.
    ///
    /// `1` is a warning, `2` an error and `3` info. Anything else,
    /// including no severity at all, is an error.
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(1) => Severity::Warning,
            Some(2) => Severity::Error,
            Some(3) => Severity::Info,
            _ => Severity::Error,
        }
    }

    /// Returns the label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 0-indexed line/column editor position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineCh {
    /// Line (0-indexed).
    pub line: u32,
    /// Column in chars (0-indexed).
    pub ch: u32,
}

impl LineCh {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, ch: u32) -> Self {
        Self { line, ch }
    }
}

/// An editor coordinate model.
pub trait PositionModel: Send + Sync + 'static {
    /// The editor's position type.
    type Position: Clone + fmt::Debug + PartialEq + Send + 'static;

    /// Converts a 1-indexed engine position into the editor's coordinates.
    fn to_editor(&self, index: &LineIndex, position: Position) -> Self::Position;
}

/// Maps to 0-indexed `{ line, ch }` pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineColumnModel;

impl PositionModel for LineColumnModel {
    type Position = LineCh;

    fn to_editor(&self, index: &LineIndex, position: Position) -> LineCh {
        let (line, ch) = clamp(index, position);
        LineCh::new(line as u32, ch as u32)
    }
}

/// Maps to absolute char offsets.
#[derive(Debug, Default, Clone, Copy)]
pub struct OffsetModel;

impl PositionModel for OffsetModel {
    type Position = usize;

    fn to_editor(&self, index: &LineIndex, position: Position) -> usize {
        let (line, ch) = clamp(index, position);
        index.line_start(line).unwrap_or(0) + ch
    }
}

/// Converts to a 0-indexed (line, column) pair inside the document.
///
/// Zero values count as the first line/column. Lines past the end clamp
/// to the last line, columns past the end of a line clamp to its length.
fn clamp(index: &LineIndex, position: Position) -> (usize, usize) {
    let last_line = index.line_count().saturating_sub(1);
    let line = (position.line.saturating_sub(1) as usize).min(last_line);
    let line_len = index.line_len(line).unwrap_or(0);
    let ch = (position.column.saturating_sub(1) as usize).min(line_len);
    (line, ch)
}

/// An editor-ready diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic<P> {
    pub from: P,
    pub to: P,
    pub severity: Severity,
    pub message: String,
    /// Id of the rule that produced the finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Converts one finding.
///
/// Span endpoints are mapped independently and never reordered.
pub fn to_diagnostic<M: PositionModel>(
    model: &M,
    index: &LineIndex,
    finding: &Finding,
) -> Diagnostic<M::Position> {
    Diagnostic {
        from: model.to_editor(index, finding.start()),
        to: model.to_editor(index, finding.end()),
        severity: Severity::from_code(finding.severity),
        message: finding.message.clone(),
        source: finding.rule_id.clone(),
    }
}

/// Converts every finding of a pass over `text`.
pub fn to_diagnostics<M: PositionModel>(
    model: &M,
    text: &str,
    findings: &[Finding],
) -> Vec<Diagnostic<M::Position>> {
    let index = LineIndex::new(text);
    findings
        .iter()
        .map(|finding| to_diagnostic(model, &index, finding))
        .collect()
}
