//! Finding types reported by a linting pass.
//!
//! The serialized shape follows textlint's `TextlintMessage`, so findings
//! produced by an external engine can be deserialized directly.

use serde::{Deserialize, Serialize};

/// Severity ordinal for warnings.
pub const SEVERITY_WARNING: i32 = 1;
/// Severity ordinal for errors.
pub const SEVERITY_ERROR: i32 = 2;
/// Severity ordinal for informational findings.
pub const SEVERITY_INFO: i32 = 3;

/// A position in source text.
///
/// Both line and column are 1-indexed. Columns count Unicode scalar
/// values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Start and end positions of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Start position.
    pub start: Position,
    /// End position.
    pub end: Position,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// One issue reported by the engine for a single document pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// The rule that produced this finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    /// The finding message.
    pub message: String,

    /// Start line (1-indexed).
    pub line: u32,

    /// Start column (1-indexed).
    pub column: u32,

    /// Start offset in chars (0-indexed).
    #[serde(default)]
    pub index: u32,

    /// Start/end span. `None` for single-point findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Severity ordinal (1 = warning, 2 = error, 3 = info).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<i32>,
}

impl Finding {
    /// Creates a single-point finding.
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            rule_id: None,
            message: message.into(),
            line,
            column,
            index: 0,
            loc: None,
            severity: None,
        }
    }

    /// Sets the rule id.
    pub fn with_rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    /// Sets the start offset.
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    /// Sets the start/end span.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Sets the severity ordinal.
    pub fn with_severity(mut self, severity: i32) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Returns the start position.
    pub fn start(&self) -> Position {
        self.loc
            .map(|loc| loc.start)
            .unwrap_or(Position::new(self.line, self.column))
    }

    /// Returns the end position (the start position for single-point findings).
    pub fn end(&self) -> Position {
        self.loc
            .map(|loc| loc.end)
            .unwrap_or(Position::new(self.line, self.column))
    }
}
