//! # lintbridge
//!
//! Connects a text linting engine to a code editor.
//!
//! This crate provides:
//! - `LinterOptions`, normalized once into the request the engine expects
//! - `TextlintLinter`, callable pull-style (`lint`) or push-style
//!   (`lint_with_callback`)
//! - Conversion of engine findings into editor diagnostics, either as
//!   0-indexed line/column pairs or absolute offsets
//!
//! ## Example
//!
//! ```rust,ignore
//! use lintbridge::{LinterOptions, RuleContext, RuleError, create_textlint_linter};
//!
//! fn no_todo(ctx: &mut RuleContext<'_>, _options: &serde_json::Value) {
//!     if let Some(byte_idx) = ctx.source().find("TODO") {
//!         // Reports take char offsets.
//!         let idx = ctx.source()[..byte_idx].chars().count();
//!         ctx.report(RuleError::new("Found TODO").at(idx));
//!     }
//! }
//!
//! let options = LinterOptions::new().rule("no-todo", no_todo);
//!
//! let linter = create_textlint_linter(options);
//! for diagnostic in linter.lint("TODO: write docs").await {
//!     println!("{:?} {}: {}", diagnostic.from, diagnostic.severity, diagnostic.message);
//! }
//! ```

mod config;
mod error;
mod linter;
pub mod mapping;
mod options;

pub use config::LinterSettings;
pub use error::ConfigError;
pub use linter::{LinterBuilder, TextlintLinter, create_textlint_linter};
pub use mapping::{Diagnostic, LineCh, LineColumnModel, OffsetModel, PositionModel, Severity};
pub use options::{DEFAULT_EXT, DEFAULT_FILE_PATH, LinterOptions, NormalizedOptions};

pub use lintbridge_kernel::{
    FilterContext, FilterRule, Finding, IgnoreRange, Kernel, KernelError, LintEngine, LintRequest,
    Plugin, Rule, RuleContext, RuleError,
};
