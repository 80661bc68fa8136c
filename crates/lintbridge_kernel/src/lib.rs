//! # lintbridge_kernel
//!
//! In-process text linting engine for lintbridge.
//!
//! This crate provides:
//! - Capability traits for rules, filter rules and plugins
//! - The `LintRequest` handed to an engine for one pass
//! - The `Finding` type an engine reports
//! - The `LintEngine` trait and the built-in `Kernel` engine
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lintbridge_kernel::{Kernel, KernelRule, LintRequest, RuleContext, RuleError};
//!
//! let rule = KernelRule {
//!     rule_id: "no-todo".to_string(),
//!     rule: Arc::new(|ctx: &mut RuleContext<'_>, _: &serde_json::Value| {
//!         if let Some(byte_idx) = ctx.source().find("TODO") {
//!             let idx = ctx.source()[..byte_idx].chars().count();
//!             ctx.report(RuleError::new("Found TODO").at(idx));
//!         }
//!     }),
//!     options: serde_json::Value::Bool(true),
//! };
//!
//! let request = LintRequest::new("a TODO", ".md", "document.md").with_rules(vec![rule]);
//! let findings = Kernel::new().lint_sync(&request)?;
//! ```

mod engine;
mod error;
mod finding;
mod kernel;
mod request;
mod rule;
mod source;

pub use engine::LintEngine;
pub use error::KernelError;
pub use finding::{Finding, Location, Position, SEVERITY_ERROR, SEVERITY_INFO, SEVERITY_WARNING};
pub use kernel::Kernel;
pub use request::{KernelFilterRule, KernelPlugin, KernelRule, LintRequest};
pub use rule::{
    FilterContext, FilterRule, IgnoreRange, Plugin, ReportLocation, Rule, RuleContext, RuleError,
};
pub use source::LineIndex;
