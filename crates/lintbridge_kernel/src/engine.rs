//! Linting engine abstraction.
//!
//! This module provides the `LintEngine` trait which abstracts the engine
//! that performs a pass, so the editor adapter can drive the built-in
//! [`Kernel`](crate::Kernel) or any other implementation.

use futures_util::future::BoxFuture;

use crate::{Finding, KernelError, LintRequest};

/// Trait for asynchronous linting engines.
pub trait LintEngine: Send + Sync + 'static {
    /// Runs one linting pass.
    ///
    /// # Arguments
    ///
    /// * `request` - Document text plus the rules, filter rules and plugins to apply
    ///
    /// # Returns
    ///
    /// Every finding of the pass on success.
    fn lint_text(
        &self,
        request: LintRequest,
    ) -> BoxFuture<'static, Result<Vec<Finding>, KernelError>>;
}
