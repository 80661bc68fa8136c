//! Editor-facing lint entry points.

use std::fmt;
use std::sync::Arc;

use lintbridge_kernel::{Kernel, LintEngine};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::mapping::{Diagnostic, LineColumnModel, PositionModel, to_diagnostics};
use crate::options::{LinterOptions, NormalizedOptions};

/// Creates a linter over `options` with the built-in kernel and
/// 0-indexed line/column positions.
pub fn create_textlint_linter(options: LinterOptions) -> TextlintLinter {
    TextlintLinter::builder(options).build()
}

/// The linter handed to the editor.
///
/// Options are normalized once when the linter is built and shared by
/// every pass. Cloning is cheap; clones share the options and the engine.
pub struct TextlintLinter<M = LineColumnModel, E = Kernel> {
    inner: Arc<Inner<M, E>>,
}

struct Inner<M, E> {
    options: NormalizedOptions,
    model: M,
    engine: E,
}

impl<M, E> Clone for TextlintLinter<M, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: fmt::Debug, E: fmt::Debug> fmt::Debug for TextlintLinter<M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextlintLinter")
            .field("options", &self.inner.options)
            .field("model", &self.inner.model)
            .field("engine", &self.inner.engine)
            .finish()
    }
}

impl TextlintLinter {
    /// Starts building a linter with the default model and engine.
    pub fn builder(options: LinterOptions) -> LinterBuilder {
        LinterBuilder {
            options: options.normalize(),
            model: LineColumnModel,
            engine: Kernel::new(),
        }
    }
}

impl<M, E> TextlintLinter<M, E>
where
    M: PositionModel,
    E: LintEngine,
{
    /// Returns the normalized options shared by every pass.
    pub fn options(&self) -> &NormalizedOptions {
        &self.inner.options
    }

    /// Lints `text` and returns its diagnostics.
    ///
    /// Returns an empty list without calling the engine when no rule is
    /// registered or `text` is empty. Engine failures are logged and also
    /// produce an empty list. With the built-in kernel the future can be
    /// driven by any executor.
    pub async fn lint(&self, text: &str) -> Vec<Diagnostic<M::Position>> {
        let inner = &self.inner;

        if !inner.options.has_rules() {
            debug!("No rules registered, skipping lint");
            return Vec::new();
        }
        if text.is_empty() {
            return Vec::new();
        }

        match inner.engine.lint_text(inner.options.request(text)).await {
            Ok(findings) => {
                debug!("Lint produced {} findings", findings.len());
                to_diagnostics(&inner.model, text, &findings)
            }
            Err(e) => {
                error!("Lint error: {}", e);
                Vec::new()
            }
        }
    }

    /// Lints `text` in the background and hands the diagnostics to
    /// `callback`.
    ///
    /// The pass is spawned on the current [`LocalSet`](tokio::task::LocalSet),
    /// which only runs it once the caller yields. The callback therefore runs
    /// exactly once, always after this method has returned, on the caller's
    /// thread.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a `LocalSet`.
    pub fn lint_with_callback<F>(&self, text: impl Into<String>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Vec<Diagnostic<M::Position>>) + 'static,
    {
        let linter = self.clone();
        let text = text.into();

        tokio::task::spawn_local(async move {
            let diagnostics = linter.lint(&text).await;
            callback(diagnostics);
        })
    }
}

/// Builder returned by [`TextlintLinter::builder`].
pub struct LinterBuilder<M = LineColumnModel, E = Kernel> {
    options: NormalizedOptions,
    model: M,
    engine: E,
}

impl<M, E> LinterBuilder<M, E> {
    /// Selects the editor coordinate model.
    pub fn with_model<M2: PositionModel>(self, model: M2) -> LinterBuilder<M2, E> {
        LinterBuilder {
            options: self.options,
            model,
            engine: self.engine,
        }
    }

    /// Replaces the engine.
    pub fn with_engine<E2: LintEngine>(self, engine: E2) -> LinterBuilder<M, E2> {
        LinterBuilder {
            options: self.options,
            model: self.model,
            engine,
        }
    }
}

impl<M: PositionModel, E: LintEngine> LinterBuilder<M, E> {
    /// Builds the linter.
    pub fn build(self) -> TextlintLinter<M, E> {
        TextlintLinter {
            inner: Arc::new(Inner {
                options: self.options,
                model: self.model,
                engine: self.engine,
            }),
        }
    }
}
