//! End-to-end tests for the editor linter.
//!
//! Each test builds a linter through the public factory and drives it the
//! way an editor's lint hook would.

use std::cell::Cell;
use std::rc::Rc;

use lintbridge::{
    Diagnostic, LineCh, LinterOptions, RuleContext, RuleError, Severity, TextlintLinter,
    create_textlint_linter,
};
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::LocalSet;

fn report_at_start(ctx: &mut RuleContext<'_>, _options: &Value) {
    ctx.report(RuleError::new("message"));
}

fn no_todo(ctx: &mut RuleContext<'_>, _options: &Value) {
    let byte_offsets: Vec<usize> = ctx.source().match_indices("TODO:").map(|(i, _)| i).collect();
    for byte_offset in byte_offsets {
        let start = ctx.source()[..byte_offset].chars().count();
        ctx.report(RuleError::new("Found TODO: marker").with_range(start..start + 5));
    }
}

/// Runs a push-style pass and waits for its callback.
async fn lint_via_callback(linter: &TextlintLinter, text: &str) -> Vec<Diagnostic<LineCh>> {
    let (tx, rx) = oneshot::channel();
    LocalSet::new()
        .run_until(async move {
            linter.lint_with_callback(text, move |diagnostics| {
                let _ = tx.send(diagnostics);
            });
            rx.await.unwrap()
        })
        .await
}

mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn single_finding_at_document_start() {
        let linter = create_textlint_linter(LinterOptions::new().rule("start", report_at_start));

        let diagnostics = lint_via_callback(&linter, "test text").await;

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].from, LineCh { line: 0, ch: 0 });
        assert_eq!(diagnostics[0].message, "message");
    }

    #[tokio::test]
    async fn todo_marker_is_flagged() {
        let linter = create_textlint_linter(LinterOptions::new().rule("no-todo", no_todo));

        let diagnostics = linter.lint("This is a TODO: item").await;

        assert!(!diagnostics.is_empty());
        assert!(diagnostics[0].message.contains("TODO"));
        assert_eq!(diagnostics[0].from, LineCh::new(0, 10));
        assert_eq!(diagnostics[0].to, LineCh::new(0, 15));
        assert_eq!(diagnostics[0].source.as_deref(), Some("no-todo"));
    }

    #[tokio::test]
    async fn empty_document_resolves_callback_with_nothing() {
        let linter = create_textlint_linter(
            LinterOptions::new()
                .rule("start", report_at_start)
                .rule("no-todo", no_todo),
        );

        assert!(lint_via_callback(&linter, "").await.is_empty());
        assert!(linter.lint("").await.is_empty());
    }
}

mod conventions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn pull_and_push_agree() {
        let linter = create_textlint_linter(LinterOptions::new().rule("no-todo", no_todo));
        let text = "TODO: one\nand TODO: two";

        let pulled = linter.lint(text).await;
        let pushed = lint_via_callback(&linter, text).await;

        assert_eq!(pulled, pushed);
        assert_eq!(pulled.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn callback_never_fires_before_the_call_returns() {
        let linter = create_textlint_linter(LinterOptions::new().rule("no-todo", no_todo));
        let early = Rc::new(Cell::new(0));
        let fired = Rc::new(Cell::new(0));

        LocalSet::new()
            .run_until(async {
                let mut handles = Vec::new();
                for i in 0..2000 {
                    let text = if i % 2 == 0 { "" } else { "TODO: x" };
                    let returned = Rc::new(Cell::new(false));
                    let (flag, early, fired) =
                        (Rc::clone(&returned), Rc::clone(&early), Rc::clone(&fired));
                    handles.push(linter.lint_with_callback(text, move |_| {
                        if !flag.get() {
                            early.set(early.get() + 1);
                        }
                        fired.set(fired.get() + 1);
                    }));
                    returned.set(true);
                }
                for handle in handles {
                    handle.await.unwrap();
                }
            })
            .await;

        assert_eq!(early.get(), 0);
        assert_eq!(fired.get(), 2000);
    }

    #[tokio::test]
    async fn same_text_twice_is_idempotent() {
        let linter = create_textlint_linter(
            LinterOptions::new()
                .rule("no-todo", no_todo)
                .rule("start", report_at_start),
        );
        let text = "first line\nTODO: second";

        let first = linter.lint(text).await;
        let second = linter.lint(text).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn overlapping_calls_resolve_independently() {
        let linter = create_textlint_linter(LinterOptions::new().rule("no-todo", no_todo));

        let (a, b) = tokio::join!(linter.lint("TODO: a"), linter.lint("nothing here"));

        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[tokio::test]
    async fn rule_severity_comes_from_config() {
        let linter = create_textlint_linter(
            LinterOptions::new()
                .rule("no-todo", no_todo)
                .rule_config("no-todo", serde_json::json!({ "severity": "info" })),
        );

        let diagnostics = linter.lint("TODO: x").await;
        assert_eq!(diagnostics[0].severity, Severity::Info);
    }

    #[tokio::test]
    async fn disabled_rule_reports_nothing() {
        let linter = create_textlint_linter(
            LinterOptions::new()
                .rule("no-todo", no_todo)
                .rule_config("no-todo", Value::Bool(false)),
        );

        assert!(linter.lint("TODO: x").await.is_empty());
    }
}
