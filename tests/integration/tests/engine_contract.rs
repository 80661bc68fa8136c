//! Tests for the contract between the linter and a pluggable engine.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::future::BoxFuture;
use lintbridge::{
    LineCh, LineColumnModel, LinterOptions, OffsetModel, RuleContext, Severity, TextlintLinter,
    mapping::to_diagnostics,
};
use lintbridge_kernel::{
    Finding, KernelError, LineIndex, LintEngine, LintRequest, Location, Position,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::Value;

fn noop(_: &mut RuleContext<'_>, _: &Value) {}

/// Engine that returns canned findings and counts invocations.
struct CannedEngine {
    calls: Arc<AtomicUsize>,
    findings: Vec<Finding>,
}

impl CannedEngine {
    fn new(findings: Vec<Finding>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = Self {
            calls: Arc::clone(&calls),
            findings,
        };
        (engine, calls)
    }
}

impl LintEngine for CannedEngine {
    fn lint_text(
        &self,
        _request: LintRequest,
    ) -> BoxFuture<'static, Result<Vec<Finding>, KernelError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let findings = self.findings.clone();
        Box::pin(async move { Ok(findings) })
    }
}

#[tokio::test]
async fn zero_rules_never_reach_the_engine() {
    let (engine, calls) = CannedEngine::new(vec![Finding::new("unused", 1, 1)]);
    let linter = TextlintLinter::builder(LinterOptions::new())
        .with_engine(engine)
        .build();

    for text in ["", "text", "TODO: x\nmore"] {
        assert!(linter.lint(text).await.is_empty());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn every_finding_becomes_one_diagnostic() {
    let findings = vec![
        Finding::new("warn", 1, 3).with_severity(1).with_rule_id("a"),
        Finding::new("error", 2, 1).with_severity(2).with_rule_id("b"),
        Finding::new("info", 2, 2).with_severity(3),
        Finding::new("unknown", 1, 1).with_severity(7),
        Finding::new("far away", 50, 50),
    ];
    let (engine, calls) = CannedEngine::new(findings);
    let linter = TextlintLinter::builder(LinterOptions::new().rule("noop", noop))
        .with_engine(engine)
        .build();

    let diagnostics = linter.lint("line one\nline two").await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let severities: Vec<_> = diagnostics.iter().map(|d| d.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Warning,
            Severity::Error,
            Severity::Info,
            Severity::Error,
            Severity::Error,
        ]
    );
    assert_eq!(diagnostics[0].from, LineCh::new(0, 2));
    assert_eq!(diagnostics[1].source.as_deref(), Some("b"));
    assert_eq!(diagnostics[2].source, None);
    assert_eq!(diagnostics[4].from, LineCh::new(1, 8));
}

#[tokio::test]
async fn offset_model_uses_line_starts() {
    let finding = Finding::new("span", 2, 3)
        .with_location(Location::new(Position::new(2, 3), Position::new(3, 1)));
    let (engine, _) = CannedEngine::new(vec![finding]);
    let linter = TextlintLinter::builder(LinterOptions::new().rule("noop", noop))
        .with_model(OffsetModel)
        .with_engine(engine)
        .build();

    let diagnostics = linter.lint("ab\ncdef\ng").await;

    assert_eq!(diagnostics[0].from, 5);
    assert_eq!(diagnostics[0].to, 8);
}

fn arbitrary_finding() -> impl Strategy<Value = Finding> {
    (0u32..20, 0u32..40, 0u32..20, 0u32..40, proptest::option::of(-1i32..5)).prop_map(
        |(start_line, start_col, end_line, end_col, severity)| {
            let start = Position::new(start_line, start_col);
            let end = Position::new(end_line, end_col);
            let mut finding =
                Finding::new("m", start_line, start_col).with_location(Location::new(start, end));
            finding.severity = severity;
            finding
        },
    )
}

proptest! {
    #[test]
    fn diagnostics_stay_inside_the_document(
        text in "[a-z \n]{0,60}",
        findings in proptest::collection::vec(arbitrary_finding(), 0..10),
    ) {
        let index = LineIndex::new(&text);

        let diagnostics = to_diagnostics(&LineColumnModel, &text, &findings);
        prop_assert_eq!(diagnostics.len(), findings.len());
        for diagnostic in &diagnostics {
            for position in [diagnostic.from, diagnostic.to] {
                let line = position.line as usize;
                prop_assert!(line < index.line_count());
                prop_assert!(position.ch as usize <= index.line_len(line).unwrap());
            }
        }

        for offset in to_diagnostics(&OffsetModel, &text, &findings)
            .iter()
            .flat_map(|d| [d.from, d.to])
        {
            prop_assert!(offset <= index.len());
        }
    }
}
