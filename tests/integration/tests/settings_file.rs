//! Tests for linters configured from a JSONC settings file.

use std::path::PathBuf;

use lintbridge::{
    FilterContext, FilterRule, IgnoreRange, LinterOptions, LinterSettings, RuleContext, RuleError,
    Severity, create_textlint_linter,
};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn flag_word(word: &'static str) -> impl Fn(&mut RuleContext<'_>, &Value) + Send + Sync {
    move |ctx, _options| {
        let byte_offsets: Vec<usize> = ctx.source().match_indices(word).map(|(i, _)| i).collect();
        for byte_offset in byte_offsets {
            let start = ctx.source()[..byte_offset].chars().count();
            let end = start + word.chars().count();
            ctx.report(RuleError::new(format!("Found {}", word)).with_range(start..end));
        }
    }
}

/// Ignores every line that ends with `(ok)`.
struct AllowMarked;

impl FilterRule for AllowMarked {
    fn ignores(&self, ctx: &FilterContext<'_>, _options: &Value) -> Vec<IgnoreRange> {
        let mut ranges = Vec::new();
        let mut start = 0;
        for line in ctx.source.split('\n') {
            let len = line.chars().count();
            if line.ends_with("(ok)") {
                ranges.push(IgnoreRange::all(start..start + len));
            }
            start += len + 1;
        }
        ranges
    }
}

fn options_from_fixture() -> LinterOptions {
    let settings = LinterSettings::from_file(fixtures_dir().join("lintbridge.jsonc")).unwrap();
    LinterOptions::new()
        .rule("no-todo", flag_word("TODO"))
        .rule("no-example", flag_word("example"))
        .filter_rule("allow-marked", AllowMarked)
        .with_settings(settings)
}

#[test]
fn fixture_settings_are_normalized() {
    let options = options_from_fixture().normalize();

    assert_eq!(options.ext, ".txt");
    assert_eq!(options.file_path, "notes/today.txt");
    assert_eq!(options.rules[0].options, serde_json::json!({ "severity": "warning" }));
    assert_eq!(options.rules[1].options, Value::Bool(false));
    assert_eq!(options.filter_rules[0].options, Value::Bool(true));
}

#[tokio::test]
async fn fixture_settings_drive_the_kernel() {
    let linter = create_textlint_linter(options_from_fixture());

    let diagnostics = linter
        .lint("an example TODO\nTODO later (ok)\nlast TODO")
        .await;

    let lines: Vec<u32> = diagnostics.iter().map(|d| d.from.line).collect();
    assert_eq!(lines, vec![0, 2]);
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
    assert!(diagnostics.iter().all(|d| d.source.as_deref() == Some("no-todo")));
}
