//! Output formatting for lint results.

use anyhow::Result;
use case_lint_core::{Diagnostic, LintResult, Severity, ViolationDiagnostic};
use miette::NamedSource;
use std::fmt::Write as _;
use std::path::Path;

use crate::OutputFormat;

/// Prints lint results in the specified format.
///
/// `root` is where reported paths are relative to; `pretty` re-reads files
/// from there to render source excerpts.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Information => "\x1b[34minfo\x1b[0m",
        Severity::Hint => "\x1b[36mhint\x1b[0m",
    }
}

fn render_text(result: &LintResult) -> String {
    let mut out = String::new();

    for report in &result.reports {
        for d in &report.diagnostics {
            let v = &d.violation;
            let _ = writeln!(
                out,
                "{} {} at {}:{}:{}",
                v.kind,
                v.rule,
                report.file.display(),
                d.range.start.line + 1,
                d.range.start.character + 1,
            );
            let _ = writeln!(out, "  {}: {}", severity_indicator(d.severity), d.message);
            let _ = writeln!(out, "  = help: rename to follow {}, e.g. {}", v.rule, v.example());
            out.push('\n');
        }
    }

    for failure in &result.parse_errors {
        let _ = writeln!(out, "\x1b[31merror\x1b[0m: {}\n", failure.message);
    }

    out.push_str(&summary(result));
    out
}

fn summary(result: &LintResult) -> String {
    let counts = result.count_by_severity();
    let color = if counts.errors > 0 || result.has_parse_errors() {
        "\x1b[31m"
    } else if counts.warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    let mut line = format!(
        "{color}Found {} error(s), {} warning(s), {} info(s), {} hint(s) in {} file(s)",
        counts.errors, counts.warnings, counts.infos, counts.hints, result.files_checked
    );
    if result.has_parse_errors() {
        let _ = write!(line, "; {} file(s) failed to parse", result.parse_errors.len());
    }
    line.push_str("\x1b[0m\n");
    line
}

fn compact_line(file: &Path, d: &Diagnostic) -> String {
    format!(
        "{}:{}:{}: {} [{}] {}",
        file.display(),
        d.range.start.line + 1,
        d.range.start.character + 1,
        d.severity,
        d.violation.rule,
        d.message,
    )
}

fn render_compact(result: &LintResult) -> String {
    let mut out = String::new();
    for report in &result.reports {
        for d in &report.diagnostics {
            out.push_str(&compact_line(&report.file, d));
            out.push('\n');
        }
    }
    for failure in &result.parse_errors {
        let _ = writeln!(out, "{}: error [parse] {}", failure.file.display(), failure.message);
    }
    out
}

fn print_pretty(result: &LintResult, root: &Path) {
    for report in &result.reports {
        let path = if root.is_file() {
            root.to_path_buf()
        } else {
            root.join(&report.file)
        };
        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Cannot re-read {} for display: {e}", path.display());
                for d in &report.diagnostics {
                    println!("{}", compact_line(&report.file, d));
                }
                continue;
            }
        };

        let name = report.file.display().to_string();
        for d in &report.diagnostics {
            let diagnostic = ViolationDiagnostic::new(&d.violation, d.message.clone());
            let rendered = miette::Report::new(diagnostic)
                .with_source_code(NamedSource::new(name.clone(), source.clone()));
            println!("{rendered:?}");
        }
    }

    for failure in &result.parse_errors {
        println!("{}: {}", failure.file.display(), failure.message);
    }

    print!("{}", summary(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_lint_core::{FileReport, Locale, ParseFailure, Violation, ViolationKind};
    use std::path::PathBuf;

    fn result() -> LintResult {
        let violation = Violation {
            name: "pi".into(),
            line: 2,
            character: 6,
            end_character: 8,
            kind: ViolationKind::Constant,
            rule: "UPPER_SNAKE_CASE".into(),
            offset: 30,
        };
        LintResult {
            reports: vec![FileReport {
                file: PathBuf::from("src/math.ts"),
                diagnostics: vec![Diagnostic::from_violation(
                    violation,
                    Severity::Error,
                    Locale::En,
                )],
            }],
            parse_errors: vec![ParseFailure {
                file: PathBuf::from("src/broken.ts"),
                message: "src/broken.ts:1:7: syntax error".into(),
            }],
            files_checked: 2,
        }
    }

    #[test]
    fn compact_lines_are_one_based() {
        assert_eq!(
            render_compact(&result()),
            "src/math.ts:3:7: error [UPPER_SNAKE_CASE] Constant name \"pi\" does not follow UPPER_SNAKE_CASE (e.g. MAX_RETRY)\n\
             src/broken.ts: error [parse] src/broken.ts:1:7: syntax error\n"
        );
    }

    #[test]
    fn text_includes_help_and_summary() {
        let text = render_text(&result());
        assert!(text.contains("constant UPPER_SNAKE_CASE at src/math.ts:3:7"));
        assert!(text.contains("= help: rename to follow UPPER_SNAKE_CASE, e.g. MAX_RETRY"));
        assert!(text.contains(
            "Found 1 error(s), 0 warning(s), 0 info(s), 0 hint(s) in 2 file(s); 1 file(s) failed to parse"
        ));
    }

    #[test]
    fn empty_result_summary_is_green() {
        let text = render_text(&LintResult::new());
        assert!(text.starts_with("\x1b[32mFound 0 error(s)"));
    }
}
