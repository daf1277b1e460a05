//! The `stylish` console formatter.
//!
//! Renders per-file blocks of aligned message rows followed by a one-line
//! summary:
//!
//! ```text
//!
//! foo.scss
//!   5:10  error    Unexpected foo  foo
//!   6:1   warning  Unexpected bar  bar
//!
//! ✖ 2 problems (1 error, 1 warning)
//! ```
//!
//! Only the summary line is passed through the [`Styler`].

use crate::finding::{FileResult, Totals};
use crate::output::style::Styler;

const SUMMARY_MARKER: &str = "\u{2716}";

/// Formats `results` as a stylish report.
///
/// Returns an empty string when no file has any messages; in that case the
/// styler is not called. Otherwise the report starts with a newline, ends
/// with exactly one newline, and the summary text is styled exactly once:
/// as an error when the total error count is non-zero, else as a warning
/// when the total warning count is non-zero.
///
/// Summary counts come from each file's `error_count` / `warning_count`,
/// not from its messages.
pub fn format(results: &[FileResult], styler: &dyn Styler) -> String {
    if results.iter().all(|r| r.messages.is_empty()) {
        return String::new();
    }

    let mut out = String::new();
    for result in results.iter().filter(|r| !r.messages.is_empty()) {
        push_file_block(&mut out, result);
    }

    let totals = Totals::from_results(results);
    tracing::debug!(
        files = results.len(),
        errors = totals.errors,
        warnings = totals.warnings,
        "rendered stylish report"
    );

    let summary = summary_line(&totals);
    let styled = if totals.has_errors() {
        styler.error(&summary)
    } else if totals.has_warnings() {
        styler.warning(&summary)
    } else {
        summary
    };

    out.push('\n');
    out.push_str(&styled);
    out.push('\n');
    out
}

fn push_file_block(out: &mut String, result: &FileResult) {
    let rows: Vec<(String, &str, &str, &str)> = result
        .messages
        .iter()
        .map(|m| {
            (
                format!("{}:{}", m.line, m.column),
                m.severity.label(),
                m.display_text(),
                m.rule_id.as_str(),
            )
        })
        .collect();

    // Padding is computed per file block.
    let (pos_width, label_width) = rows.iter().fold((0, 0), |(p, l), row| {
        (p.max(row.0.chars().count()), l.max(row.1.chars().count()))
    });

    out.push('\n');
    out.push_str(&result.file_path);
    out.push('\n');
    for (position, label, text, rule_id) in &rows {
        let row = format!("  {position:<pos_width$}  {label:<label_width$}  {text}  {rule_id}");
        out.push_str(row.trim_end());
        out.push('\n');
    }
}

fn summary_line(totals: &Totals) -> String {
    let problems = totals.problems();
    format!(
        "{SUMMARY_MARKER} {problems} {} ({} {}, {} {})",
        pluralize("problem", problems),
        totals.errors,
        pluralize("error", totals.errors),
        totals.warnings,
        pluralize("warning", totals.warnings),
    )
}

/// Appends an `s` unless `count` is exactly 1.
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
