use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, Write};

use crate::checks::{CategoryResult, CheckKind, CheckResult};
use crate::RunReport;

const RULE_WIDTH: usize = 40;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

#[derive(Clone, Copy)]
enum Tone {
    Bold,
    Green,
    Red,
}

/// Colors are only ever applied when `color` is set, which callers do when
/// the writer is the process stdout; owo-colors then decides from that stream.
fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Bold => text.if_supports_color(Stdout, |s| s.bold()).to_string(),
        Tone::Green => text.if_supports_color(Stdout, |s| s.green()).to_string(),
        Tone::Red => text.if_supports_color(Stdout, |s| s.red()).to_string(),
    }
}

pub fn print_header<W: Write>(out: &mut W, title: &str, color: bool) -> io::Result<()> {
    writeln!(out, "{}", paint(title, Tone::Bold, color))?;
    writeln!(out, "{}", rule())
}

pub fn print_category<W: Write>(
    out: &mut W,
    category: &CategoryResult,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "Testing {}...", category.name)?;
    for result in &category.results {
        let tone = if result.passed { Tone::Green } else { Tone::Red };
        writeln!(out, "{}", paint(&format_line(result, category.kind), tone, color))?;
    }
    Ok(())
}

fn format_line(result: &CheckResult, kind: CheckKind) -> String {
    match (&result.detail, result.passed, kind) {
        (Some(detail), _, _) => format!("\u{274c} Unreadable: {} ({detail})", result.label),
        (None, true, CheckKind::FileExists) => format!("\u{2705} {}", result.label),
        (None, false, CheckKind::FileExists) => format!("\u{274c} {} missing", result.label),
        (None, true, CheckKind::ContentContains) => format!("\u{2705} Contains: {}", result.label),
        (None, false, CheckKind::ContentContains) => format!("\u{274c} Missing: {}", result.label),
    }
}

/// Print the closing banner. Returns true if every category passed.
pub fn print_summary<W: Write>(
    out: &mut W,
    categories: &[CategoryResult],
    color: bool,
) -> io::Result<bool> {
    let all_passed = categories.iter().all(CategoryResult::passed);
    writeln!(out, "{}", rule())?;
    if all_passed {
        writeln!(out, "{}", paint("\u{1f389} All simple tests passed!", Tone::Green, color))?;
    } else {
        writeln!(out, "{}", paint("\u{274c} Some tests failed", Tone::Red, color))?;
    }
    Ok(all_passed)
}

pub fn print_json<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
