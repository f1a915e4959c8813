use crossterm::style::Color;
use unicode_width::UnicodeWidthStr;

use super::Style;
use crate::session::ItemReport;

const SYMBOL_COLUMN: usize = 8;
const SCORE_COLUMN: usize = 7;

/// Pad `text` to `width` terminal columns; kana and kanji take two columns each
fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

/// Pure presenter for a single row of the weakest-symbols table
pub fn present_row(report: &ItemReport, style: Style) -> String {
    let score_color = if report.score > 0 {
        Color::Green
    } else if report.score == 0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let score = pad(&format!("{:+}", report.score), SCORE_COLUMN);
    format!(
        "{}{}{:.3}",
        pad(&report.symbol, SYMBOL_COLUMN),
        style.paint(&score, score_color),
        report.weight
    )
}

/// Table of the symbols most likely to come up next
pub fn render_weakest(reports: &[ItemReport], style: Style) -> String {
    if reports.is_empty() {
        return "No symbols to show.\n".to_string();
    }

    let mut out = format!(
        "{}{}{}\n",
        pad("Symbol", SYMBOL_COLUMN),
        pad("Score", SCORE_COLUMN),
        "Weight"
    );
    for report in reports {
        out.push_str(&present_row(report, style));
        out.push('\n');
    }
    out
}
