//! Plain-text rendering of aggregated shopping lists

use crate::models::AggregatedLine;
use rust_decimal::Decimal;

/// Format an amount without trailing zeros: 350.00 -> "350", 0.50 -> "0.5"
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Render one line as `<name> (<unit>) — <amount>`
pub fn format_line(line: &AggregatedLine) -> String {
    format!("{} ({}) — {}", line.name, line.unit, format_amount(line.amount))
}

/// Render lines as a newline-terminated text document, in the given order
pub fn render(lines: &[AggregatedLine]) -> Vec<u8> {
    render_document(None, lines)
}

/// Render with an optional title line followed by a blank line
pub fn render_document(title: Option<&str>, lines: &[AggregatedLine]) -> Vec<u8> {
    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(title);
        out.push_str("\n\n");
    }
    for line in lines {
        out.push_str(&format_line(line));
        out.push('\n');
    }
    out.into_bytes()
}
