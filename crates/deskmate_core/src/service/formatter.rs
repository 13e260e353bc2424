//! Plain-text conversion helpers behind the formatter panel.
//!
//! # Responsibility
//! - Convert delimiter-separated text into CSV, markdown tables and lists.
//!
//! # Invariants
//! - Blank input converts to the empty string.
//! - Conversions are pure; no state, no I/O.

/// Default column delimiter: pasted spreadsheet cells arrive tab-separated.
pub const DEFAULT_DELIMITER: char = '\t';

/// Converts delimiter-separated lines into CSV with minimal quoting.
///
/// Fields containing a comma, quote or newline are wrapped in quotes with
/// embedded quotes doubled; everything else is emitted bare.
pub fn to_csv(text: &str, delimiter: char) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for (index, line) in trimmed.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let mut first = true;
        for field in line.split(delimiter) {
            if !first {
                out.push(',');
            }
            first = false;
            out.push_str(&csv_escape(field));
        }
    }
    out
}

/// Converts delimiter-separated lines into a markdown table.
///
/// The first line becomes the header; short body rows are padded with empty
/// cells and long rows truncated to the header width.
pub fn to_markdown_table(text: &str, delimiter: char) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut lines = trimmed.lines();
    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split(delimiter).collect(),
        None => return String::new(),
    };
    let width = header.len();

    let mut table = String::new();
    push_row(&mut table, header.iter().copied());
    table.push('\n');
    push_row(&mut table, std::iter::repeat("---").take(width));

    for line in lines {
        let mut cells: Vec<&str> = line.split(delimiter).collect();
        cells.resize(width, "");
        table.push('\n');
        push_row(&mut table, cells.into_iter());
    }
    table
}

/// Prefixes each trimmed line, turning pasted text into a bullet list.
pub fn to_list(text: &str, prefix: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    trimmed
        .lines()
        .map(|line| format!("{prefix}{}", line.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits space-separated tokens onto their own lines.
pub fn space_to_newline(text: &str) -> String {
    text.trim().replace(' ', "\n")
}

// Minimal CSV escaping: wrap in quotes and double any existing quotes,
// but only when the field actually needs it.
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell.trim());
        out.push_str(" |");
    }
}
