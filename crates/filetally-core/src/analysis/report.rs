/// Report rendering — plain-text formatting at the display boundary.
///
/// Counts come in, text goes out; nothing here touches the filesystem.
use super::categories::CategoryGroup;
use crate::model::ScanResult;

/// Cells per grid row.
const GRID_COLUMNS: usize = 5;

/// Render the category blocks: for each group a header line with the
/// category label, a blank line, then the (extension, count) pairs laid
/// out [`GRID_COLUMNS`] per row as a bordered grid of cells reading
/// `"<ext>: <count> file(s)"`. One blank line separates category blocks.
/// Empty input renders to `""`.
pub fn render_groups(groups: &[CategoryGroup]) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(groups.len());
    for group in groups {
        let cells: Vec<String> = group
            .pairs
            .iter()
            .map(|(ext, count)| format!("{ext}: {count} file(s)"))
            .collect();
        blocks.push(format!(
            "{}:\n\n{}",
            group.category.label(),
            format_grid(&cells, GRID_COLUMNS)
        ));
    }
    blocks.join("\n\n")
}

/// Build the full text block for the summary area: totals, then the
/// per-category grids, then a skipped-directories note when applicable.
pub fn summary_text(result: &ScanResult, groups: &[CategoryGroup]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total folders: {}\n", result.folder_count));
    out.push_str(&format!("Total files: {}\n\n", result.file_count));
    out.push_str("Files per extension:\n\n");
    out.push_str(&render_groups(groups));
    if !result.unreadable.is_empty() {
        out.push_str(&format!(
            "\n\nSkipped {} unreadable director{}.",
            result.unreadable.len(),
            if result.unreadable.len() == 1 { "y" } else { "ies" }
        ));
    }
    out
}

/// Lay `cells` out in rows of at most `columns`, rendered as a bordered
/// grid with one space of padding per cell.
///
/// Column widths follow the widest cell in each column; a short final row
/// is padded with empty cells so every row has the same shape.
fn format_grid(cells: &[String], columns: usize) -> String {
    if cells.is_empty() {
        return String::new();
    }
    let columns = columns.min(cells.len());

    let mut widths = vec![0usize; columns];
    for (i, cell) in cells.iter().enumerate() {
        let col = i % columns;
        widths[col] = widths[col].max(cell.chars().count());
    }

    let mut rule = String::from("+");
    for &w in &widths {
        rule.push_str(&"-".repeat(w + 2));
        rule.push('+');
    }

    let mut lines = vec![rule.clone()];
    for row in cells.chunks(columns) {
        let mut line = String::from("|");
        for (col, &width) in widths.iter().enumerate() {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        lines.push(line);
        lines.push(rule.clone());
    }
    lines.join("\n")
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
