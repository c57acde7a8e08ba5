//! Plain-text rendering of the visible rows.

use super::projection::{ViewNode, ViewTree};

/// Header of the fixed name column.
pub const NAME_HEADER: &str = "Classification Tree";

const COLUMN_GAP: &str = "  ";

fn name_cell(node: &ViewNode) -> String {
    let marker = if node.is_leaf() {
        "  "
    } else if node.open {
        "- "
    } else {
        "+ "
    };
    format!("{}{}{}", "  ".repeat(node.depth), marker, node.label)
}

/// Render the visible rows as an aligned table.
///
/// The first line holds the headers. Each following line is one visible row,
/// indented by depth and marked `-` (open), `+` (closed) or blank (leaf).
pub fn format_table(view: &ViewTree) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();

    let mut header = vec![NAME_HEADER.to_string()];
    header.extend(view.headers().into_iter().map(str::to_string));
    rows.push(header);

    for id in view.visible() {
        let node = view.node(id);
        let mut row = vec![name_cell(node)];
        row.extend(node.cells.iter().cloned());
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}
